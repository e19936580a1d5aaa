//! Catalog storage.

use std::borrow::Cow;
use std::collections::BTreeMap;

use icumsg_syntax::{Node, parse_str};

use crate::interpreter::{DiagnosticSink, LoadError, render_with};
use crate::types::Values;

/// A single translated message.
#[derive(Debug, Clone)]
pub enum TranslationEntry {
    /// Fixed text.
    Text(Cow<'static, str>),
    /// A function compiled by `messages!`.
    Function(fn(&Values, &mut dyn DiagnosticSink) -> String),
    /// A template parsed at load time and rendered by the interpreter.
    Template(Node),
}

impl TranslationEntry {
    /// Produce the message text for `values`.
    pub fn render_with(&self, values: &Values, sink: &mut dyn DiagnosticSink) -> String {
        match self {
            TranslationEntry::Text(text) => text.to_string(),
            TranslationEntry::Function(function) => function(values, sink),
            TranslationEntry::Template(node) => render_with(node, values, sink),
        }
    }
}

/// Translations for any number of locales.
///
/// # Example
///
/// ```
/// use icumsg::{Catalog, values};
/// use icumsg::interpreter::TracingSink;
///
/// let mut catalog = Catalog::new();
/// catalog.insert_text("en", "hello", "Hello");
/// catalog.insert_template("en", "greet", "Hello, {name}!").unwrap();
///
/// let entry = catalog.get("en", "greet").unwrap();
/// assert_eq!(
///     entry.render_with(&values! { "name" => "Alice" }, &mut TracingSink),
///     "Hello, Alice!"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, BTreeMap<String, TranslationEntry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry it replaced.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        entry: TranslationEntry,
    ) -> Option<TranslationEntry> {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), entry)
    }

    /// Insert fixed text.
    pub fn insert_text(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<Cow<'static, str>>,
    ) -> Option<TranslationEntry> {
        self.insert(locale, key, TranslationEntry::Text(text.into()))
    }

    /// Parse a template and insert it.
    ///
    /// Templates without placeholders or branches are stored as text.
    pub fn insert_template(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        template: &str,
    ) -> Result<Option<TranslationEntry>, LoadError> {
        let locale = locale.into();
        let key = key.into();
        let node = match parse_str(template) {
            Ok(node) => node,
            Err(source) => return Err(LoadError::InvalidTemplate { locale, key, source }),
        };
        let entry = match node.literal_text() {
            Some(text) => TranslationEntry::Text(Cow::Owned(text)),
            None => TranslationEntry::Template(node),
        };
        Ok(self.insert(locale, key, entry))
    }

    /// Get an entry.
    pub fn get(&self, locale: &str, key: &str) -> Option<&TranslationEntry> {
        self.locales.get(locale)?.get(key)
    }

    /// Check whether any entry exists for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Get all locales, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Get the keys of one locale, sorted.
    pub fn keys<'a>(&'a self, locale: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.locales
            .get(locale)
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }
}
