//! Lookup across catalogs for the active locale.

use bon::Builder;

use crate::catalog::registry::{Catalog, TranslationEntry};
use crate::interpreter::{Diagnostic, DiagnosticSink, TracingSink};
use crate::types::Values;

/// Translates keys using an ordered list of catalogs.
///
/// The first catalog with an entry for the current locale and key wins.
/// Missing translations are reported and rendered as `{{locale:key}}`.
///
/// # Example
///
/// ```
/// use icumsg::{Catalog, Translator, values};
///
/// let mut en = Catalog::new();
/// en.insert_text("en", "hello", "Hello");
/// let mut de = Catalog::new();
/// de.insert_text("de", "hello", "Hallo");
///
/// let mut translator = Translator::builder()
///     .locale("de")
///     .catalogs(vec![en, de])
///     .build();
/// assert_eq!(translator.translate("hello", &values! {}), "Hallo");
///
/// translator.set_locale("fr");
/// assert_eq!(translator.translate("hello", &values! {}), "{{fr:hello}}");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Current locale code (e.g. "en", "de").
    #[builder(default = "en".to_string())]
    locale: String,

    /// Catalogs in lookup order.
    #[builder(default)]
    catalogs: Vec<Catalog>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator for `locale` with no catalogs.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Translator::builder().locale(locale.into()).build()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Change the current locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Append a catalog with the lowest lookup priority.
    pub fn push_catalog(&mut self, catalog: Catalog) {
        self.catalogs.push(catalog);
    }

    /// Find the entry for `key` in the current locale.
    pub fn lookup(&self, key: &str) -> Option<&TranslationEntry> {
        self.catalogs
            .iter()
            .find_map(|catalog| catalog.get(&self.locale, key))
    }

    /// Translate `key`, logging diagnostics through [`TracingSink`].
    pub fn translate(&self, key: &str, values: &Values) -> String {
        self.translate_with(key, values, &mut TracingSink)
    }

    /// Translate `key`, reporting diagnostics to `sink`.
    pub fn translate_with(
        &self,
        key: &str,
        values: &Values,
        sink: &mut dyn DiagnosticSink,
    ) -> String {
        if let Some(entry) = self.lookup(key) {
            return entry.render_with(values, sink);
        }
        let locale = self.locale.clone();
        if self.catalogs.iter().any(|catalog| catalog.has_locale(&locale)) {
            sink.report(Diagnostic::MissingKey {
                locale,
                key: key.to_string(),
            });
        } else {
            sink.report(Diagnostic::MissingLocale { locale });
        }
        format!("{{{{{}:{key}}}}}", self.locale)
    }
}
