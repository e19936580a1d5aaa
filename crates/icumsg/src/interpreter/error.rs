//! Diagnostic and error types for rendering and catalog loading.

use icumsg_syntax::ParseError;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A non-fatal problem found while rendering or translating.
///
/// Rendering never fails: every diagnostic comes with a fallback in the
/// output, usually `{name}` for the offending value.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A placeholder or branch refers to a value that was not supplied.
    #[error("missing value for '{name}'")]
    MissingValue { name: String },

    /// A plural branch got a value that is not a finite number.
    #[error("value '{value}' for plural '{name}' is not a number")]
    NotNumeric { name: String, value: String },

    /// Neither the selected key nor `other` exists in a branch.
    #[error("branch '{name}' has no option '{key}' and no 'other' option")]
    MissingOption { name: String, key: String },

    /// A template failed to parse and was output unchanged.
    #[error("invalid template {template:?}: {error}")]
    InvalidTemplate {
        template: String,
        #[serde(serialize_with = "serialize_display")]
        error: ParseError,
    },

    /// No catalog has any entries for the locale.
    #[error("did not find locale '{locale}' in any catalog")]
    MissingLocale { locale: String },

    /// Some catalog has the locale, but none has the key.
    #[error("did not find key '{key}' for locale '{locale}' in any catalog")]
    MissingKey { locale: String, key: String },
}

/// Coarse classification of [`Diagnostic`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A value was absent or unusable.
    MissingValue,
    /// A branch had nothing to select.
    MissingOption,
    /// A template did not parse.
    InvalidTemplate,
    /// A catalog lookup failed.
    MissingTranslation,
}

impl Diagnostic {
    /// Get the classification of this diagnostic.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::MissingValue { .. } | Diagnostic::NotNumeric { .. } => {
                DiagnosticKind::MissingValue
            }
            Diagnostic::MissingOption { .. } => DiagnosticKind::MissingOption,
            Diagnostic::InvalidTemplate { .. } => DiagnosticKind::InvalidTemplate,
            Diagnostic::MissingLocale { .. } | Diagnostic::MissingKey { .. } => {
                DiagnosticKind::MissingTranslation
            }
        }
    }
}

/// Errors that occur while loading templates into a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The template for a catalog entry does not parse.
    #[error("invalid template for '{locale}:{key}': {source}")]
    InvalidTemplate {
        locale: String,
        key: String,
        #[source]
        source: ParseError,
    },
}

fn serialize_display<S: Serializer>(error: &ParseError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
