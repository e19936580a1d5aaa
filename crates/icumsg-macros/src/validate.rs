//! Compile-time validation for the messages! macro.
//!
//! Template syntax is checked while parsing the input. This pass checks the
//! structure around the templates:
//! 1. Each locale appears in only one block
//! 2. Each key appears only once within a locale

use std::collections::HashSet;

use crate::input::{LocaleBlock, MacroInput};

/// Validate the macro input, reporting every problem found.
pub fn validate(input: &MacroInput) -> syn::Result<()> {
    let mut errors: Option<syn::Error> = None;
    let mut push = |error: syn::Error| match &mut errors {
        Some(existing) => existing.combine(error),
        None => errors = Some(error),
    };

    let mut seen_locales = HashSet::new();
    for locale in &input.locales {
        if !seen_locales.insert(locale.name.name.as_str()) {
            push(syn::Error::new(
                locale.name.span,
                format!("duplicate locale '{}'", locale.name.name),
            ));
        }
        for error in duplicate_keys(locale) {
            push(error);
        }
    }

    errors.map_or(Ok(()), Err)
}

fn duplicate_keys(locale: &LocaleBlock) -> Vec<syn::Error> {
    let mut seen = HashSet::new();
    locale
        .messages
        .iter()
        .filter(|message| !seen.insert(message.name.name.as_str()))
        .map(|message| {
            syn::Error::new(
                message.name.span,
                format!(
                    "duplicate message '{}' in locale '{}'",
                    message.name.name, locale.name.name
                ),
            )
        })
        .collect()
}
