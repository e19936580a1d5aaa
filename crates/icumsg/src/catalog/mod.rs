//! Translation catalogs and lookup across them.
//!
//! A [`Catalog`] maps locale and key to a [`TranslationEntry`]. A
//! [`Translator`] searches an ordered list of catalogs for the current
//! locale and falls back to a `{{locale:key}}` marker when nothing matches.

mod registry;
mod translator;

pub use registry::{Catalog, TranslationEntry};
pub use translator::Translator;
