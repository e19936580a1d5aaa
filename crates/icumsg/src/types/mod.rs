//! Value types passed to templates.

mod value;

pub use value::{Value, Values, format_number};
