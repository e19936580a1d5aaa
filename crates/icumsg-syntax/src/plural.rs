//! Plural category resolution.
//!
//! icumsg does not use CLDR plural tables. Every locale shares one bucket
//! table, and both the interpreter and the code emitted by the generator go
//! through [`plural_category`] so the two can never disagree.

/// Category key for exactly zero.
pub const ZERO: &str = "=0";
/// Category key for exactly one.
pub const ONE: &str = "=1";
/// Category key for exactly two.
pub const TWO: &str = "=2";
/// Category key for values strictly between two and five.
pub const FEW: &str = "few";
/// Category key for values of five and above.
pub const MANY: &str = "many";
/// Category key for everything else.
pub const OTHER: &str = "other";

/// Get the plural category key for a number.
///
/// | n                 | key     |
/// |-------------------|---------|
/// | `0`               | `=0`    |
/// | `1`               | `=1`    |
/// | `2`               | `=2`    |
/// | `2 < n < 5`       | `few`   |
/// | `n >= 5`          | `many`  |
/// | anything else     | `other` |
///
/// Negative numbers, fractions below two other than exact matches, NaN and
/// infinities all land in `other`.
///
/// # Examples
///
/// ```
/// use icumsg_syntax::plural_category;
///
/// assert_eq!(plural_category(1.0), "=1");
/// assert_eq!(plural_category(3.0), "few");
/// assert_eq!(plural_category(100.0), "many");
/// assert_eq!(plural_category(-1.0), "other");
/// ```
pub fn plural_category(n: f64) -> &'static str {
    if !n.is_finite() {
        OTHER
    } else if n == 0.0 {
        ZERO
    } else if n == 1.0 {
        ONE
    } else if n == 2.0 {
        TWO
    } else if n > 2.0 && n < 5.0 {
        FEW
    } else if n >= 5.0 {
        MANY
    } else {
        OTHER
    }
}
