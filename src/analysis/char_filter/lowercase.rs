//! Lowercase char filter.
//!
//! Lowercases the complete input before it reaches the tokenizer, so word
//! boundaries and token lengths are decided on the lowercased text.
//!
//! # Examples
//!
//! ```
//! use reviewlens::analysis::char_filter::CharFilter;
//! use reviewlens::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("Pelayanan RAMAH"), "pelayanan ramah");
//! ```

use crate::analysis::char_filter::CharFilter;

/// A char filter that converts the input to lowercase.
///
/// ASCII input takes the fast path; anything else uses Unicode-aware
/// lowercasing.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
