//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the step of the analysis pipeline that splits (already
//! normalized) text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Extracts regex matches, by default runs of
//!   at least three word characters
//!
//! # Examples
//!
//! ```
//! use reviewlens::analysis::tokenizer::Tokenizer;
//! use reviewlens::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("so tasty, I go").unwrap().collect();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "tasty");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// threads analyzing independent datasets.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::RegexTokenizer;
