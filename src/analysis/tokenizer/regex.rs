//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, ReviewLensError};

/// Minimum token length (in characters) used by the default pattern.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// Matches are found with a greedy, left-to-right, non-overlapping scan. The
/// default pattern `\b\w{3,}\b` extracts maximal runs of Unicode word
/// characters (letters, digits, underscore) that are at least three
/// characters long.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_min_length(DEFAULT_MIN_TOKEN_LENGTH)
    }

    /// Create a tokenizer that extracts whole words of at least `min_length`
    /// characters.
    pub fn with_min_length(min_length: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(ReviewLensError::analysis(
                "Minimum token length must be at least 1",
            ));
        }
        Self::with_pattern(&format!(r"\b\w{{{min_length},}}\b"))
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ReviewLensError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
