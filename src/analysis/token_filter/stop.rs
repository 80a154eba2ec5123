//! Stop filter implementation.
//!
//! Removes words that carry no signal for review analytics: function words
//! and review boilerplate ("tempat", "good", "bintang", ...). The bundled
//! list mixes Indonesian and English because the review datasets it was
//! built for mix both. Custom lists can be injected or loaded from a file.
//!
//! # Examples
//!
//! ```
//! use reviewlens::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! assert!(filter.is_stop_word("yang"));
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("coffee"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default review stop words (Indonesian and English).
pub const DEFAULT_REVIEW_STOP_WORDS: &[&str] = &[
    "yang", "dan", "untuk", "dengan", "juga", "saya", "kami", "ada", "itu", "di", "ke", "dari",
    "pada", "atau", "tidak", "karena", "dalam", "lagi", "sudah", "kalau", "jadi", "semua", "bisa",
    "aja", "akan", "oleh", "seperti", "mau", "nih", "nya", "cuma", "hanya", "the", "and", "but",
    "was", "with", "you", "are", "not", "very", "good", "tempat", "sangat", "sekali", "enak",
    "banget", "bintang", "mantap", "baik", "banyak", "buat", "cukup", "disini", "tapi", "pasti",
    "saat", "dapat", "memang", "pun", "selama", "serta", "hingga", "bahwa", "tanpa", "tentang",
];

/// Default review stop words as a HashSet.
pub static DEFAULT_REVIEW_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_REVIEW_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Membership is an exact match against the lowercased stop word set; the
/// configured words are lowercased on construction so lookups are
/// case-insensitive for lowercased tokens. There is no stemming.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default review stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_REVIEW_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        let stop_words = stop_words
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Load stop words from a file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(parse_word_list(&content)))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

/// Parse a newline separated word list, skipping blanks and `#` comments.
pub fn parse_word_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}
