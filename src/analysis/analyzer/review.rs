//! Review analyzer: the tokenizer and stopword filter used for term
//! frequency analysis.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter
//! 2. RegexTokenizer (`\b\w{3,}\b`)
//! 3. StopFilter (injected stop word set, bundled review list by default)
//!
//! # Examples
//!
//! ```
//! use reviewlens::analysis::analyzer::ReviewAnalyzer;
//!
//! let analyzer = ReviewAnalyzer::new().unwrap();
//! let terms = analyzer.terms("Tempat yang nyaman, kopi enak dan MURAH!");
//!
//! assert_eq!(terms, vec!["nyaman", "kopi", "murah"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use log::warn;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::StopFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::analysis::tokenizer::regex::DEFAULT_MIN_TOKEN_LENGTH;
use crate::error::Result;

/// The analyzer that turns review text into normalized terms.
pub struct ReviewAnalyzer {
    inner: PipelineAnalyzer,
    stop_filter: StopFilter,
}

impl ReviewAnalyzer {
    /// Create a review analyzer with the bundled stop words.
    pub fn new() -> Result<Self> {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create a review analyzer with a custom stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Result<Self> {
        Self::with_stop_filter(StopFilter::with_stop_words(stop_words))
    }

    /// Create a review analyzer around an existing stop filter.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Result<Self> {
        Self::with_options(DEFAULT_MIN_TOKEN_LENGTH, stop_filter)
    }

    /// Create a review analyzer with a custom minimum token length.
    pub fn with_options(min_token_length: usize, stop_filter: StopFilter) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::with_min_length(min_token_length)?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_filter(Arc::new(stop_filter.clone()))
            .with_name("review");

        Ok(ReviewAnalyzer { inner, stop_filter })
    }

    /// Tokenize review text.
    ///
    /// Never fails: an analysis error is logged and yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        match self.inner.analyze(text) {
            Ok(tokens) => tokens.collect(),
            Err(e) => {
                warn!("Failed to analyze review text: {e}");
                Vec::new()
            }
        }
    }

    /// Tokenize review text and keep only the term strings.
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    /// Get the stop filter used by this analyzer.
    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for ReviewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "review"
    }
}

impl std::fmt::Debug for ReviewAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewAnalyzer")
            .field("inner", &self.inner)
            .field("stop_words", &self.stop_filter.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_analyzer() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        let terms = analyzer.terms("The coffee was GOOD and the staff were friendly");

        assert_eq!(terms, vec!["coffee", "staff", "were", "friendly"]);
    }

    #[test]
    fn test_tokens_respect_length_and_stop_words() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        let text = "Di sini ok, tapi AC-nya dingin banget! Harga 25rb, parkir luas.";

        for token in analyzer.tokenize(text) {
            assert!(token.char_len() >= 3, "{} is too short", token.text);
            assert!(!analyzer.stop_filter().is_stop_word(&token.text));
            assert_eq!(token.text, token.text.to_lowercase());
        }
        assert_eq!(
            analyzer.terms(text),
            vec!["sini", "dingin", "harga", "25rb", "parkir", "luas"]
        );
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        assert_eq!(
            analyzer.terms("kopi susu, kopi hitam, KOPI"),
            vec!["kopi", "susu", "kopi", "hitam", "kopi"]
        );
    }

    #[test]
    fn test_empty_text() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        assert!(analyzer.tokenize("").is_empty());
        assert!(analyzer.tokenize("ok !! ?").is_empty());
    }

    #[test]
    fn test_injected_stop_words() {
        let stop_words: HashSet<String> = ["Coffee".to_string()].into_iter().collect();
        let analyzer = ReviewAnalyzer::with_stop_words(stop_words).unwrap();

        // The bundled list no longer applies
        assert_eq!(analyzer.terms("the coffee was good"), vec!["the", "was", "good"]);
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(ReviewAnalyzer::new().unwrap().name(), "review");
    }
}
