//! Core analyzer trait definition.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Frequency Counter
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Token Filters
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use reviewlens::analysis::analyzer::Analyzer;
//! use reviewlens::analysis::token::{Token, TokenStream};
//! use reviewlens::error::Result;
//!
//! struct WholeTextAnalyzer;
//!
//! impl Analyzer for WholeTextAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens = vec![Token::new(text.to_lowercase(), 0)];
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "whole_text"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
