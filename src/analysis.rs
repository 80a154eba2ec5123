//! Text analysis for review bodies.
//!
//! Raw review text flows through a pipeline of char filters, a tokenizer and
//! token filters before it reaches the frequency counter:
//!
//! ```text
//! Raw Text → Lowercase → Regex (\w{3,}) → Stop Words → Tokens
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
