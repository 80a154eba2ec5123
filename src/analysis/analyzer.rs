//! Analyzers combine char filters, a tokenizer and token filters into one
//! text processing pipeline.

pub mod analyzer;
pub mod pipeline;
pub mod review;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use review::ReviewAnalyzer;
