//! # ReviewLens
//!
//! Analytics for customer reviews: word frequencies, rating-aware sentiment
//! labels, monthly rating trends and a narrative summary.
//!
//! ## Features
//!
//! - Text analysis pipeline with a bundled Indonesian/English stop word list
//! - Ranked term frequency tables with deterministic tie-breaking
//! - VADER sentiment scoring behind a swappable scorer trait
//! - Calendar-month aggregation and trend detection
//! - Markdown summaries, CSV import and export, and a command line tool
//!
//! ## Example
//!
//! ```
//! use reviewlens::pipeline::{AnalyticsConfig, ReviewAnalytics};
//! use reviewlens::review::{Rating, Review};
//!
//! let analytics = ReviewAnalytics::new(&AnalyticsConfig::default()).unwrap();
//! let reviews = vec![
//!     Review::new("Kopi susu enak, barista ramah", Rating::new(5).unwrap()),
//!     Review::new("Antrian lama, kopi biasa", Rating::new(3).unwrap()),
//! ];
//!
//! let outcome = analytics.analyze(&reviews);
//! println!("{}", outcome.summary);
//! ```

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod review;
pub mod sentiment;
pub mod stats;
pub mod summary;
pub mod temporal;

pub mod prelude {
    pub use crate::analysis::analyzer::ReviewAnalyzer;
    pub use crate::error::{Result, ReviewLensError};
    pub use crate::frequency::{TermCounter, TermFrequencyTable};
    pub use crate::pipeline::{AnalysisOutcome, AnalyticsConfig, ReviewAnalytics};
    pub use crate::review::{Rating, Review, ReviewFilter};
    pub use crate::sentiment::{PolarityScorer, SentimentClassifier, SentimentLabel};
    pub use crate::summary::{Summary, SummaryConfig, SummaryGenerator};
    pub use crate::temporal::{MonthlySeries, TrendDirection};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
