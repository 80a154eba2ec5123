//! Loading review datasets from CSV and exporting them back.
//!
//! The loader performs the cleaning the analytics core relies on: rows
//! without text or a usable rating are skipped (and counted), ratings are
//! coerced to a [`Rating`](crate::review::Rating), and publish dates are
//! parsed leniently, becoming absent when no known format matches.

pub mod date;
pub mod reader;
pub mod writer;

use serde::{Deserialize, Serialize};

pub use reader::{LoadedDataset, ReviewCsvReader};
pub use writer::ReviewCsvWriter;

/// Column names of a review dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub reviewer_name_column: String,
    pub text_column: String,
    pub rating_column: String,
    pub published_at_column: String,
    /// Column added on export to hold the sentiment label.
    pub sentiment_column: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            reviewer_name_column: "Reviewer Name".to_string(),
            text_column: "Review Text".to_string(),
            rating_column: "Star Given".to_string(),
            published_at_column: "Publish Date".to_string(),
            sentiment_column: "Sentiment".to_string(),
        }
    }
}

/// Row accounting for one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data rows read, excluding the header.
    pub rows: usize,
    /// Rows turned into reviews.
    pub loaded: usize,
    /// Rows rejected as malformed.
    pub skipped: usize,
}
