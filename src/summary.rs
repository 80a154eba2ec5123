//! Narrative summaries of an analyzed review collection.
//!
//! The [`SummaryGenerator`] turns the outputs of the other components into a
//! [`Summary`]. An empty collection produces [`Summary::NoData`], which
//! renders a fixed message instead of a report full of zeros.

pub mod generator;
pub mod report;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use generator::{SummaryConfig, SummaryGenerator};
pub use report::ReviewReport;

/// Message rendered when there is nothing to summarize.
pub const NO_DATA_MESSAGE: &str = "No review data to analyze.";

/// The result of summarizing a review collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    NoData,
    Report(ReviewReport),
}

impl Summary {
    /// The report, if there was data.
    pub fn report(&self) -> Option<&ReviewReport> {
        match self {
            Summary::NoData => None,
            Summary::Report(report) => Some(report),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Summary::NoData)
    }

    /// Render the summary as markdown.
    pub fn to_markdown(&self) -> String {
        match self {
            Summary::NoData => NO_DATA_MESSAGE.to_string(),
            Summary::Report(report) => report.to_markdown(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}
