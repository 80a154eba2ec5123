use log::debug;
use serde::{Deserialize, Serialize};

use crate::frequency::TermFrequencyTable;
use crate::review::Review;
use crate::sentiment::SentimentLabel;
use crate::stats::{RatingStats, SentimentSplit};
use crate::summary::{ReviewReport, Summary};
use crate::temporal::{self, MonthlySeries};

/// Options controlling the generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Report the positive/negative split.
    pub include_sentiment: bool,

    /// Number of terms quoted as the most frequent words.
    pub keyword_count: usize,

    /// Number of terms quoted as the focus aspects.
    pub focus_count: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            include_sentiment: true,
            keyword_count: 5,
            focus_count: 3,
        }
    }
}

/// Builds a [`Summary`] from already computed analytics.
#[derive(Debug, Clone, Default)]
pub struct SummaryGenerator {
    config: SummaryConfig,
}

impl SummaryGenerator {
    pub fn new(config: SummaryConfig) -> Self {
        SummaryGenerator { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize a filtered review collection.
    ///
    /// `labels` runs parallel to `reviews`. The output depends only on the
    /// arguments, so repeated calls render identical text.
    pub fn summarize(
        &self,
        reviews: &[Review],
        term_table: &TermFrequencyTable,
        labels: &[SentimentLabel],
        series: &MonthlySeries,
    ) -> Summary {
        let stats = RatingStats::from_reviews(reviews);
        let (Some(mean_rating), Some(modal_rating)) = (stats.mean, stats.mode) else {
            debug!("No reviews to summarize");
            return Summary::NoData;
        };

        let sentiment = self
            .config
            .include_sentiment
            .then(|| SentimentSplit::from_labels(labels));

        let owned = |n: usize| -> Vec<String> {
            term_table
                .top_terms(n)
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        let report = ReviewReport {
            total_reviews: stats.total,
            mean_rating,
            modal_rating,
            rating_distribution: stats.distribution,
            sentiment,
            trend: temporal::trend(series),
            keywords: owned(self.config.keyword_count),
            focus_terms: owned(self.config.focus_count),
        };

        debug!(
            "Summarized {} reviews (mean {:.2}, mode {})",
            report.total_reviews, report.mean_rating, report.modal_rating
        );

        Summary::Report(report)
    }
}
