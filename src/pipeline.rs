//! End-to-end analytics over one filtered review collection.
//!
//! [`ReviewAnalytics`] wires the analyzer, term counter, sentiment
//! classifier, temporal aggregator and summary generator together. It holds
//! no state between calls: every [`ReviewAnalytics::analyze`] call works only
//! on the reviews it is given.
//!
//! # Examples
//!
//! ```
//! use reviewlens::pipeline::{AnalyticsConfig, ReviewAnalytics};
//! use reviewlens::review::{Rating, Review};
//!
//! let analytics = ReviewAnalytics::new(&AnalyticsConfig::default()).unwrap();
//! let reviews = vec![Review::new("Kopi susu gula aren", Rating::new(5).unwrap())];
//!
//! let outcome = analytics.analyze(&reviews);
//! assert_eq!(outcome.term_table.entries()[0].term, "kopi");
//! assert!(!outcome.summary.is_no_data());
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::ReviewAnalyzer;
use crate::analysis::token_filter::StopFilter;
use crate::analysis::tokenizer::regex::DEFAULT_MIN_TOKEN_LENGTH;
use crate::error::{Result, ReviewLensError};
use crate::frequency::{DEFAULT_TOP_N, TermCounter, TermFrequencyTable};
use crate::review::Review;
use crate::sentiment::{SentimentClassifier, SentimentLabel};
use crate::stats::RatingDistribution;
use crate::summary::{Summary, SummaryConfig, SummaryGenerator};
use crate::temporal::{self, MonthlySeries, Trend};

/// Configuration for a [`ReviewAnalytics`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Number of terms kept in the frequency table.
    pub top_n: usize,

    /// Minimum token length in characters.
    pub min_token_length: usize,

    /// Custom stop words. If None, uses the bundled review list.
    pub stop_words: Option<Vec<String>>,

    /// Summary options.
    pub summary: SummaryConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            stop_words: None,
            summary: SummaryConfig::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReviewLensError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Reject settings that cannot produce a meaningful analysis.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(ReviewLensError::config(
                "min_token_length must be at least 1",
            ));
        }
        Ok(())
    }

    /// The stop filter described by this configuration.
    pub fn stop_filter(&self) -> StopFilter {
        match &self.stop_words {
            Some(words) => StopFilter::from_words(words),
            None => StopFilter::new(),
        }
    }
}

/// Everything derived from one filtered review collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub review_count: usize,
    pub term_table: TermFrequencyTable,
    /// One label per review, empty when sentiment is disabled.
    pub labels: Vec<SentimentLabel>,
    pub monthly_series: MonthlySeries,
    pub trend: Option<Trend>,
    pub rating_distribution: RatingDistribution,
    pub summary: Summary,
}

/// The analytics pipeline.
#[derive(Debug)]
pub struct ReviewAnalytics {
    counter: TermCounter,
    classifier: SentimentClassifier,
    generator: SummaryGenerator,
    top_n: usize,
}

impl ReviewAnalytics {
    /// Build the pipeline from a configuration, using the bundled scorer.
    pub fn new(config: &AnalyticsConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = ReviewAnalyzer::with_options(config.min_token_length, config.stop_filter())?;

        Ok(ReviewAnalytics {
            counter: TermCounter::new(analyzer),
            classifier: SentimentClassifier::default(),
            generator: SummaryGenerator::new(config.summary.clone()),
            top_n: config.top_n,
        })
    }

    /// Replace the analyzer.
    pub fn with_analyzer(mut self, analyzer: ReviewAnalyzer) -> Self {
        self.counter = TermCounter::new(analyzer);
        self
    }

    /// Replace the sentiment classifier.
    pub fn with_classifier(mut self, classifier: SentimentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn counter(&self) -> &TermCounter {
        &self.counter
    }

    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    pub fn generator(&self) -> &SummaryGenerator {
        &self.generator
    }

    /// Number of terms kept in the frequency table.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Whether labels are computed.
    pub fn sentiment_enabled(&self) -> bool {
        self.generator.config().include_sentiment
    }

    /// Run every component over `reviews`.
    pub fn analyze(&self, reviews: &[Review]) -> AnalysisOutcome {
        debug!("Analyzing {} reviews", reviews.len());

        let term_table = self.counter.count_reviews(reviews, self.top_n);
        let labels = if self.sentiment_enabled() {
            self.classifier.classify_all(reviews)
        } else {
            Vec::new()
        };
        let monthly_series = temporal::aggregate_monthly(reviews);
        let trend = temporal::trend(&monthly_series);
        let rating_distribution = RatingDistribution::from_reviews(reviews);
        let summary = self
            .generator
            .summarize(reviews, &term_table, &labels, &monthly_series);

        debug!(
            "Analysis done: {} terms, {} labels, {} months",
            term_table.len(),
            labels.len(),
            monthly_series.len()
        );

        AnalysisOutcome {
            review_count: reviews.len(),
            term_table,
            labels,
            monthly_series,
            trend,
            rating_distribution,
            summary,
        }
    }
}
