//! Binary sentiment labels derived from review text and star rating.

use std::fmt;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::review::{Rating, Review};
use crate::sentiment::scorer::PolarityScorer;
use crate::sentiment::vader::VaderScorer;

/// The sentiment of a single review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// The label as a static string.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels reviews as positive or negative.
///
/// The rules, in order:
/// 1. a five-star review is always positive
/// 2. otherwise the scorer's compound score must be strictly greater than
///    zero for a positive label
/// 3. a scorer error or a non-finite score yields a negative label
#[derive(Clone)]
pub struct SentimentClassifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl SentimentClassifier {
    /// Create a classifier around the given scorer.
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        SentimentClassifier { scorer }
    }

    /// Get the scorer used by this classifier.
    pub fn scorer(&self) -> &Arc<dyn PolarityScorer> {
        &self.scorer
    }

    /// Classify a single review body with its rating.
    pub fn classify(&self, text: &str, rating: Rating) -> SentimentLabel {
        if rating.is_top() {
            return SentimentLabel::Positive;
        }

        match self.scorer.polarity(text) {
            Ok(score) if score.is_finite() && score > 0.0 => SentimentLabel::Positive,
            Ok(score) if score.is_finite() => SentimentLabel::Negative,
            Ok(score) => {
                warn!(
                    "Scorer '{}' returned non-finite score {score}; labelling review as negative",
                    self.scorer.name()
                );
                SentimentLabel::Negative
            }
            Err(e) => {
                warn!(
                    "Scorer '{}' failed: {e}; labelling review as negative",
                    self.scorer.name()
                );
                SentimentLabel::Negative
            }
        }
    }

    /// Classify a review.
    pub fn classify_review(&self, review: &Review) -> SentimentLabel {
        self.classify(review.text(), review.rating())
    }

    /// Classify every review, producing one label per review in order.
    pub fn classify_all(&self, reviews: &[Review]) -> Vec<SentimentLabel> {
        reviews
            .iter()
            .map(|review| self.classify_review(review))
            .collect()
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(VaderScorer::new()))
    }
}

impl fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("scorer", &self.scorer.name())
            .finish()
    }
}
