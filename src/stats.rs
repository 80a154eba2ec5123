//! Rating and sentiment statistics shared by the summary and the CLI.

use serde::{Deserialize, Serialize};

use crate::review::{Rating, Review};
use crate::sentiment::SentimentLabel;

/// Number of reviews per star value, index 0 holding one-star reviews.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDistribution {
    counts: [usize; 5],
}

impl RatingDistribution {
    /// Count ratings across `reviews`.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut counts = [0usize; 5];
        for review in reviews {
            counts[Self::slot(review.rating())] += 1;
        }
        RatingDistribution { counts }
    }

    fn slot(rating: Rating) -> usize {
        usize::from(rating.stars() - Rating::MIN)
    }

    /// Number of reviews with the given rating.
    pub fn count(&self, rating: Rating) -> usize {
        self.counts[Self::slot(rating)]
    }

    /// `(rating, count)` pairs for every star value, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, usize)> + '_ {
        Rating::all().map(move |rating| (rating, self.count(rating)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Arithmetic mean, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: usize = self
            .iter()
            .map(|(rating, count)| usize::from(rating.stars()) * count)
            .sum();
        Some(sum as f64 / total as f64)
    }

    /// Most frequent rating; the smallest value wins a tie.
    pub fn mode(&self) -> Option<Rating> {
        let mut best: Option<(Rating, usize)> = None;
        for (rating, count) in self.iter() {
            if count == 0 {
                continue;
            }
            // Strict comparison over ascending ratings keeps the smallest on ties.
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((rating, count));
            }
        }
        best.map(|(rating, _)| rating)
    }
}

/// Aggregate rating figures for a review collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub total: usize,
    pub mean: Option<f64>,
    pub mode: Option<Rating>,
    pub distribution: RatingDistribution,
}

impl RatingStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let distribution = RatingDistribution::from_reviews(reviews);
        RatingStats {
            total: distribution.total(),
            mean: distribution.mean(),
            mode: distribution.mode(),
            distribution,
        }
    }
}

/// Counts of positive and negative labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSplit {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentSplit {
    pub fn from_labels(labels: &[SentimentLabel]) -> Self {
        labels
            .iter()
            .fold(SentimentSplit::default(), |mut split, label| {
                match label {
                    SentimentLabel::Positive => split.positive += 1,
                    SentimentLabel::Negative => split.negative += 1,
                }
                split
            })
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}
