//! Review records and the caller-side filter applied before analysis.
//!
//! A [`Review`] is immutable once constructed. Its [`Rating`] can only hold a
//! star value in `1..=5`, so the analytics core never sees an out-of-range
//! rating.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewLensError};

/// A star rating between 1 and 5 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest valid star value.
    pub const MIN: u8 = 1;
    /// Highest valid star value.
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside `1..=5`.
    pub fn new(stars: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Rating(stars))
        } else {
            Err(ReviewLensError::invalid_argument(format!(
                "rating must be between {} and {}, got {stars}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Get the star value.
    pub fn stars(self) -> u8 {
        self.0
    }

    /// Whether this is the top rating.
    pub fn is_top(self) -> bool {
        self.0 == Self::MAX
    }

    /// Iterate over every valid rating in ascending order.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewLensError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single customer review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    reviewer_name: Option<String>,
    text: String,
    rating: Rating,
    published_at: Option<NaiveDate>,
}

impl Review {
    /// Create a review without reviewer name or publish date.
    pub fn new<S: Into<String>>(text: S, rating: Rating) -> Self {
        Review {
            reviewer_name: None,
            text: text.into(),
            rating,
            published_at: None,
        }
    }

    /// Set the reviewer name.
    pub fn with_reviewer_name<S: Into<String>>(mut self, name: S) -> Self {
        self.reviewer_name = Some(name.into());
        self
    }

    /// Set the publish date. `None` means the date was absent or unparseable.
    pub fn with_published_at(mut self, published_at: Option<NaiveDate>) -> Self {
        self.published_at = published_at;
        self
    }

    /// The reviewer name, passed through untouched.
    pub fn reviewer_name(&self) -> Option<&str> {
        self.reviewer_name.as_deref()
    }

    /// The review body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The star rating.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// The publish date, if known.
    pub fn published_at(&self) -> Option<NaiveDate> {
        self.published_at
    }
}

/// Filter parameters owned by the caller: an inclusive rating range and an
/// optional case-insensitive keyword.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFilter {
    min_rating: Rating,
    max_rating: Rating,
    keyword: Option<String>,
}

impl ReviewFilter {
    /// A filter that keeps every review.
    pub fn new() -> Self {
        ReviewFilter {
            min_rating: Rating(Rating::MIN),
            max_rating: Rating(Rating::MAX),
            keyword: None,
        }
    }

    /// Restrict to the inclusive star range `[min, max]`.
    pub fn with_rating_range(mut self, min: u8, max: u8) -> Result<Self> {
        let min_rating = Rating::new(min)?;
        let max_rating = Rating::new(max)?;
        if min_rating > max_rating {
            return Err(ReviewLensError::invalid_argument(format!(
                "rating range is empty: {min} > {max}"
            )));
        }
        self.min_rating = min_rating;
        self.max_rating = max_rating;
        Ok(self)
    }

    /// Keep only reviews whose text contains `keyword`, ignoring case.
    ///
    /// An empty keyword disables keyword filtering.
    pub fn with_keyword<S: Into<String>>(mut self, keyword: S) -> Self {
        let keyword = keyword.into();
        self.keyword = if keyword.is_empty() {
            None
        } else {
            Some(keyword.to_lowercase())
        };
        self
    }

    /// Lower bound of the rating range.
    pub fn min_rating(&self) -> Rating {
        self.min_rating
    }

    /// Upper bound of the rating range.
    pub fn max_rating(&self) -> Rating {
        self.max_rating
    }

    /// The lowercased keyword, if any.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Check whether a review passes the filter.
    pub fn matches(&self, review: &Review) -> bool {
        let rating = review.rating();
        if rating < self.min_rating || rating > self.max_rating {
            return false;
        }
        match &self.keyword {
            Some(keyword) => review.text().to_lowercase().contains(keyword.as_str()),
            None => true,
        }
    }

    /// Return the reviews that pass the filter, preserving order.
    pub fn apply(&self, reviews: &[Review]) -> Vec<Review> {
        reviews
            .iter()
            .filter(|review| self.matches(review))
            .cloned()
            .collect()
    }
}

impl Default for ReviewFilter {
    fn default() -> Self {
        Self::new()
    }
}
