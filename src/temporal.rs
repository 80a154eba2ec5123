//! Calendar-month aggregation of reviews and trend inference.
//!
//! Reviews are grouped by the `(year, month)` of their publish date. Reviews
//! without a date are left out of the series but remain part of every other
//! statistic. The series only contains months that actually have reviews;
//! gaps are not filled.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::review::Review;

/// A calendar month, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
}

impl MonthBucket {
    pub fn new(year: i32, month: u32) -> Self {
        MonthBucket { year, month }
    }

    /// The bucket containing `date`.
    pub fn of<D: Datelike>(date: &D) -> Self {
        MonthBucket {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Review count and mean rating for one month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: MonthBucket,
    pub review_count: usize,
    pub mean_rating: f64,
}

/// Monthly aggregates in strictly increasing month order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries {
    entries: Vec<MonthlyAggregate>,
}

impl MonthlySeries {
    pub fn entries(&self) -> &[MonthlyAggregate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The earliest month.
    pub fn first(&self) -> Option<&MonthlyAggregate> {
        self.entries.first()
    }

    /// The latest month.
    pub fn last(&self) -> Option<&MonthlyAggregate> {
        self.entries.last()
    }

    /// Total number of dated reviews in the series.
    pub fn review_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.review_count).sum()
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a MonthlyAggregate;
    type IntoIter = std::slice::Iter<'a, MonthlyAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Group reviews by calendar month of their publish date.
pub fn aggregate_monthly(reviews: &[Review]) -> MonthlySeries {
    // (count, rating sum) per month; BTreeMap keeps months sorted.
    let mut buckets: BTreeMap<MonthBucket, (usize, u64)> = BTreeMap::new();
    let mut undated = 0usize;

    for review in reviews {
        match review.published_at() {
            Some(date) => {
                let bucket = buckets.entry(MonthBucket::of(&date)).or_insert((0, 0));
                bucket.0 += 1;
                bucket.1 += u64::from(review.rating().stars());
            }
            None => undated += 1,
        }
    }

    debug!(
        "Aggregated {} reviews into {} months ({undated} without a publish date)",
        reviews.len() - undated,
        buckets.len()
    );

    let entries = buckets
        .into_iter()
        .map(|(month, (review_count, sum))| MonthlyAggregate {
            month,
            review_count,
            mean_rating: sum as f64 / review_count as f64,
        })
        .collect();

    MonthlySeries { entries }
}

/// Direction of the rating trend between the first and last month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// A trend direction together with the compared monthly means, both
/// rounded to two decimals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub first_mean: f64,
    pub last_mean: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compare the first and last months of the series.
///
/// Returns `None` when the series has fewer than two months.
pub fn trend(series: &MonthlySeries) -> Option<Trend> {
    if series.len() < 2 {
        return None;
    }
    let first_mean = round2(series.first()?.mean_rating);
    let last_mean = round2(series.last()?.mean_rating);

    let direction = if last_mean > first_mean {
        TrendDirection::Increasing
    } else if last_mean < first_mean {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    Some(Trend {
        direction,
        first_mean,
        last_mean,
    })
}

/// The trend direction of the series, `None` with fewer than two months.
pub fn trend_direction(series: &MonthlySeries) -> Option<TrendDirection> {
    trend(series).map(|t| t.direction)
}
