use std::fmt;

use serde::{Deserialize, Serialize};

use crate::review::Rating;
use crate::stats::{RatingDistribution, SentimentSplit};
use crate::temporal::{Trend, TrendDirection};

/// Aggregate figures for a non-empty review collection.
///
/// `sentiment` is `None` when sentiment reporting is disabled, `trend` is
/// `None` when fewer than two months carry dated reviews.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewReport {
    pub total_reviews: usize,
    pub mean_rating: f64,
    pub modal_rating: Rating,
    pub rating_distribution: RatingDistribution,
    pub sentiment: Option<SentimentSplit>,
    pub trend: Option<Trend>,
    /// Most frequent terms quoted by the narrative.
    pub keywords: Vec<String>,
    /// The leading terms presented as the aspects customers focus on.
    pub focus_terms: Vec<String>,
}

impl ReviewReport {
    /// Render the report as markdown.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }

    fn trend_sentence(trend: &Trend) -> String {
        match trend.direction {
            TrendDirection::Increasing => format!(
                "The rating trend shows an increase from **{:.2}** to **{:.2}**.",
                trend.first_mean, trend.last_mean
            ),
            TrendDirection::Decreasing => format!(
                "The rating trend shows a decrease from **{:.2}** to **{:.2}**.",
                trend.first_mean, trend.last_mean
            ),
            TrendDirection::Stable => "The rating trend is relatively stable.".to_string(),
        }
    }
}

impl fmt::Display for ReviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Review Analysis Summary")?;
        writeln!(f)?;
        writeln!(
            f,
            "Based on the filtered data, there are **{} reviews** in total.",
            self.total_reviews
        )?;
        writeln!(
            f,
            "* **Average rating:** The average star rating is **{:.2} out of 5**.",
            self.mean_rating
        )?;
        write!(
            f,
            "* **Most common rating:** The most frequently given rating is **{} stars**.",
            self.modal_rating
        )?;
        if let Some(trend) = &self.trend {
            writeln!(f)?;
            write!(f, "* **Rating trend:** {}", Self::trend_sentence(trend))?;
        }

        if self.sentiment.is_none() && self.keywords.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f)?;
        write!(f, "### Review Highlights and Frequent Words")?;

        if let Some(split) = &self.sentiment {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Out of **{} reviews**,", self.total_reviews)?;
            writeln!(
                f,
                "- **{} reviews** have a positive sentiment,",
                split.positive
            )?;
            write!(
                f,
                "- **{} reviews** have a negative sentiment.",
                split.negative
            )?;
        }

        if !self.keywords.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(
                f,
                "The most frequent words in the reviews are: {}.",
                self.keywords.join(", ")
            )?;
            write!(
                f,
                "Customers pay close attention to **{}**.",
                self.focus_terms.join(", ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ReviewReport {
        ReviewReport {
            total_reviews: 4,
            mean_rating: 3.5,
            modal_rating: Rating::new(3).unwrap(),
            rating_distribution: RatingDistribution::default(),
            sentiment: Some(SentimentSplit {
                positive: 3,
                negative: 1,
            }),
            trend: Some(Trend {
                direction: TrendDirection::Increasing,
                first_mean: 3.0,
                last_mean: 4.5,
            }),
            keywords: vec!["kopi".to_string(), "ramah".to_string()],
            focus_terms: vec!["kopi".to_string()],
        }
    }

    #[test]
    fn test_full_report_markdown() {
        let text = report().to_markdown();

        assert!(text.starts_with("### Review Analysis Summary\n"));
        assert!(text.contains("there are **4 reviews** in total."));
        assert!(text.contains("**3.50 out of 5**"));
        assert!(text.contains("**3 stars**"));
        assert!(text.contains("an increase from **3.00** to **4.50**."));
        assert!(text.contains("- **3 reviews** have a positive sentiment,"));
        assert!(text.contains("- **1 reviews** have a negative sentiment."));
        assert!(text.contains("are: kopi, ramah."));
        assert!(text.ends_with("Customers pay close attention to **kopi**."));
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let mut report = report();
        report.trend = None;
        report.sentiment = None;
        report.keywords.clear();
        report.focus_terms.clear();

        let text = report.to_markdown();
        assert!(!text.contains("Rating trend"));
        assert!(!text.contains("Highlights"));
        assert!(text.ends_with("**3 stars**."));
    }

    #[test]
    fn test_trend_sentences() {
        let mut trend = Trend {
            direction: TrendDirection::Decreasing,
            first_mean: 4.25,
            last_mean: 2.0,
        };
        assert_eq!(
            ReviewReport::trend_sentence(&trend),
            "The rating trend shows a decrease from **4.25** to **2.00**."
        );
        trend.direction = TrendDirection::Stable;
        assert_eq!(
            ReviewReport::trend_sentence(&trend),
            "The rating trend is relatively stable."
        );
    }
}
