//! End-to-end scenarios for the analytics pipeline.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use reviewlens::analysis::analyzer::ReviewAnalyzer;
use reviewlens::error::{Result, ReviewLensError};
use reviewlens::frequency::TermCounter;
use reviewlens::pipeline::{AnalyticsConfig, ReviewAnalytics};
use reviewlens::review::{Rating, Review, ReviewFilter};
use reviewlens::sentiment::{PolarityScorer, SentimentClassifier, SentimentLabel};
use reviewlens::summary::{NO_DATA_MESSAGE, Summary};
use reviewlens::temporal::{MonthBucket, TrendDirection, aggregate_monthly, trend_direction};

fn review(text: &str, stars: u8, date: Option<(i32, u32, u32)>) -> Result<Review> {
    Ok(Review::new(text, Rating::new(stars)?)
        .with_published_at(date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))))
}

fn coffee_shop_reviews() -> Result<Vec<Review>> {
    Ok(vec![
        review("Kopi susu enak, barista ramah", 5, Some((2024, 1, 5)))?,
        review("The coffee was terrible and the staff rude", 2, Some((2024, 1, 20)))?,
        review("Kopi mahal tapi barista ramah", 3, Some((2024, 2, 2)))?,
        review("Amazing pastries, wonderful coffee", 4, Some((2024, 3, 14)))?,
        review("Kopi terlalu pahit", 3, None)?,
    ])
}

#[test]
fn test_full_pipeline() -> Result<()> {
    let reviews = coffee_shop_reviews()?;
    let analytics = ReviewAnalytics::new(&AnalyticsConfig::default())?;

    let outcome = analytics.analyze(&reviews);

    assert_eq!(outcome.review_count, 5);
    assert_eq!(outcome.term_table.entries()[0].term, "kopi");
    assert_eq!(outcome.term_table.entries()[0].count, 3);
    assert_eq!(outcome.labels.len(), 5);
    assert_eq!(outcome.labels[0], SentimentLabel::Positive);
    assert_eq!(outcome.labels[1], SentimentLabel::Negative);
    assert_eq!(outcome.labels[3], SentimentLabel::Positive);

    // The undated review is only missing from the monthly series
    assert_eq!(outcome.monthly_series.review_count(), 4);
    assert_eq!(outcome.monthly_series.len(), 3);
    assert_eq!(
        outcome.monthly_series.first().map(|m| m.month),
        Some(MonthBucket::new(2024, 1))
    );
    assert_eq!(outcome.trend.map(|t| t.direction), Some(TrendDirection::Increasing));
    assert_eq!(outcome.rating_distribution.total(), 5);

    let report = outcome.summary.report().ok_or_else(|| ReviewLensError::other("no report"))?;
    assert_eq!(report.total_reviews, 5);
    assert_eq!(report.modal_rating, Rating::new(3)?);
    assert_eq!(report.focus_terms[0], "kopi");

    let text = outcome.summary.to_markdown();
    assert!(text.contains("there are **5 reviews** in total."));
    assert!(text.contains("**3.40 out of 5**"));
    assert!(text.contains("an increase from **3.50** to **4.00**."));

    Ok(())
}

#[test]
fn test_filter_then_analyze() -> Result<()> {
    let reviews = coffee_shop_reviews()?;
    let filtered = ReviewFilter::new()
        .with_rating_range(3, 5)?
        .with_keyword("BARISTA")
        .apply(&reviews);
    assert_eq!(filtered.len(), 2);

    let outcome = ReviewAnalytics::new(&AnalyticsConfig::default())?.analyze(&filtered);
    let terms = outcome.term_table.terms();
    assert_eq!(&terms[..3], &["kopi", "barista", "ramah"]);
    Ok(())
}

#[test]
fn test_empty_collection_everywhere() -> Result<()> {
    let analytics = ReviewAnalytics::new(&AnalyticsConfig::default())?;
    let outcome = analytics.analyze(&[]);

    assert!(outcome.term_table.is_empty());
    assert!(outcome.monthly_series.is_empty());
    assert_eq!(outcome.summary, Summary::NoData);
    assert_eq!(outcome.summary.to_string(), NO_DATA_MESSAGE);
    Ok(())
}

#[test]
fn test_injected_stop_words() -> Result<()> {
    let stop_words: HashSet<String> = ["KOPI", "barista"].iter().map(|s| s.to_string()).collect();
    let counter = TermCounter::new(ReviewAnalyzer::with_stop_words(stop_words)?);

    let table = counter.count(vec![Some("Kopi barista yang ramah")], 10);
    // "yang" is only a stop word in the bundled list
    assert_eq!(table.terms(), vec!["yang", "ramah"]);
    Ok(())
}

#[test]
fn test_tokens_respect_length_and_stop_words() -> Result<()> {
    let analyzer = ReviewAnalyzer::new()?;
    let tokens = analyzer.tokenize("Di sini ok, es kopi dan roti BAKAR yang enak sekali!!");

    for token in &tokens {
        assert!(token.text.chars().count() >= 3);
        assert!(!analyzer.stop_filter().is_stop_word(&token.text));
    }
    let terms: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(terms, vec!["sini", "kopi", "roti", "bakar"]);
    Ok(())
}

struct AlwaysNegative;

impl PolarityScorer for AlwaysNegative {
    fn polarity(&self, _text: &str) -> Result<f64> {
        Ok(-0.9)
    }

    fn name(&self) -> &'static str {
        "always_negative"
    }
}

#[test]
fn test_custom_scorer_keeps_five_star_rule() -> Result<()> {
    let reviews = coffee_shop_reviews()?;
    let analytics = ReviewAnalytics::new(&AnalyticsConfig::default())?
        .with_classifier(SentimentClassifier::new(Arc::new(AlwaysNegative)));

    let labels = analytics.analyze(&reviews).labels;
    assert_eq!(labels[0], SentimentLabel::Positive);
    assert!(labels[1..].iter().all(|l| *l == SentimentLabel::Negative));
    Ok(())
}

#[test]
fn test_monthly_trend_examples() -> Result<()> {
    let jan_mar = vec![
        review("a", 3, Some((2024, 1, 10)))?,
        review("b", 4, Some((2024, 3, 10)))?,
    ];
    let series = aggregate_monthly(&jan_mar);
    let months: Vec<String> = series.entries().iter().map(|e| e.month.to_string()).collect();
    assert_eq!(months, vec!["2024-01", "2024-03"]);
    assert_eq!(trend_direction(&series), Some(TrendDirection::Increasing));

    let falling = vec![
        review("a", 4, Some((2024, 1, 10)))?,
        review("b", 3, Some((2024, 2, 10)))?,
    ];
    assert_eq!(
        trend_direction(&aggregate_monthly(&falling)),
        Some(TrendDirection::Decreasing)
    );

    let one_month = vec![review("a", 4, Some((2024, 1, 10)))?];
    assert_eq!(trend_direction(&aggregate_monthly(&one_month)), None);
    Ok(())
}

#[test]
fn test_summary_is_deterministic() -> Result<()> {
    let reviews = coffee_shop_reviews()?;
    let analytics = ReviewAnalytics::new(&AnalyticsConfig::default())?;

    let first = analytics.analyze(&reviews);
    let second = analytics.analyze(&reviews);
    assert_eq!(first.summary.to_markdown(), second.summary.to_markdown());
    assert_eq!(serde_json::to_string(&first)?, serde_json::to_string(&second)?);
    Ok(())
}
