//! Loading, filtering and exporting review datasets.

use std::fs;

use chrono::NaiveDate;
use reviewlens::dataset::{DatasetConfig, LoadReport, ReviewCsvReader, ReviewCsvWriter};
use reviewlens::error::Result;
use reviewlens::pipeline::{AnalyticsConfig, ReviewAnalytics};
use reviewlens::review::ReviewFilter;
use reviewlens::sentiment::SentimentLabel;
use tempfile::TempDir;

const DATASET: &str = "\
Reviewer Name,Review Text,Star Given,Publish Date
Budi,\"Kopi enak, barista ramah\",5,2024-01-15 09:12:00
Sari,Pelayanan lambat dan meja kotor,2,2024-01-28
Andi,Kopi pahit tapi murah,3.0,2024-02-03
Rina,,4,2024-02-10
Dewi,Roti bakar mantap,five,2024-02-11
Joko,Antrian panjang,1,kemarin
Tono,Wonderful place and great coffee,4,02/20/2024
";

fn write_dataset(dir: &TempDir) -> Result<std::path::PathBuf> {
    let path = dir.path().join("reviews.csv");
    fs::write(&path, DATASET)?;
    Ok(path)
}

#[test]
fn test_load_counts_and_skips() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = ReviewCsvReader::new().load(write_dataset(&dir)?)?;

    assert_eq!(
        dataset.report,
        LoadReport {
            rows: 7,
            loaded: 5,
            skipped: 2
        }
    );

    let joko = &dataset.reviews[3];
    assert_eq!(joko.reviewer_name(), Some("Joko"));
    assert_eq!(joko.published_at(), None);

    let tono = &dataset.reviews[4];
    assert_eq!(tono.published_at(), NaiveDate::from_ymd_opt(2024, 2, 20));
    Ok(())
}

#[test]
fn test_loaded_dataset_analytics() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = ReviewCsvReader::new().load(write_dataset(&dir)?)?;
    let analytics = ReviewAnalytics::new(&AnalyticsConfig::default())?;

    let outcome = analytics.analyze(&dataset.reviews);
    assert_eq!(outcome.review_count, 5);
    // Joko's unparseable date only drops the review from the monthly series
    assert_eq!(outcome.monthly_series.review_count(), 4);
    assert_eq!(outcome.monthly_series.len(), 2);
    assert_eq!(outcome.term_table.entries()[0].term, "kopi");
    assert_eq!(outcome.labels[0], SentimentLabel::Positive);
    assert_eq!(outcome.labels[4], SentimentLabel::Positive);
    Ok(())
}

#[test]
fn test_filtered_export_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = ReviewCsvReader::new().load(write_dataset(&dir)?)?;

    let filtered = ReviewFilter::new()
        .with_rating_range(3, 5)?
        .apply(&dataset.reviews);
    let labels = ReviewAnalytics::new(&AnalyticsConfig::default())?
        .classifier()
        .classify_all(&filtered);

    let output = dir.path().join("filtered_reviews.csv");
    ReviewCsvWriter::new().write_to_path(&output, &filtered, &labels)?;

    let exported = fs::read_to_string(&output)?;
    assert!(exported.starts_with("Reviewer Name,Review Text,Star Given,Publish Date,Sentiment\n"));
    assert!(exported.contains("Budi,\"Kopi enak, barista ramah\",5,2024-01-15,Positive"));

    let reloaded = ReviewCsvReader::new().load(&output)?;
    assert_eq!(reloaded.reviews, filtered);
    assert_eq!(reloaded.report.skipped, 0);
    Ok(())
}

#[test]
fn test_custom_column_names() -> Result<()> {
    let config = DatasetConfig {
        reviewer_name_column: "author".to_string(),
        text_column: "content".to_string(),
        rating_column: "score".to_string(),
        published_at_column: "at".to_string(),
        ..DatasetConfig::default()
    };
    let csv = "author,score,content,at\nMia,4,Nice latte art,2023-11-30\n";

    let dataset = ReviewCsvReader::with_config(config).read_from(csv.as_bytes())?;
    let review = &dataset.reviews[0];
    assert_eq!(review.reviewer_name(), Some("Mia"));
    assert_eq!(review.text(), "Nice latte art");
    assert_eq!(review.rating().stars(), 4);
    assert_eq!(review.published_at(), NaiveDate::from_ymd_opt(2023, 11, 30));
    Ok(())
}
