//! CSV export of a filtered review collection.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use log::debug;

use crate::dataset::DatasetConfig;
use crate::error::{Result, ReviewLensError};
use crate::review::Review;
use crate::sentiment::SentimentLabel;

/// Date format used for the publish date column.
const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes reviews as CSV, optionally adding a sentiment column.
#[derive(Debug, Clone, Default)]
pub struct ReviewCsvWriter {
    config: DatasetConfig,
}

impl ReviewCsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DatasetConfig) -> Self {
        ReviewCsvWriter { config }
    }

    /// Write `reviews` to `output`.
    ///
    /// `labels` must be either empty, which omits the sentiment column, or
    /// parallel to `reviews`.
    pub fn write<W: Write>(
        &self,
        output: W,
        reviews: &[Review],
        labels: &[SentimentLabel],
    ) -> Result<()> {
        let with_sentiment = !labels.is_empty();
        if with_sentiment && labels.len() != reviews.len() {
            return Err(ReviewLensError::dataset(format!(
                "label count mismatch: {} reviews, {} labels",
                reviews.len(),
                labels.len()
            )));
        }

        let mut writer = WriterBuilder::new().from_writer(output);

        let mut header = vec![
            self.config.reviewer_name_column.as_str(),
            self.config.text_column.as_str(),
            self.config.rating_column.as_str(),
            self.config.published_at_column.as_str(),
        ];
        if with_sentiment {
            header.push(self.config.sentiment_column.as_str());
        }
        writer.write_record(&header)?;

        for (i, review) in reviews.iter().enumerate() {
            let rating = review.rating().to_string();
            let published_at = review
                .published_at()
                .map(|date| date.format(EXPORT_DATE_FORMAT).to_string())
                .unwrap_or_default();

            let mut record = vec![
                review.reviewer_name().unwrap_or_default(),
                review.text(),
                rating.as_str(),
                published_at.as_str(),
            ];
            if let Some(label) = labels.get(i) {
                record.push(label.as_str());
            }
            writer.write_record(&record)?;
        }

        writer.flush()?;
        debug!("Exported {} reviews", reviews.len());
        Ok(())
    }

    /// Write to a file, replacing it if it exists.
    pub fn write_to_path<P: AsRef<Path>>(
        &self,
        path: P,
        reviews: &[Review],
        labels: &[SentimentLabel],
    ) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write(file, reviews, labels)
    }
}
