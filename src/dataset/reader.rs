//! CSV review reader.
//!
//! The first row is the header. Only the text and rating columns are
//! required; reviewer name and publish date are read when present.
//! ```csv
//! Reviewer Name,Review Text,Star Given,Publish Date
//! Budi,"Kopi enak, tempat nyaman",5,2024-01-15
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use crate::dataset::date::parse_publish_date;
use crate::dataset::{DatasetConfig, LoadReport};
use crate::error::{Result, ReviewLensError};
use crate::review::{Rating, Review};

/// Reviews read from a dataset together with the row accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub reviews: Vec<Review>,
    pub report: LoadReport,
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    reviewer_name: Option<usize>,
    text: usize,
    rating: usize,
    published_at: Option<usize>,
}

/// Reads reviews from CSV.
#[derive(Debug, Clone)]
pub struct ReviewCsvReader {
    config: DatasetConfig,
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl Default for ReviewCsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewCsvReader {
    /// Create a reader for the default column names.
    pub fn new() -> Self {
        Self::with_config(DatasetConfig::default())
    }

    /// Create a reader for custom column names.
    pub fn with_config(config: DatasetConfig) -> Self {
        ReviewCsvReader {
            config,
            delimiter: b',',
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Load a dataset file.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<LoadedDataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ReviewLensError::dataset(format!("cannot open {}: {e}", path.display()))
        })?;
        let dataset = self.read_from(file)?;
        debug!(
            "Loaded {} of {} rows from {}",
            dataset.report.loaded,
            dataset.report.rows,
            path.display()
        );
        Ok(dataset)
    }

    /// Read a dataset from any reader.
    ///
    /// Fails only when the header cannot be read or lacks a required
    /// column. Malformed rows are skipped with a warning.
    pub fn read_from<R: Read>(&self, input: R) -> Result<LoadedDataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let columns = self.resolve_columns(&headers)?;

        let mut reviews = Vec::new();
        let mut report = LoadReport::default();

        for (row, record) in reader.records().enumerate() {
            report.rows += 1;
            // Row numbers in messages are 1-based and count the header.
            let line = row + 2;

            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping row {line}: {e}");
                    report.skipped += 1;
                    continue;
                }
            };

            match self.parse_record(&record, &columns) {
                Ok(review) => {
                    reviews.push(review);
                    report.loaded += 1;
                }
                Err(reason) => {
                    warn!("Skipping row {line}: {reason}");
                    report.skipped += 1;
                }
            }
        }

        Ok(LoadedDataset { reviews, report })
    }

    fn resolve_columns(&self, headers: &StringRecord) -> Result<ColumnIndex> {
        let find = |name: &str| headers.iter().position(|header| header == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                ReviewLensError::dataset(format!("missing required column '{name}'"))
            })
        };

        Ok(ColumnIndex {
            reviewer_name: find(&self.config.reviewer_name_column),
            text: require(&self.config.text_column)?,
            rating: require(&self.config.rating_column)?,
            published_at: find(&self.config.published_at_column),
        })
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        columns: &ColumnIndex,
    ) -> std::result::Result<Review, String> {
        // Metadata cells are trimmed; an empty cell counts as missing.
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        // The body is kept verbatim. Only a truly empty cell is missing.
        let text = record
            .get(columns.text)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| format!("missing '{}'", self.config.text_column))?;
        let raw_rating = field(Some(columns.rating))
            .ok_or_else(|| format!("missing '{}'", self.config.rating_column))?;
        let rating = parse_rating(raw_rating)
            .ok_or_else(|| format!("unusable rating '{raw_rating}'"))?;

        let mut review = Review::new(text, rating)
            .with_published_at(field(columns.published_at).and_then(parse_publish_date));
        if let Some(name) = field(columns.reviewer_name) {
            review = review.with_reviewer_name(name);
        }
        Ok(review)
    }
}

/// Coerce a rating cell: numeric, truncated toward zero, within 1..=5.
pub fn parse_rating(value: &str) -> Option<Rating> {
    let number: f64 = value.trim().parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    let stars = number.trunc();
    if stars < f64::from(Rating::MIN) || stars > f64::from(Rating::MAX) {
        return None;
    }
    Rating::new(stars as u8).ok()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    use super::*;

    const SAMPLE: &str = "\
Reviewer Name,Review Text,Star Given,Publish Date
Budi,\"Kopi enak, tempat nyaman\",5,2024-01-15
Sari,Pelayanan lambat,2.0,not a date
,Harga murah,4,2024-02-01 10:00:00
Andi,,3,2024-02-02
Rina,Parkir susah,abc,2024-02-03
Dewi,Terlalu ramai,0,2024-02-04
";

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("5").map(Rating::stars), Some(5));
        assert_eq!(parse_rating(" 4.0 ").map(Rating::stars), Some(4));
        assert_eq!(parse_rating("3.7").map(Rating::stars), Some(3));
        assert_eq!(parse_rating("0"), None);
        assert_eq!(parse_rating("6"), None);
        assert_eq!(parse_rating("NaN"), None);
        assert_eq!(parse_rating("inf"), None);
        assert_eq!(parse_rating("five"), None);
    }

    #[test]
    fn test_read_from_skips_malformed_rows() {
        let dataset = ReviewCsvReader::new().read_from(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            dataset.report,
            LoadReport {
                rows: 6,
                loaded: 3,
                skipped: 3
            }
        );

        let reviews = &dataset.reviews;
        assert_eq!(reviews[0].reviewer_name(), Some("Budi"));
        assert_eq!(reviews[0].text(), "Kopi enak, tempat nyaman");
        assert_eq!(reviews[0].rating().stars(), 5);
        assert_eq!(reviews[0].published_at(), NaiveDate::from_ymd_opt(2024, 1, 15));

        // Unparseable date is absent, the review is kept
        assert_eq!(reviews[1].published_at(), None);
        assert_eq!(reviews[1].rating().stars(), 2);

        assert_eq!(reviews[2].reviewer_name(), None);
        assert_eq!(reviews[2].published_at(), NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_review_text_is_kept_verbatim() {
        let csv = "Reviewer Name,Review Text,Star Given,Publish Date\n\
                   \" Budi \",\"  Kopi enak  \", 4 , 2024-01-15 \n\
                   Sari,\"   \",3,2024-01-16\n\
                   Andi,,3,2024-01-17\n";
        let dataset = ReviewCsvReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(dataset.report.loaded, 2);
        assert_eq!(dataset.report.skipped, 1);

        let reviews = &dataset.reviews;
        assert_eq!(reviews[0].text(), "  Kopi enak  ");
        assert_eq!(reviews[0].reviewer_name(), Some("Budi"));
        assert_eq!(reviews[0].rating().stars(), 4);
        assert_eq!(reviews[0].published_at(), NaiveDate::from_ymd_opt(2024, 1, 15));

        // Whitespace-only text is a value, not a missing cell
        assert_eq!(reviews[1].text(), "   ");
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Reviewer Name,Review Text\nBudi,Kopi enak\n";
        let err = ReviewCsvReader::new().read_from(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Star Given"));
    }

    #[test]
    fn test_optional_columns_may_be_missing() {
        let csv = "Review Text,Star Given\nKopi enak,4\n";
        let dataset = ReviewCsvReader::new().read_from(csv.as_bytes()).unwrap();
        assert_eq!(dataset.reviews.len(), 1);
        assert_eq!(dataset.reviews[0].published_at(), None);
        assert_eq!(dataset.reviews[0].reviewer_name(), None);
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let config = DatasetConfig {
            text_column: "body".to_string(),
            rating_column: "stars".to_string(),
            ..DatasetConfig::default()
        };
        let csv = "body;stars\nmantap;5\n";
        let dataset = ReviewCsvReader::with_config(config)
            .with_delimiter(b';')
            .read_from(csv.as_bytes())
            .unwrap();
        assert_eq!(dataset.reviews[0].text(), "mantap");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = ReviewCsvReader::new().load(file.path()).unwrap();
        assert_eq!(dataset.report.loaded, 3);

        assert!(ReviewCsvReader::new().load("/nonexistent/reviews.csv").is_err());
    }

    #[test]
    fn test_empty_input() {
        let dataset = ReviewCsvReader::new()
            .read_from("Review Text,Star Given\n".as_bytes())
            .unwrap();
        assert!(dataset.reviews.is_empty());
        assert_eq!(dataset.report, LoadReport::default());
    }
}
