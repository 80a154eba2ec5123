//! Output formatting for CLI commands.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ReviewLensArgs};
use crate::dataset::LoadReport;
use crate::error::Result;
use crate::frequency::TermFrequencyTable;
use crate::pipeline::AnalysisOutcome;
use crate::review::Rating;
use crate::sentiment::SentimentLabel;
use crate::stats::{RatingDistribution, RatingStats, SentimentSplit};
use crate::temporal::{MonthlySeries, Trend};

/// A command result that can be shown to a person as well as serialized.
pub trait Render: Serialize {
    /// Plain text for a terminal.
    fn human(&self) -> String;

    /// Markdown, defaulting to the plain text.
    fn markdown(&self) -> String {
        self.human()
    }
}

/// Result of analyzing one dataset file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub source: String,
    pub load_report: LoadReport,
    pub filtered_reviews: usize,
    pub outcome: AnalysisOutcome,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub files: Vec<FileAnalysis>,
}

/// Result structure for the terms command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsResult {
    pub source: String,
    pub review_count: usize,
    pub terms: TermFrequencyTable,
}

/// One labelled review.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewSentiment {
    pub reviewer_name: Option<String>,
    pub published_at: Option<NaiveDate>,
    pub rating: Rating,
    pub sentiment: SentimentLabel,
    pub text: String,
}

/// Result structure for the sentiment command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentResult {
    pub source: String,
    pub split: SentimentSplit,
    pub reviews: Vec<ReviewSentiment>,
}

/// Result structure for the trend command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendResult {
    pub source: String,
    pub series: MonthlySeries,
    pub trend: Option<Trend>,
}

/// Result structure for the ratings command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingsResult {
    pub source: String,
    pub stats: RatingStats,
}

/// Result structure for the export command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub source: String,
    pub output: String,
    pub exported: usize,
    pub with_sentiment: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Render>(message: &str, result: &T, args: &ReviewLensArgs) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", render(result, args.output_format, args.pretty)?);
    Ok(())
}

/// Render a result in the specified format.
pub fn render<T: Render>(result: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Human => result.human(),
        OutputFormat::Markdown => result.markdown(),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
    })
}

fn heading(title: &str) -> [String; 2] {
    [
        format!("{title}:"),
        "═".repeat(title.chars().count() + 1),
    ]
}

fn terms_human(table: &TermFrequencyTable) -> Vec<String> {
    if table.is_empty() {
        return vec!["(no terms)".to_string()];
    }
    let width = table
        .entries()
        .iter()
        .map(|entry| entry.term.chars().count())
        .max()
        .unwrap_or(0);
    table
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>3}. {:<width$}  {}",
                i + 1,
                entry.term,
                entry.count
            )
        })
        .collect()
}

fn terms_markdown(table: &TermFrequencyTable) -> Vec<String> {
    let mut lines = vec!["| Term | Count |".to_string(), "|------|------:|".to_string()];
    lines.extend(
        table
            .entries()
            .iter()
            .map(|entry| format!("| {} | {} |", entry.term, entry.count)),
    );
    lines
}

fn series_human(series: &MonthlySeries) -> Vec<String> {
    if series.is_empty() {
        return vec!["(no dated reviews)".to_string()];
    }
    series
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "{}  {:>5} reviews  mean {:.2}",
                entry.month, entry.review_count, entry.mean_rating
            )
        })
        .collect()
}

fn series_markdown(series: &MonthlySeries) -> Vec<String> {
    let mut lines = vec![
        "| Month | Reviews | Mean rating |".to_string(),
        "|-------|--------:|------------:|".to_string(),
    ];
    lines.extend(series.entries().iter().map(|entry| {
        format!(
            "| {} | {} | {:.2} |",
            entry.month, entry.review_count, entry.mean_rating
        )
    }));
    lines
}

fn trend_line(trend: Option<&Trend>) -> String {
    match trend {
        Some(trend) => format!(
            "Trend: {} ({:.2} -> {:.2})",
            trend.direction, trend.first_mean, trend.last_mean
        ),
        None => "Trend: not enough months".to_string(),
    }
}

fn distribution_human(distribution: &RatingDistribution) -> Vec<String> {
    let total = distribution.total().max(1);
    distribution
        .iter()
        .map(|(rating, count)| {
            let bar = "█".repeat(count * 40 / total);
            format!("{rating} stars  {count:>5}  {bar}")
        })
        .collect()
}

fn load_line(report: &LoadReport, filtered: usize) -> String {
    format!(
        "Rows: {} read, {} loaded, {} skipped; {} after filtering",
        report.rows, report.loaded, report.skipped, filtered
    )
}

impl FileAnalysis {
    fn sections_human(&self) -> Vec<String> {
        let mut lines = vec![format!("== {} ==", self.source)];
        lines.push(load_line(&self.load_report, self.filtered_reviews));
        lines.push(String::new());
        lines.push(self.outcome.summary.to_markdown());
        lines.push(String::new());
        lines.extend(heading("Top Terms"));
        lines.extend(terms_human(&self.outcome.term_table));
        lines.push(String::new());
        lines.extend(heading("Reviews per Month"));
        lines.extend(series_human(&self.outcome.monthly_series));
        lines.push(trend_line(self.outcome.trend.as_ref()));
        lines.push(String::new());
        lines.extend(heading("Rating Distribution"));
        lines.extend(distribution_human(&self.outcome.rating_distribution));
        lines
    }

    fn sections_markdown(&self) -> Vec<String> {
        let mut lines = vec![format!("## {}", self.source), String::new()];
        lines.push(self.outcome.summary.to_markdown());
        lines.push(String::new());
        lines.push("### Top Terms".to_string());
        lines.push(String::new());
        lines.extend(terms_markdown(&self.outcome.term_table));
        lines.push(String::new());
        lines.push("### Reviews per Month".to_string());
        lines.push(String::new());
        lines.extend(series_markdown(&self.outcome.monthly_series));
        lines
    }
}

impl Render for AnalyzeResult {
    fn human(&self) -> String {
        self.files
            .iter()
            .map(|file| file.sections_human().join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn markdown(&self) -> String {
        self.files
            .iter()
            .map(|file| file.sections_markdown().join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Render for TermsResult {
    fn human(&self) -> String {
        let mut lines = heading("Top Terms").to_vec();
        lines.extend(terms_human(&self.terms));
        lines.join("\n")
    }

    fn markdown(&self) -> String {
        terms_markdown(&self.terms).join("\n")
    }
}

impl Render for SentimentResult {
    fn human(&self) -> String {
        let mut lines = heading("Sentiment").to_vec();
        lines.extend(self.reviews.iter().map(|review| {
            format!(
                "{:<8}  {}*  {}",
                review.sentiment.as_str(),
                review.rating,
                review.text
            )
        }));
        lines.push(String::new());
        lines.push(format!(
            "Positive: {}  Negative: {}",
            self.split.positive, self.split.negative
        ));
        lines.join("\n")
    }

    fn markdown(&self) -> String {
        let mut lines = vec![
            "| Reviewer | Date | Rating | Sentiment | Review |".to_string(),
            "|----------|------|-------:|-----------|--------|".to_string(),
        ];
        lines.extend(self.reviews.iter().map(|review| {
            format!(
                "| {} | {} | {} | {} | {} |",
                review.reviewer_name.as_deref().unwrap_or(""),
                review
                    .published_at
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
                review.rating,
                review.sentiment,
                review.text.replace('|', "\\|").replace('\n', " ")
            )
        }));
        lines.join("\n")
    }
}

impl Render for TrendResult {
    fn human(&self) -> String {
        let mut lines = heading("Reviews per Month").to_vec();
        lines.extend(series_human(&self.series));
        lines.push(trend_line(self.trend.as_ref()));
        lines.join("\n")
    }

    fn markdown(&self) -> String {
        let mut lines = series_markdown(&self.series);
        lines.push(String::new());
        lines.push(trend_line(self.trend.as_ref()));
        lines.join("\n")
    }
}

impl Render for RatingsResult {
    fn human(&self) -> String {
        let mut lines = heading("Rating Distribution").to_vec();
        lines.extend(distribution_human(&self.stats.distribution));
        lines.push(String::new());
        lines.push(format!("Total reviews: {}", self.stats.total));
        if let Some(mean) = self.stats.mean {
            lines.push(format!("Average rating: {mean:.2}"));
        }
        if let Some(mode) = self.stats.mode {
            lines.push(format!("Most common rating: {mode}"));
        }
        lines.join("\n")
    }

    fn markdown(&self) -> String {
        let mut lines = vec![
            "| Rating | Reviews |".to_string(),
            "|-------:|--------:|".to_string(),
        ];
        lines.extend(
            self.stats
                .distribution
                .iter()
                .map(|(rating, count)| format!("| {rating} | {count} |")),
        );
        lines.join("\n")
    }
}

impl Render for ExportResult {
    fn human(&self) -> String {
        format!(
            "Exported {} reviews from {} to {}{}",
            self.exported,
            self.source,
            self.output,
            if self.with_sentiment {
                " (with sentiment)"
            } else {
                ""
            }
        )
    }
}
