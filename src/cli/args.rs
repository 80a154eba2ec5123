//! Command line argument parsing for the ReviewLens CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// ReviewLens - customer review analytics
#[derive(Parser, Debug, Clone)]
#[command(name = "reviewlens")]
#[command(about = "Word frequencies, sentiment, rating trends and summaries for customer reviews")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ReviewLensArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ReviewLensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Full report: summary, top terms, sentiment split, monthly trend
    Analyze(AnalyzeArgs),

    /// Top term frequencies
    Terms(DatasetArgs),

    /// Per-review sentiment labels
    Sentiment(DatasetArgs),

    /// Monthly review counts, mean ratings and trend direction
    Trend(DatasetArgs),

    /// Rating distribution, mean and most common rating
    Ratings(DatasetArgs),

    /// Write the filtered dataset to CSV with a sentiment column
    Export(ExportArgs),
}

/// Review filter applied after loading.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Lowest star rating to keep (inclusive)
    #[arg(long, default_value = "1")]
    pub min_rating: u8,

    /// Highest star rating to keep (inclusive)
    #[arg(long, default_value = "5")]
    pub max_rating: u8,

    /// Keep only reviews containing this keyword (case-insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,
}

/// Options shaping the analytics.
#[derive(Args, Debug, Clone)]
pub struct AnalyticsArgs {
    /// Analytics configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "REVIEWLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stop word list, one word per line (replaces the bundled list)
    #[arg(long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Sentiment lexicon in VADER format (replaces the bundled lexicon)
    #[arg(long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Number of terms in the frequency table
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Skip sentiment classification (rejected by the sentiment command)
    #[arg(long)]
    pub no_sentiment: bool,
}

/// Arguments for the full report
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Review datasets (CSV); each file is analyzed independently
    #[arg(value_name = "CSV_FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub analytics: AnalyticsArgs,
}

/// Arguments for commands working on a single dataset
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Review dataset (CSV)
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub analytics: AnalyticsArgs,
}

/// Arguments for exporting the filtered dataset
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Review dataset (CSV)
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "OUTPUT_FILE", default_value = "filtered_reviews.csv")]
    pub output: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub analytics: AnalyticsArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// Markdown output
    Markdown,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let args = ReviewLensArgs::try_parse_from([
            "reviewlens",
            "analyze",
            "a.csv",
            "b.csv",
            "--min-rating",
            "2",
            "--keyword",
            "kopi",
            "--top-n",
            "10",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(
                analyze_args.inputs,
                vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
            );
            assert_eq!(analyze_args.filter.min_rating, 2);
            assert_eq!(analyze_args.filter.max_rating, 5);
            assert_eq!(analyze_args.filter.keyword.as_deref(), Some("kopi"));
            assert_eq!(analyze_args.analytics.top_n, Some(10));
            assert!(!analyze_args.analytics.no_sentiment);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_requires_input() {
        assert!(ReviewLensArgs::try_parse_from(["reviewlens", "analyze"]).is_err());
    }

    #[test]
    fn test_export_command() {
        let args = ReviewLensArgs::try_parse_from([
            "reviewlens",
            "export",
            "reviews.csv",
            "-o",
            "out.csv",
            "--no-sentiment",
        ])
        .unwrap();

        if let Command::Export(export_args) = args.command {
            assert_eq!(export_args.input, PathBuf::from("reviews.csv"));
            assert_eq!(export_args.output, PathBuf::from("out.csv"));
            assert!(export_args.analytics.no_sentiment);
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = ReviewLensArgs::try_parse_from(["reviewlens", "ratings", "r.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            ReviewLensArgs::try_parse_from(["reviewlens", "-vv", "ratings", "r.csv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            ReviewLensArgs::try_parse_from(["reviewlens", "ratings", "r.csv", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            ReviewLensArgs::try_parse_from(["reviewlens", "--format", "json", "terms", "r.csv"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        let args =
            ReviewLensArgs::try_parse_from(["reviewlens", "trend", "r.csv", "-f", "markdown"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Markdown);
    }
}
