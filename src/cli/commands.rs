//! Command implementations for the ReviewLens CLI.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::analyzer::ReviewAnalyzer;
use crate::analysis::token_filter::StopFilter;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::{LoadReport, ReviewCsvReader, ReviewCsvWriter};
use crate::error::{Result, ReviewLensError};
use crate::pipeline::{AnalyticsConfig, ReviewAnalytics};
use crate::review::{Review, ReviewFilter};
use crate::sentiment::{LexiconScorer, SentimentClassifier};
use crate::stats::{RatingStats, SentimentSplit};
use crate::temporal;

/// Execute a CLI command.
pub fn execute_command(args: ReviewLensArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Terms(dataset_args) => show_terms(dataset_args, &args),
        Command::Sentiment(dataset_args) => show_sentiment(dataset_args, &args),
        Command::Trend(dataset_args) => show_trend(dataset_args, &args),
        Command::Ratings(dataset_args) => show_ratings(dataset_args, &args),
        Command::Export(export_args) => export(export_args, &args),
    }
}

/// Resolve the analytics configuration: file first, then flag overrides.
pub fn analytics_config(args: &AnalyticsArgs) -> Result<AnalyticsConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            AnalyticsConfig::from_file(path)?
        }
        None => AnalyticsConfig::default(),
    };
    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }
    if args.no_sentiment {
        config.summary.include_sentiment = false;
    }
    Ok(config)
}

/// Build the analytics pipeline, applying stop word and lexicon files.
pub fn build_analytics(args: &AnalyticsArgs) -> Result<ReviewAnalytics> {
    let config = analytics_config(args)?;
    let mut analytics = ReviewAnalytics::new(&config)?;

    if let Some(path) = &args.stopwords {
        let stop_filter = StopFilter::from_file(path)?;
        info!("Loaded {} stop words from {}", stop_filter.len(), path.display());
        let analyzer = ReviewAnalyzer::with_options(config.min_token_length, stop_filter)?;
        analytics = analytics.with_analyzer(analyzer);
    }

    if let Some(path) = &args.lexicon {
        let scorer = LexiconScorer::from_file(path)?;
        info!("Loaded {} lexicon entries from {}", scorer.lexicon_size(), path.display());
        analytics = analytics.with_classifier(SentimentClassifier::new(Arc::new(scorer)));
    }

    Ok(analytics)
}

/// Load a dataset and apply the review filter.
pub fn load_filtered(path: &Path, filter_args: &FilterArgs) -> Result<(Vec<Review>, LoadReport)> {
    let mut filter =
        ReviewFilter::new().with_rating_range(filter_args.min_rating, filter_args.max_rating)?;
    if let Some(keyword) = &filter_args.keyword {
        filter = filter.with_keyword(keyword.as_str());
    }

    let dataset = ReviewCsvReader::new().load(path)?;
    let reviews = filter.apply(&dataset.reviews);
    info!(
        "{}: {} reviews loaded, {} skipped, {} after filtering",
        path.display(),
        dataset.report.loaded,
        dataset.report.skipped,
        reviews.len()
    );
    Ok((reviews, dataset.report))
}

fn source_name(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Full report over one or more datasets, one rayon task per file.
fn analyze(args: &AnalyzeArgs, cli_args: &ReviewLensArgs) -> Result<()> {
    let analytics = build_analytics(&args.analytics)?;

    let files = args
        .inputs
        .par_iter()
        .map(|path| -> Result<FileAnalysis> {
            let (reviews, load_report) = load_filtered(path, &args.filter)?;
            Ok(FileAnalysis {
                source: source_name(path),
                load_report,
                filtered_reviews: reviews.len(),
                outcome: analytics.analyze(&reviews),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result("Review analysis", &AnalyzeResult { files }, cli_args)
}

fn show_terms(args: &DatasetArgs, cli_args: &ReviewLensArgs) -> Result<()> {
    let analytics = build_analytics(&args.analytics)?;
    let (reviews, _) = load_filtered(&args.input, &args.filter)?;

    let result = TermsResult {
        source: source_name(&args.input),
        review_count: reviews.len(),
        terms: analytics
            .counter()
            .count_reviews(&reviews, analytics.top_n()),
    };
    output_result("Top terms", &result, cli_args)
}

fn show_sentiment(args: &DatasetArgs, cli_args: &ReviewLensArgs) -> Result<()> {
    if args.analytics.no_sentiment {
        return Err(ReviewLensError::config(
            "--no-sentiment cannot be used with the sentiment command",
        ));
    }
    let analytics = build_analytics(&args.analytics)?;
    let (reviews, _) = load_filtered(&args.input, &args.filter)?;

    let labels = analytics.classifier().classify_all(&reviews);
    let result = SentimentResult {
        source: source_name(&args.input),
        split: SentimentSplit::from_labels(&labels),
        reviews: reviews
            .iter()
            .zip(labels)
            .map(|(review, sentiment)| ReviewSentiment {
                reviewer_name: review.reviewer_name().map(str::to_string),
                published_at: review.published_at(),
                rating: review.rating(),
                sentiment,
                text: review.text().to_string(),
            })
            .collect(),
    };
    output_result("Sentiment labels", &result, cli_args)
}

fn show_trend(args: &DatasetArgs, cli_args: &ReviewLensArgs) -> Result<()> {
    let (reviews, _) = load_filtered(&args.input, &args.filter)?;

    let series = temporal::aggregate_monthly(&reviews);
    let result = TrendResult {
        source: source_name(&args.input),
        trend: temporal::trend(&series),
        series,
    };
    output_result("Monthly trend", &result, cli_args)
}

fn show_ratings(args: &DatasetArgs, cli_args: &ReviewLensArgs) -> Result<()> {
    let (reviews, _) = load_filtered(&args.input, &args.filter)?;

    let result = RatingsResult {
        source: source_name(&args.input),
        stats: RatingStats::from_reviews(&reviews),
    };
    output_result("Rating distribution", &result, cli_args)
}

fn export(args: &ExportArgs, cli_args: &ReviewLensArgs) -> Result<()> {
    let analytics = build_analytics(&args.analytics)?;
    let (reviews, _) = load_filtered(&args.input, &args.filter)?;

    let labels = if analytics.sentiment_enabled() {
        analytics.classifier().classify_all(&reviews)
    } else {
        Vec::new()
    };
    ReviewCsvWriter::new().write_to_path(&args.output, &reviews, &labels)?;

    let result = ExportResult {
        source: source_name(&args.input),
        output: source_name(&args.output),
        exported: reviews.len(),
        with_sentiment: !labels.is_empty(),
    };
    output_result("Export complete", &result, cli_args)
}
