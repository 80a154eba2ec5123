//! Polarity scoring with the VADER lexicon and rules.
//!
//! [`VaderScorer`] is the default scorer of the sentiment classifier. It
//! delegates to the `vader_sentiment` crate and reports the `compound` score
//! in `[-1, 1]`.

use log::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{Result, ReviewLensError};
use crate::sentiment::scorer::PolarityScorer;

/// Key of the normalized score in the analyzer output.
const COMPOUND_KEY: &str = "compound";

/// VADER compound scorer backed by the bundled English lexicon.
#[derive(Clone, Copy, Debug, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        VaderScorer
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> Result<f64> {
        // Nothing to score without a single word character.
        if !text.chars().any(char::is_alphanumeric) {
            return Ok(0.0);
        }

        // The analyzer only borrows the crate's static lexicons.
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);

        match scores.get(COMPOUND_KEY) {
            Some(&compound) => Ok(compound),
            None => {
                debug!("VADER output without a compound score: {scores:?}");
                Err(ReviewLensError::scoring("VADER returned no compound score"))
            }
        }
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}
