//! The polarity scoring capability used by the sentiment classifier.

use crate::error::Result;

/// Scores the polarity of a piece of text.
///
/// Implementations return a compound score in `[-1.0, 1.0]`: negative values
/// lean negative, positive values lean positive, `0.0` is neutral. Returning
/// an error (or a non-finite score) is allowed; callers treat it as a
/// negative result.
pub trait PolarityScorer: Send + Sync {
    /// Compute the compound polarity score of `text`.
    fn polarity(&self, text: &str) -> Result<f64>;

    /// Get the name of this scorer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
