//! Rating-aware sentiment classification.
//!
//! A review rated five stars is always positive. Anything else is labelled
//! by the compound score of a [`PolarityScorer`]: strictly above zero is
//! positive, everything else (including a neutral 0.0 or a scorer failure)
//! is negative.
//!
//! # Examples
//!
//! ```
//! use reviewlens::review::Rating;
//! use reviewlens::sentiment::{SentimentClassifier, SentimentLabel};
//!
//! let classifier = SentimentClassifier::default();
//! let five = Rating::new(5).unwrap();
//! let two = Rating::new(2).unwrap();
//!
//! assert_eq!(classifier.classify("terrible awful worst", five), SentimentLabel::Positive);
//! assert_eq!(classifier.classify("terrible awful hated it", two), SentimentLabel::Negative);
//! ```

pub mod classifier;
pub mod lexicon;
pub mod scorer;
pub mod vader;

pub use classifier::{SentimentClassifier, SentimentLabel};
pub use lexicon::LexiconScorer;
pub use scorer::PolarityScorer;
pub use vader::VaderScorer;
