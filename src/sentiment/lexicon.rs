//! Rule-based scorer over a caller-supplied lexicon.
//!
//! Used when reviews need a lexicon other than the English one behind
//! [`VaderScorer`](crate::sentiment::VaderScorer), for example an Indonesian
//! word list in VADER's file format. Text is scored with the loaded valences
//! (roughly -4 to +4 per word) and the VADER heuristics:
//!
//! - booster and dampener words shift the valence of the word they precede
//!   (up to three words back, with decaying weight)
//! - a negation among the three preceding words flips and damps the valence
//! - "but" halves the weight of everything before it and boosts everything
//!   after it
//! - an ALL-CAPS word in otherwise mixed-case text is emphasized
//! - exclamation marks (and repeated question marks) amplify the total
//!
//! The sum is normalized to a compound score in `[-1, 1]` with
//! `x / sqrt(x² + 15)`.
//!
//! # Examples
//!
//! ```
//! use reviewlens::sentiment::{LexiconScorer, PolarityScorer};
//!
//! let scorer = LexiconScorer::with_lexicon(vec![("enak", 2.0), ("mantap", 2.5)]);
//! assert!(scorer.polarity("kopi enak").unwrap() > 0.0);
//! assert!(scorer.polarity("tidak enak").unwrap() < 0.0);
//! assert_eq!(scorer.polarity("kopi susu").unwrap(), 0.0);
//! ```

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use ahash::{AHashMap, AHashSet};

use crate::error::{Result, ReviewLensError};
use crate::sentiment::scorer::PolarityScorer;

/// Normalization constant of the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Valence shift contributed by a booster word.
const BOOSTER_INCREMENT: f64 = 0.293;
/// Valence shift contributed by a dampener word.
const BOOSTER_DECREMENT: f64 = -0.293;
/// Extra valence of an ALL-CAPS word in mixed-case text.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a negated word.
const NEGATION_SCALAR: f64 = -0.74;
/// Emphasis added per exclamation mark.
const EXCLAMATION_INCREMENT: f64 = 0.292;
/// Emphasis added per question mark when there are two or three.
const QUESTION_INCREMENT: f64 = 0.18;
/// Emphasis cap for four or more question marks.
const QUESTION_MAX: f64 = 0.96;
/// Weight of each preceding position inspected for boosters and negations.
const WINDOW_WEIGHTS: [f64; 3] = [1.0, 0.95, 0.9];

/// Words that intensify the following sentiment word.
const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "especially",
    "extremely",
    "highly",
    "incredibly",
    "most",
    "particularly",
    "really",
    "so",
    "super",
    "totally",
    "truly",
    "very",
];

/// Words that weaken the following sentiment word.
const DAMPENERS: &[&str] = &[
    "barely",
    "hardly",
    "little",
    "marginally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
];

/// Words that negate the following sentiment word.
const NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "dont", "isnt", "neither", "never", "no", "nobody", "none", "nor",
    "not", "nothing", "nowhere", "wasnt", "without", "wont", "tidak", "tak", "bukan", "belum",
    "gak", "nggak",
];

static BOOSTER_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

static DAMPENER_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| DAMPENERS.iter().copied().collect());

static NEGATION_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| NEGATIONS.iter().copied().collect());

/// A word of the input, with its lowercased form and casing information.
struct Word<'a> {
    raw: &'a str,
    lower: String,
}

impl Word<'_> {
    fn is_all_caps(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic) && !self.raw.chars().any(char::is_lowercase)
    }

    fn is_negation(&self) -> bool {
        NEGATION_SET.contains(self.lower.as_str()) || self.lower.ends_with("n't")
    }

    fn booster_shift(&self) -> Option<f64> {
        if BOOSTER_SET.contains(self.lower.as_str()) {
            Some(BOOSTER_INCREMENT)
        } else if DAMPENER_SET.contains(self.lower.as_str()) {
            Some(BOOSTER_DECREMENT)
        } else {
            None
        }
    }
}

/// Lexicon and rule based polarity scorer.
#[derive(Clone, Debug)]
pub struct LexiconScorer {
    lexicon: Arc<AHashMap<String, f64>>,
}

impl LexiconScorer {
    /// Create a scorer with a custom `word -> valence` lexicon.
    pub fn with_lexicon<I, S>(lexicon: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let lexicon = lexicon
            .into_iter()
            .map(|(word, valence)| (word.into().to_lowercase(), valence))
            .collect();
        LexiconScorer {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Load a lexicon file in VADER format: `word<TAB>mean<TAB>...` per line.
    ///
    /// Columns after the mean valence are ignored. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut entries = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut columns = line.split('\t');
            let word = columns.next().unwrap_or_default().trim();
            let valence = columns
                .next()
                .and_then(|value| value.trim().parse::<f64>().ok())
                .filter(|value| value.is_finite());

            match valence {
                Some(valence) if !word.is_empty() => entries.push((word.to_string(), valence)),
                _ => {
                    return Err(ReviewLensError::config(format!(
                        "Invalid lexicon entry at {}:{}: {line:?}",
                        path.display(),
                        line_num + 1
                    )));
                }
            }
        }

        Ok(Self::with_lexicon(entries))
    }

    /// Number of words in the lexicon.
    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    /// Valence of a single (lowercased) word, if it is in the lexicon.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word).copied()
    }

    fn split_words(text: &str) -> Vec<Word<'_>> {
        text.split_whitespace()
            .map(|raw| raw.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|raw| !raw.is_empty())
            .map(|raw| Word {
                raw,
                lower: raw.to_lowercase(),
            })
            .collect()
    }

    fn word_valence(&self, words: &[Word<'_>], i: usize, mixed_case: bool) -> f64 {
        let word = &words[i];
        let Some(mut valence) = self.valence(&word.lower) else {
            return 0.0;
        };

        let direction = valence.signum();
        if mixed_case && word.is_all_caps() {
            valence += CAPS_INCREMENT * direction;
        }

        let mut negated = false;
        for (distance, weight) in WINDOW_WEIGHTS.iter().enumerate() {
            let Some(prev_index) = i.checked_sub(distance + 1) else {
                break;
            };
            let prev = &words[prev_index];

            if let Some(shift) = prev.booster_shift() {
                valence += shift * direction * weight;
            }
            if prev.is_negation() {
                negated = true;
            }
        }

        if negated {
            valence *= NEGATION_SCALAR;
        }
        valence
    }

    fn punctuation_emphasis(text: &str) -> f64 {
        let exclamations = text.matches('!').count().min(4);
        let questions = text.matches('?').count();

        let question_emphasis = match questions {
            0 | 1 => 0.0,
            2 | 3 => questions as f64 * QUESTION_INCREMENT,
            _ => QUESTION_MAX,
        };

        exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
    }

    fn normalize(score: f64) -> f64 {
        (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64> {
        let words = Self::split_words(text);
        if words.is_empty() {
            return Ok(0.0);
        }

        let caps = words.iter().filter(|word| word.is_all_caps()).count();
        let mixed_case = caps > 0 && caps < words.len();

        let mut valences: Vec<f64> = (0..words.len())
            .map(|i| self.word_valence(&words, i, mixed_case))
            .collect();

        if let Some(but_index) = words.iter().position(|word| word.lower == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but_index {
                    *valence *= 0.5;
                } else if i > but_index {
                    *valence *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return Ok(0.0);
        }

        let emphasis = Self::punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else {
            sum -= emphasis;
        }

        Ok(Self::normalize(sum))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
