// src/analysis/sentiment.rs

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::analysis::lexicon;

// Category thresholds apply to the raw polarity, before rescaling.
const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

// Modifier factors for the token preceding a lexicon hit.
const NEGATION_FACTOR: f64 = -0.5;
const INTENSIFIER_FACTOR: f64 = 1.3;
const DIMINISHER_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Category::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Category::Negative
        } else {
            Category::Neutral
        }
    }

    /// Capitalized form for display ("Positive").
    pub fn title(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Neutral => "Neutral",
            Category::Negative => "Negative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Positive => write!(f, "positive"),
            Category::Neutral => write!(f, "neutral"),
            Category::Negative => write!(f, "negative"),
        }
    }
}

/// Score a text for overall sentiment and subjectivity.
///
/// Returns `(score, category, subjectivity_pct)` where the score is the
/// polarity rescaled from [-1, 1] to [0, 100] and subjectivity is a
/// percentage. Empty or all-whitespace input yields `None`, a defined
/// no-result rather than an error.
pub fn score_sentiment(text: &str) -> Option<(f64, Category, f64)> {
    if text.trim().is_empty() {
        return None;
    }

    let (polarity, subjectivity) = assess(&lexicon::tokenize(text));
    let score = ((polarity + 1.0) * 50.0).clamp(0.0, 100.0);
    let category = Category::from_polarity(polarity);
    let subjectivity_pct = (subjectivity * 100.0).clamp(0.0, 100.0);

    Some((score, category, subjectivity_pct))
}

// Document polarity and subjectivity: the mean over lexicon hits, with the
// preceding token acting as a modifier. A negator flips and damps the hit,
// an intensifier amplifies it, a diminisher softens it, and a negator in
// front of an intensifier ("not very good") flips the amplified value.
fn assess(tokens: &[String]) -> (f64, f64) {
    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut hits = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let Some(entry) = lexicon::POLARITY.get(token.as_str()) else {
            continue;
        };

        let mut polarity = entry.polarity;
        let mut subjectivity = entry.subjectivity;

        if i > 0 {
            let prev = tokens[i - 1].as_str();
            if lexicon::is_intensifier(prev) {
                polarity *= INTENSIFIER_FACTOR;
                subjectivity = (subjectivity * INTENSIFIER_FACTOR).min(1.0);
                if i > 1 && lexicon::is_negation(tokens[i - 2].as_str()) {
                    polarity *= NEGATION_FACTOR;
                }
            } else if lexicon::is_diminisher(prev) {
                polarity *= DIMINISHER_FACTOR;
            } else if lexicon::is_negation(prev) {
                polarity *= NEGATION_FACTOR;
            }
        }

        polarity_sum += polarity.clamp(-1.0, 1.0);
        subjectivity_sum += subjectivity;
        hits += 1;
    }

    if hits == 0 {
        (0.0, 0.0)
    } else {
        (polarity_sum / hits as f64, subjectivity_sum / hits as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_scores_high() {
        let (score, category, _) = score_sentiment("This is a great day!").unwrap();
        assert_eq!(category, Category::Positive);
        assert!((70.0..=100.0).contains(&score), "score was {score}");
    }

    #[test]
    fn negative_text_scores_low() {
        let (score, category, _) = score_sentiment("This is a terrible day.").unwrap();
        assert_eq!(category, Category::Negative);
        assert!((0.0..=30.0).contains(&score), "score was {score}");
    }

    #[test]
    fn plain_text_is_neutral_midpoint() {
        let (score, category, subjectivity) =
            score_sentiment("The report covers the second quarter.").unwrap();
        assert_eq!(category, Category::Neutral);
        assert!((score - 50.0).abs() < f64::EPSILON);
        assert!(subjectivity.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_and_whitespace_yield_none() {
        assert!(score_sentiment("").is_none());
        assert!(score_sentiment("   ").is_none());
        assert!(score_sentiment("\n\t").is_none());
    }

    #[test]
    fn negation_flips_polarity() {
        let (positive, _, _) = score_sentiment("The food was good.").unwrap();
        let (negated, category, _) = score_sentiment("The food was not good.").unwrap();
        assert!(negated < positive);
        assert_eq!(category, Category::Negative);
    }

    #[test]
    fn intensifier_amplifies_polarity() {
        let (base, _, _) = score_sentiment("a good movie").unwrap();
        let (boosted, _, _) = score_sentiment("a very good movie").unwrap();
        assert!(boosted > base);
    }

    #[test]
    fn negated_intensifier_flips() {
        let (score, category, _) = score_sentiment("not very good at all").unwrap();
        assert!(score < 50.0);
        assert_eq!(category, Category::Negative);
    }

    #[test]
    fn scores_stay_in_range() {
        for text in [
            "awesome perfect wonderful excellent superb",
            "terrible awful horrible dreadful disgusting",
            "extremely awesome and absolutely perfect",
        ] {
            let (score, _, subjectivity) = score_sentiment(text).unwrap();
            assert!((0.0..=100.0).contains(&score));
            assert!((0.0..=100.0).contains(&subjectivity));
        }
    }

    #[test]
    fn category_thresholds_use_raw_polarity() {
        assert_eq!(Category::from_polarity(0.11), Category::Positive);
        assert_eq!(Category::from_polarity(0.1), Category::Neutral);
        assert_eq!(Category::from_polarity(-0.1), Category::Neutral);
        assert_eq!(Category::from_polarity(-0.11), Category::Negative);
    }
}
