// src/analysis/lexicon.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

// Lexicons are embedded at build time so no runtime downloads or data
// directories are needed.
const SENTIMENT_DATA: &str = include_str!("../../data/sentiment.tsv");
const INTENSITY_DATA: &str = include_str!("../../data/intensity.tsv");

/// Polarity lexicon entry: polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct PolarityEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Word -> (polarity, subjectivity) table used by the sentiment scorer.
pub static POLARITY: Lazy<HashMap<&'static str, PolarityEntry>> = Lazy::new(|| {
    SENTIMENT_DATA
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let word = fields.next()?;
            let polarity = fields.next()?.parse().ok()?;
            let subjectivity = fields.next()?.parse().ok()?;
            Some((word, PolarityEntry { polarity, subjectivity }))
        })
        .collect()
});

/// Word -> integer valence table used by the emotion analyzer.
pub static VALENCE: Lazy<HashMap<&'static str, i8>> = Lazy::new(|| {
    INTENSITY_DATA
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (word, score) = line.split_once('\t')?;
            Some((word, score.trim().parse().ok()?))
        })
        .collect()
});

// Words that flip and damp the polarity of the word they precede.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor",
    "cannot", "can't", "don't", "doesn't", "didn't", "isn't", "wasn't",
    "aren't", "weren't", "won't", "wouldn't", "shouldn't", "couldn't",
    "hardly", "barely", "scarcely",
];

// Words that amplify the polarity of the word they precede.
const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "absolutely", "completely", "totally",
    "utterly", "highly", "incredibly", "remarkably", "so", "truly",
];

// Words that soften the polarity of the word they precede.
const DIMINISHERS: &[&str] = &["slightly", "somewhat", "fairly", "rather", "kinda", "mildly"];

pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token)
}

pub fn is_intensifier(token: &str) -> bool {
    INTENSIFIERS.contains(&token)
}

pub fn is_diminisher(token: &str) -> bool {
    DIMINISHERS.contains(&token)
}

/// Lowercase word tokens, apostrophes kept so contractions survive
/// negation lookup ("don't", "isn't").
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicons_parse_non_empty() {
        assert!(POLARITY.len() > 100);
        assert!(VALENCE.len() > 100);
    }

    #[test]
    fn polarity_entries_are_bounded() {
        for entry in POLARITY.values() {
            assert!((-1.0..=1.0).contains(&entry.polarity));
            assert!((0.0..=1.0).contains(&entry.subjectivity));
        }
    }

    #[test]
    fn valence_entries_are_bounded() {
        for &valence in VALENCE.values() {
            assert!((-5..=5).contains(&valence));
        }
    }

    #[test]
    fn tokenize_keeps_contractions() {
        let tokens = tokenize("It isn't great, really!");
        assert_eq!(tokens, vec!["it", "isn't", "great", "really"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
        assert!(tokenize("!!! ---").is_empty());
    }
}
