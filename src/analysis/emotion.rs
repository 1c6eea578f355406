// src/analysis/emotion.rs

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::analysis::lexicon;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Neutral,
}

impl Emotion {
    pub fn title(&self) -> &'static str {
        match self {
            Emotion::Joy => "Joy",
            Emotion::Sadness => "Sadness",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emotion::Joy => write!(f, "joy"),
            Emotion::Sadness => write!(f, "sadness"),
            Emotion::Neutral => write!(f, "neutral"),
        }
    }
}

/// Per-bucket percentages in [0, 100]. The buckets relabel the positive,
/// negative, and neutral proportions of the intensity model; all three are
/// always present.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EmotionScores {
    pub joy: f64,
    pub sadness: f64,
    pub neutral: f64,
}

impl EmotionScores {
    /// Buckets in their fixed iteration order.
    pub fn iter(&self) -> [(Emotion, f64); 3] {
        [
            (Emotion::Joy, self.joy),
            (Emotion::Sadness, self.sadness),
            (Emotion::Neutral, self.neutral),
        ]
    }

    /// The bucket with the largest value; ties keep the earliest bucket in
    /// the fixed order.
    pub fn dominant(&self) -> Emotion {
        let mut best = (Emotion::Joy, self.joy);
        for (emotion, value) in self.iter() {
            if value > best.1 {
                best = (emotion, value);
            }
        }
        best.0
    }
}

/// Break a text down into emotion-bucket percentages.
///
/// Positive mass sums `valence + 1` over positive-valence tokens, negative
/// mass sums `|valence| + 1` over negative-valence tokens, and the neutral
/// mass counts zero-valence tokens; the three proportions of the total are
/// rescaled to percentages. Empty or all-whitespace input yields `None`.
pub fn analyze_emotions(text: &str) -> Option<(EmotionScores, Emotion)> {
    if text.trim().is_empty() {
        return None;
    }

    let mut pos_mass = 0.0;
    let mut neg_mass = 0.0;
    let mut neu_mass = 0.0;

    for token in lexicon::tokenize(text) {
        let valence = lexicon::VALENCE.get(token.as_str()).copied().unwrap_or(0);
        if valence > 0 {
            pos_mass += valence as f64 + 1.0;
        } else if valence < 0 {
            neg_mass += valence.unsigned_abs() as f64 + 1.0;
        } else {
            neu_mass += 1.0;
        }
    }

    let total = pos_mass + neg_mass + neu_mass;
    let proportion = |mass: f64| if total > 0.0 { mass / total } else { 0.0 };

    let scores = EmotionScores {
        joy: (proportion(pos_mass) * 100.0).clamp(0.0, 100.0),
        sadness: (proportion(neg_mass) * 100.0).clamp(0.0, 100.0),
        neutral: (proportion(neu_mass) * 100.0).clamp(0.0, 100.0),
    };

    Some((scores, scores.dominant()))
}
