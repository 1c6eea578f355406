// src/analysis/mod.rs
pub mod emotion;
pub mod lexicon;
pub mod sentiment;
pub mod trend;

// Re-export commonly used types
pub use emotion::{Emotion, EmotionScores};
pub use sentiment::Category;
pub use trend::{Trend, calculate_trend};

/// Everything one evaluation of a text produces.
#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    pub score: f64,
    pub category: Category,
    pub subjectivity: f64,
    pub emotions: EmotionScores,
    pub dominant: Emotion,
}

/// Run the sentiment scorer and the emotion analyzer over one text.
///
/// Returns `None` for empty or all-whitespace input; otherwise every field
/// is populated.
pub fn analyze(text: &str) -> Option<Analysis> {
    let (score, category, subjectivity) = sentiment::score_sentiment(text)?;
    let (emotions, dominant) = emotion::analyze_emotions(text)?;

    Some(Analysis { score, category, subjectivity, emotions, dominant })
}
