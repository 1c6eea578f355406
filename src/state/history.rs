// src/state/history.rs

use chrono::{DateTime, Local};
use serde::{Serialize, Deserialize};
use std::collections::VecDeque;

use crate::analysis::{Analysis, Category, EmotionScores};

/// Hard cap on the rolling history; the oldest entry is evicted first.
pub const HISTORY_CAP: usize = 10;

/// Maximum characters of source text kept for display.
pub const PREVIEW_LEN: usize = 50;

/// Display form of an analyzed text: the first [`PREVIEW_LEN`] characters,
/// with an ellipsis when truncated. Never used in computation.
pub fn text_preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_LEN {
        let head: String = text.chars().take(PREVIEW_LEN).collect();
        format!("{head}...")
    } else {
        text.to_owned()
    }
}

/// One evaluated text as it is remembered for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub preview: String,
    pub score: f64,
    pub category: Category,
    pub subjectivity: f64,
    pub emotions: EmotionScores,
    pub timestamp: DateTime<Local>,
}

impl AnalysisRecord {
    /// Snapshot an analysis result together with its preview and the
    /// current time.
    pub fn new(text: &str, analysis: &Analysis) -> Self {
        Self {
            preview: text_preview(text),
            score: analysis.score,
            category: analysis.category,
            subjectivity: analysis.subjectivity,
            emotions: analysis.emotions,
            timestamp: Local::now(),
        }
    }
}

/// Append-only rolling log of past analyses, oldest first.
///
/// Capped at [`HISTORY_CAP`] entries with FIFO eviction; lives for the
/// session and is never cleared.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: VecDeque<AnalysisRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(HISTORY_CAP) }
    }

    /// Append a record, evicting the oldest entry once the cap is reached.
    pub fn append(&mut self, record: AnalysisRecord) {
        if self.entries.len() >= HISTORY_CAP {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// Records in insertion order; re-iterable.
    pub fn iter(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.entries.iter()
    }

    /// Records most recent first, for display.
    pub fn recent(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryStore {
    type Item = &'a AnalysisRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, AnalysisRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
pub(crate) fn record_with_score(score: f64) -> AnalysisRecord {
    AnalysisRecord {
        preview: format!("record scoring {score}"),
        score,
        category: Category::Neutral,
        subjectivity: 40.0,
        emotions: EmotionScores { joy: 0.0, sadness: 0.0, neutral: 100.0 },
        timestamp: Local::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_passes_short_text_through() {
        assert_eq!(text_preview("short text"), "short text");
        let exactly_fifty = "x".repeat(50);
        assert_eq!(text_preview(&exactly_fifty), exactly_fifty);
    }

    #[test]
    fn preview_truncates_long_text_with_ellipsis() {
        let long = "a".repeat(60);
        let preview = text_preview(&long);
        assert_eq!(preview, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let long = "é".repeat(60);
        let preview = text_preview(&long);
        assert_eq!(preview.chars().count(), 53);
    }

    #[test]
    fn append_beyond_cap_evicts_oldest() {
        let mut store = HistoryStore::new();
        for i in 0..11 {
            store.append(record_with_score(i as f64));
        }
        assert_eq!(store.len(), HISTORY_CAP);

        let scores: Vec<f64> = store.iter().map(|r| r.score).collect();
        assert_eq!(scores.first(), Some(&1.0));
        assert_eq!(scores.last(), Some(&10.0));
        assert!(!scores.contains(&0.0));
    }

    #[test]
    fn iteration_is_restartable() {
        let mut store = HistoryStore::new();
        store.append(record_with_score(10.0));
        store.append(record_with_score(20.0));

        assert_eq!(store.iter().count(), 2);
        assert_eq!(store.iter().count(), 2);

        let recent: Vec<f64> = store.recent().map(|r| r.score).collect();
        assert_eq!(recent, vec![20.0, 10.0]);
    }

    #[test]
    fn new_store_is_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
