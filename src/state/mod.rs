// src/state/mod.rs
use crate::analysis;
use crate::state::history::{AnalysisRecord, HistoryStore};

pub mod history;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Analyze,
    Compare,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
}

/// Inline feedback shown next to the control that produced it. Genuine
/// failures go to `AppState::error_message` instead.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, text: text.into() }
    }
}

// Core application state: one session context owning both collections.
#[derive(Debug)]
pub struct AppState {
    // Analysis data
    pub history: HistoryStore,
    pub comparison: Vec<AnalysisRecord>,
    pub last_analysis: Option<AnalysisRecord>,

    // Input buffers
    pub analyze_input: String,
    pub compare_input: String,

    // Minimal UI state
    pub current_screen: Screen,
    pub analyze_notice: Option<Notice>,
    pub compare_notice: Option<Notice>,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
            comparison: Vec::new(),
            last_analysis: None,
            analyze_input: String::new(),
            compare_input: String::new(),
            current_screen: Screen::Analyze,
            analyze_notice: None,
            compare_notice: None,
            error_message: None,
        }
    }

    /// Analyze a text and append the result to the rolling history.
    ///
    /// Returns the appended record for immediate display, or `None` when
    /// the text is empty/whitespace (nothing is appended).
    pub fn record_analysis(&mut self, text: &str) -> Option<AnalysisRecord> {
        let analysis = analysis::analyze(text)?;
        let record = AnalysisRecord::new(text, &analysis);
        tracing::debug!(
            score = record.score,
            category = %record.category,
            dominant = %analysis.dominant,
            "recorded analysis"
        );
        self.history.append(record.clone());
        Some(record)
    }

    /// Analyze a text and append the result to the comparison list, which
    /// has no cap.
    pub fn add_comparison(&mut self, text: &str) -> Option<&AnalysisRecord> {
        let analysis = analysis::analyze(text)?;
        let record = AnalysisRecord::new(text, &analysis);
        self.comparison.push(record);
        self.comparison.last()
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::HISTORY_CAP;

    #[test]
    fn record_analysis_appends_to_history() {
        let mut state = AppState::new();
        let record = state.record_analysis("A wonderful day").unwrap();
        assert_eq!(state.history.len(), 1);
        assert_eq!(record.preview, "A wonderful day");
    }

    #[test]
    fn record_analysis_skips_empty_text() {
        let mut state = AppState::new();
        assert!(state.record_analysis("   ").is_none());
        assert!(state.history.is_empty());
    }

    #[test]
    fn history_cap_does_not_apply_to_comparison() {
        let mut state = AppState::new();
        for _ in 0..(HISTORY_CAP + 5) {
            state.add_comparison("good news").unwrap();
            state.record_analysis("good news").unwrap();
        }
        assert_eq!(state.comparison.len(), HISTORY_CAP + 5);
        assert_eq!(state.history.len(), HISTORY_CAP);
    }

    #[test]
    fn clear_comparison_leaves_history_alone() {
        let mut state = AppState::new();
        state.add_comparison("first text").unwrap();
        state.record_analysis("first text").unwrap();
        state.clear_comparison();
        assert!(state.comparison.is_empty());
        assert_eq!(state.history.len(), 1);
    }
}
