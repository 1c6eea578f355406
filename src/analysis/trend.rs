// src/analysis/trend.rs

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::state::history::AnalysisRecord;

/// Number of most-recent records considered for the slope.
pub const TREND_WINDOW: usize = 5;

// Slope thresholds in score points per analysis.
const IMPROVING_THRESHOLD: f64 = 1.0;
const DECLINING_THRESHOLD: f64 = -1.0;

/// Direction of change over the recent history.
///
/// `NoData` is the fallback for histories too short to classify. It stays
/// distinct from `Stable` in the type but surfaces as the literal
/// `"neutral"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    NoData,
}

impl Trend {
    pub fn title(&self) -> &'static str {
        match self {
            Trend::Improving => "Improving",
            Trend::Declining => "Declining",
            Trend::Stable => "Stable",
            Trend::NoData => "Neutral",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improving => write!(f, "improving"),
            Trend::Declining => write!(f, "declining"),
            Trend::Stable => write!(f, "stable"),
            Trend::NoData => write!(f, "neutral"),
        }
    }
}

/// Classify the direction of change over the most recent window of records.
///
/// The slope is the endpoint difference over the window divided by the
/// window length, a cheap indicator rather than a fitted regression.
pub fn calculate_trend<'a, I>(history: I) -> (Trend, f64)
where
    I: IntoIterator<Item = &'a AnalysisRecord>,
{
    let scores: Vec<f64> = history.into_iter().map(|record| record.score).collect();
    if scores.len() < 2 {
        return (Trend::NoData, 0.0);
    }

    let window = &scores[scores.len().saturating_sub(TREND_WINDOW)..];
    let slope = (window[window.len() - 1] - window[0]) / window.len() as f64;

    let trend = if slope > IMPROVING_THRESHOLD {
        Trend::Improving
    } else if slope < DECLINING_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    };

    (trend, slope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::record_with_score;

    fn records(scores: &[f64]) -> Vec<AnalysisRecord> {
        scores.iter().copied().map(record_with_score).collect()
    }

    #[test]
    fn short_history_falls_back_to_no_data() {
        let (trend, slope) = calculate_trend(&records(&[]));
        assert_eq!(trend, Trend::NoData);
        assert_eq!(slope, 0.0);

        let (trend, slope) = calculate_trend(&records(&[50.0]));
        assert_eq!(trend, Trend::NoData);
        assert_eq!(slope, 0.0);
        assert_eq!(trend.to_string(), "neutral");
    }

    #[test]
    fn rising_scores_classify_as_improving() {
        let (trend, slope) = calculate_trend(&records(&[40.0, 42.0, 45.0]));
        assert_eq!(trend, Trend::Improving);
        assert!((slope - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn falling_scores_classify_as_declining() {
        let (trend, slope) = calculate_trend(&records(&[60.0, 58.0, 55.0]));
        assert_eq!(trend, Trend::Declining);
        assert!((slope + 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn flat_scores_classify_as_stable() {
        let (trend, slope) = calculate_trend(&records(&[50.0, 51.0, 50.0]));
        assert_eq!(trend, Trend::Stable);
        assert_eq!(slope, 0.0);
    }

    #[test]
    fn only_the_last_window_counts() {
        // Six records; the first one is outside the window of five and a
        // huge early drop must not affect the slope.
        let (trend, slope) = calculate_trend(&records(&[99.0, 40.0, 42.0, 44.0, 46.0, 48.0]));
        assert_eq!(trend, Trend::Improving);
        assert!((slope - 8.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn stable_and_no_data_share_a_surface_label() {
        assert_eq!(Trend::NoData.to_string(), "neutral");
        assert_eq!(Trend::Stable.to_string(), "stable");
        assert_ne!(Trend::NoData, Trend::Stable);
    }
}
