// src/chart/mod.rs

use chrono::{DateTime, Local};

use crate::state::history::AnalysisRecord;

// Moving-average window for the trend line, shrunk for short histories.
const TREND_LINE_WINDOW: usize = 3;

/// Chart-ready series over the history, index-aligned with `timestamps`.
/// Pure data shaping; rendering lives in the UI layer.
#[derive(Debug, Clone)]
pub struct HistorySeries {
    pub timestamps: Vec<DateTime<Local>>,
    pub scores: Vec<f64>,
    pub subjectivity: Vec<f64>,
    pub joy: Vec<f64>,
    pub sadness: Vec<f64>,
    pub neutral: Vec<f64>,
    /// Moving average of the scores as `[index, value]` points; starts at
    /// the first index with a full window.
    pub trend_line: Vec<[f64; 2]>,
}

/// Chart-ready series for side-by-side comparison, one entry per text.
#[derive(Debug, Clone)]
pub struct ComparisonSeries {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
    pub subjectivity: Vec<f64>,
    pub joy: Vec<f64>,
    pub sadness: Vec<f64>,
    pub neutral: Vec<f64>,
}

/// Shape the history into plottable time series. `None` when there is
/// nothing to chart yet.
pub fn history_series<'a, I>(records: I) -> Option<HistorySeries>
where
    I: IntoIterator<Item = &'a AnalysisRecord>,
{
    let records: Vec<&AnalysisRecord> = records.into_iter().collect();
    if records.is_empty() {
        return None;
    }

    let scores: Vec<f64> = records.iter().map(|r| r.score).collect();

    Some(HistorySeries {
        timestamps: records.iter().map(|r| r.timestamp).collect(),
        subjectivity: records.iter().map(|r| r.subjectivity).collect(),
        joy: records.iter().map(|r| r.emotions.joy).collect(),
        sadness: records.iter().map(|r| r.emotions.sadness).collect(),
        neutral: records.iter().map(|r| r.emotions.neutral).collect(),
        trend_line: moving_average(&scores, TREND_LINE_WINDOW.min(scores.len())),
        scores,
    })
}

/// Shape an ad-hoc list of analyses into grouped comparison series with
/// generated "Text N" labels. `None` when the list is empty.
pub fn comparison_series(records: &[AnalysisRecord]) -> Option<ComparisonSeries> {
    if records.is_empty() {
        return None;
    }

    Some(ComparisonSeries {
        labels: (1..=records.len()).map(|i| format!("Text {i}")).collect(),
        scores: records.iter().map(|r| r.score).collect(),
        subjectivity: records.iter().map(|r| r.subjectivity).collect(),
        joy: records.iter().map(|r| r.emotions.joy).collect(),
        sadness: records.iter().map(|r| r.emotions.sadness).collect(),
        neutral: records.iter().map(|r| r.emotions.neutral).collect(),
    })
}

// Rolling mean as [index, value] points, emitted only where the window is
// full. A window of one degenerates to the raw values.
fn moving_average(values: &[f64], window: usize) -> Vec<[f64; 2]> {
    if window <= 1 {
        return values.iter().enumerate().map(|(i, v)| [i as f64, *v]).collect();
    }

    values
        .windows(window)
        .enumerate()
        .map(|(i, chunk)| {
            let mean = chunk.iter().sum::<f64>() / window as f64;
            [(i + window - 1) as f64, mean]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::record_with_score;

    #[test]
    fn empty_inputs_produce_no_series() {
        assert!(history_series(&Vec::<AnalysisRecord>::new()).is_none());
        assert!(comparison_series(&[]).is_none());
    }

    #[test]
    fn history_series_is_index_aligned() {
        let records: Vec<_> = [30.0, 50.0, 70.0].iter().map(|&s| record_with_score(s)).collect();
        let series = history_series(&records).unwrap();
        assert_eq!(series.scores, vec![30.0, 50.0, 70.0]);
        assert_eq!(series.timestamps.len(), 3);
        assert_eq!(series.subjectivity.len(), 3);
        assert_eq!(series.joy.len(), 3);
        assert_eq!(series.sadness.len(), 3);
        assert_eq!(series.neutral.len(), 3);
    }

    #[test]
    fn trend_line_starts_at_full_window() {
        let records: Vec<_> =
            [10.0, 20.0, 30.0, 40.0].iter().map(|&s| record_with_score(s)).collect();
        let series = history_series(&records).unwrap();
        assert_eq!(series.trend_line, vec![[2.0, 20.0], [3.0, 30.0]]);
    }

    #[test]
    fn single_record_trend_line_is_the_raw_score() {
        let records = vec![record_with_score(42.0)];
        let series = history_series(&records).unwrap();
        assert_eq!(series.trend_line, vec![[0.0, 42.0]]);
    }

    #[test]
    fn short_history_shrinks_the_window() {
        let records: Vec<_> = [40.0, 60.0].iter().map(|&s| record_with_score(s)).collect();
        let series = history_series(&records).unwrap();
        assert_eq!(series.trend_line, vec![[1.0, 50.0]]);
    }

    #[test]
    fn comparison_series_generates_labels() {
        let records: Vec<_> = [55.0, 65.0, 75.0].iter().map(|&s| record_with_score(s)).collect();
        let series = comparison_series(&records).unwrap();
        assert_eq!(series.labels, vec!["Text 1", "Text 2", "Text 3"]);
        assert_eq!(series.scores, vec![55.0, 65.0, 75.0]);
    }
}
