// src/ui/theme.rs
use eframe::egui::Color32;

use crate::analysis::{Category, Emotion, Trend};

pub const POSITIVE: Color32 = Color32::from_rgb(40, 167, 69);
pub const NEGATIVE: Color32 = Color32::from_rgb(220, 53, 69);
pub const NEUTRAL: Color32 = Color32::from_rgb(108, 117, 125);
pub const INFO: Color32 = Color32::from_rgb(46, 134, 193);

pub const JOY: Color32 = Color32::from_rgb(255, 215, 0); // gold
pub const SADNESS: Color32 = Color32::from_rgb(65, 105, 225); // royal blue
pub const EMOTION_NEUTRAL: Color32 = Color32::from_rgb(128, 128, 128); // gray

pub const SCORE_LINE: Color32 = Color32::from_rgb(46, 134, 193);
pub const TREND_LINE: Color32 = Color32::from_rgb(231, 76, 60);

pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Positive => POSITIVE,
        Category::Negative => NEGATIVE,
        Category::Neutral => NEUTRAL,
    }
}

pub fn emotion_color(emotion: Emotion) -> Color32 {
    match emotion {
        Emotion::Joy => JOY,
        Emotion::Sadness => SADNESS,
        Emotion::Neutral => EMOTION_NEUTRAL,
    }
}

// The no-data fallback shares the stable gray.
pub fn trend_color(trend: Trend) -> Color32 {
    match trend {
        Trend::Improving => POSITIVE,
        Trend::Declining => NEGATIVE,
        Trend::Stable | Trend::NoData => NEUTRAL,
    }
}
