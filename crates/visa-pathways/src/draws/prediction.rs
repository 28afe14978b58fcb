use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::trend::{trend_strength, TrendDirection};
use super::{mean, round_to_tenth, select, variance, DrawSettings, HistoricalDrawRecord};

const HIGH_CONFIDENCE_VARIANCE: f64 = 100.0;
const MEDIUM_CONFIDENCE_VARIANCE: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }

    fn from_variance(variance: f64) -> Self {
        if variance < HIGH_CONFIDENCE_VARIANCE {
            ConfidenceLevel::High
        } else if variance < MEDIUM_CONFIDENCE_VARIANCE {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Next-cutoff estimate.
///
/// `range_min` and `range_max` are each clamped to the plausible band on their own, so
/// an estimate outside the band ends up outside its own range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPrediction {
    pub predicted_cutoff: u32,
    pub confidence_level: ConfidenceLevel,
    pub predicted_date: NaiveDate,
    pub range_min: u32,
    pub range_max: u32,
    pub factors: Vec<String>,
}

pub fn predict(
    records: &[HistoricalDrawRecord],
    category: Option<&str>,
    today: NaiveDate,
    settings: &DrawSettings,
) -> DrawPrediction {
    let window: Vec<&HistoricalDrawRecord> = select(records, category)
        .into_iter()
        .take(settings.window)
        .collect();
    let predicted_date = next_draw_date(window.first().map(|r| r.date), today, settings);

    if window.len() < 2 {
        return sparse_prediction(&window, predicted_date, settings);
    }

    let cutoffs: Vec<f64> = window.iter().map(|r| f64::from(r.cutoff_score)).collect();
    let n = cutoffs.len();

    let (weighted_sum, weight_total) = cutoffs
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sum, total), (index, cutoff)| {
            let weight = (n - index) as f64;
            (sum + weight * cutoff, total + weight)
        });
    let weighted_average = weighted_sum / weight_total;

    let strength = trend_strength(&cutoffs);
    let nudge = (strength.abs() / 10.0).round() * strength.signum();
    let predicted = (weighted_average.round() + nudge).max(0.0);

    let variance = variance(&cutoffs);
    let std_dev = variance.sqrt();
    let confidence_level = ConfidenceLevel::from_variance(variance);

    let (band_min, band_max) = settings.band();
    let (band_min, band_max) = (f64::from(band_min), f64::from(band_max));
    let range_min = (predicted - std_dev).clamp(band_min, band_max).round();
    let range_max = (predicted + std_dev).clamp(band_min, band_max).round();

    let direction = TrendDirection::from_strength(strength);
    let factors = vec![
        format!(
            "Recency-weighted average of the last {n} draws: {:.1}",
            weighted_average
        ),
        format!(
            "Trend {direction} (strength {strength:.1}) adjusts the estimate by {nudge:+.0}"
        ),
        format!(
            "Cutoff variance {:.1} (mean {:.1}) gives {confidence_level} confidence",
            round_to_tenth(variance),
            mean(&cutoffs)
        ),
        format!(
            "Draws assumed every {} days; last draw on {}",
            settings.cadence_days, window[0].date
        ),
    ];

    debug!(
        category = category.unwrap_or("all"),
        predicted,
        confidence = confidence_level.label(),
        "next draw predicted"
    );

    DrawPrediction {
        predicted_cutoff: predicted as u32,
        confidence_level,
        predicted_date,
        range_min: range_min as u32,
        range_max: range_max as u32,
        factors,
    }
}

fn sparse_prediction(
    window: &[&HistoricalDrawRecord],
    predicted_date: NaiveDate,
    settings: &DrawSettings,
) -> DrawPrediction {
    let predicted_cutoff = window
        .first()
        .map(|record| record.cutoff_score)
        .unwrap_or_else(|| settings.band_midpoint());
    let (band_min, band_max) = settings.band();

    DrawPrediction {
        predicted_cutoff,
        confidence_level: ConfidenceLevel::Low,
        predicted_date,
        range_min: band_min,
        range_max: band_max,
        factors: vec![format!(
            "Insufficient history: {} draw(s) on record, at least 2 needed for a trend",
            window.len()
        )],
    }
}

/// `today` plus whatever remains of the cadence since the last draw. Saturates at the
/// last representable date.
fn next_draw_date(last: Option<NaiveDate>, today: NaiveDate, settings: &DrawSettings) -> NaiveDate {
    let days_since = last.map(|date| (today - date).num_days()).unwrap_or(0);
    let remaining = settings.cadence_days.saturating_sub(days_since).max(0);
    TimeDelta::try_days(remaining)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(NaiveDate::MAX)
}
