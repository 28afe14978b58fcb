use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{mean, round_to_tenth, select, DrawSettings, HistoricalDrawRecord};

/// Strength beyond which a trend counts as moving.
const DIRECTION_THRESHOLD: f64 = 5.0;
const STRENGTH_LIMIT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub const fn label(self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }

    pub(crate) fn from_strength(strength: f64) -> Self {
        if strength > DIRECTION_THRESHOLD {
            TrendDirection::Up
        } else if strength < -DIRECTION_THRESHOLD {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        }
    }
}

/// Aggregates over the most recent window of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub average_cutoff: f64,
    pub lowest_cutoff: u32,
    pub highest_cutoff: u32,
    pub average_invitations: f64,
    pub total_invitations: u64,
    pub record_count: usize,
    pub trend_direction: TrendDirection,
    /// Normalized regression slope in `[-100, 100]`; positive means rising cutoffs.
    pub trend_strength: f64,
}

impl TrendAnalysis {
    fn empty() -> Self {
        Self {
            average_cutoff: 0.0,
            lowest_cutoff: 0,
            highest_cutoff: 0,
            average_invitations: 0.0,
            total_invitations: 0,
            record_count: 0,
            trend_direction: TrendDirection::Stable,
            trend_strength: 0.0,
        }
    }
}

pub fn analyze(
    records: &[HistoricalDrawRecord],
    category: Option<&str>,
    settings: &DrawSettings,
) -> TrendAnalysis {
    let window: Vec<&HistoricalDrawRecord> = select(records, category)
        .into_iter()
        .take(settings.window)
        .collect();
    if window.is_empty() {
        return TrendAnalysis::empty();
    }

    let cutoffs: Vec<f64> = window.iter().map(|r| f64::from(r.cutoff_score)).collect();
    let invitations: Vec<f64> = window
        .iter()
        .map(|r| f64::from(r.invitations_issued))
        .collect();
    let trend_strength = trend_strength(&cutoffs);

    let analysis = TrendAnalysis {
        average_cutoff: round_to_tenth(mean(&cutoffs)),
        lowest_cutoff: window.iter().map(|r| r.cutoff_score).min().unwrap_or(0),
        highest_cutoff: window.iter().map(|r| r.cutoff_score).max().unwrap_or(0),
        average_invitations: round_to_tenth(mean(&invitations)),
        total_invitations: window.iter().map(|r| u64::from(r.invitations_issued)).sum(),
        record_count: window.len(),
        trend_direction: TrendDirection::from_strength(trend_strength),
        trend_strength,
    };

    debug!(
        category = category.unwrap_or("all"),
        records = analysis.record_count,
        direction = analysis.trend_direction.label(),
        strength = analysis.trend_strength,
        "draw trend analyzed"
    );
    analysis
}

/// Least-squares slope of cutoffs over chronological index, as per-mille of the mean
/// cutoff, clamped to `[-100, 100]` and rounded to one decimal. `cutoffs` is most
/// recent first.
pub(crate) fn trend_strength(cutoffs: &[f64]) -> f64 {
    let n = cutoffs.len();
    let average = mean(cutoffs);
    if n < 2 || average == 0.0 {
        return 0.0;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let (covariance, spread) = cutoffs
        .iter()
        .rev()
        .enumerate()
        .fold((0.0, 0.0), |(covariance, spread), (x, y)| {
            let dx = x as f64 - x_mean;
            (covariance + dx * (y - average), spread + dx * dx)
        });
    let slope = covariance / spread;

    round_to_tenth((slope / average * 1000.0).clamp(-STRENGTH_LIMIT, STRENGTH_LIMIT))
}
