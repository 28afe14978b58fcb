//! Historical admission-round analysis: trends, next-cutoff predictions, score
//! comparison and derived alerts.
//!
//! Every function takes records most-recent-first. [`DrawHistory`] keeps them in that
//! order, so its snapshot can be passed straight through.

mod comparison;
mod import;
mod prediction;
mod trend;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use comparison::{
    alerts, compare, AlertKind, AlertPriority, CategoryChance, DrawAlert, MatchedDraw,
    QualificationChance, UserDrawComparison, NEAR_MISS_MARGIN,
};
pub use import::{DrawImportError, DrawImporter};
pub use prediction::{predict, ConfidenceLevel, DrawPrediction};
pub use trend::{analyze, TrendAnalysis, TrendDirection};

/// One past admission round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalDrawRecord {
    pub date: NaiveDate,
    pub program_label: String,
    pub cutoff_score: u32,
    pub invitations_issued: u32,
}

impl HistoricalDrawRecord {
    pub fn new(
        date: NaiveDate,
        program_label: impl Into<String>,
        cutoff_score: u32,
        invitations_issued: u32,
    ) -> Self {
        Self {
            date,
            program_label: program_label.into(),
            cutoff_score,
            invitations_issued,
        }
    }

    /// Case-insensitive category match; `None` matches every record.
    pub fn matches(&self, category: Option<&str>) -> bool {
        category
            .map(|category| self.program_label.eq_ignore_ascii_case(category.trim()))
            .unwrap_or(true)
    }
}

/// Tunables shared by trend analysis and prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSettings {
    /// Most recent records considered for trend and prediction.
    pub window: usize,
    /// Plausible cutoff band used to clamp prediction ranges.
    pub band_min: u32,
    pub band_max: u32,
    /// Days between consecutive draws.
    pub cadence_days: i64,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            window: 10,
            band_min: 400,
            band_max: 600,
            cadence_days: 14,
        }
    }
}

impl DrawSettings {
    /// Band ends in ascending order, whatever order the fields hold.
    pub fn band(&self) -> (u32, u32) {
        (
            self.band_min.min(self.band_max),
            self.band_min.max(self.band_max),
        )
    }

    pub fn band_midpoint(&self) -> u32 {
        let (low, high) = self.band();
        low + (high - low) / 2
    }
}

/// Immutable dataset sorted by date, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawHistory {
    records: Vec<HistoricalDrawRecord>,
}

impl DrawHistory {
    pub fn new(mut records: Vec<HistoricalDrawRecord>) -> Self {
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Self { records }
    }

    pub fn records(&self) -> &[HistoricalDrawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct program labels in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for record in &self.records {
            if !labels
                .iter()
                .any(|label| label.eq_ignore_ascii_case(&record.program_label))
            {
                labels.push(record.program_label.clone());
            }
        }
        labels
    }
}

/// Shared handle to the current dataset. Readers take a snapshot and never block a
/// replacement; a replacement never leaves readers with a partial dataset.
#[derive(Debug, Default)]
pub struct DrawHistoryStore {
    current: RwLock<Arc<DrawHistory>>,
}

impl DrawHistoryStore {
    pub fn new(history: DrawHistory) -> Self {
        Self {
            current: RwLock::new(Arc::new(history)),
        }
    }

    pub fn snapshot(&self) -> Arc<DrawHistory> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, history: DrawHistory) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(history);
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Records for `category`, most recent first.
pub(crate) fn select<'a>(
    records: &'a [HistoricalDrawRecord],
    category: Option<&str>,
) -> Vec<&'a HistoricalDrawRecord> {
    records
        .iter()
        .filter(|record| record.matches(category))
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance.
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
