use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::prediction::predict;
use super::trend::{analyze, TrendDirection};
use super::{mean, round_to_tenth, select, DrawSettings, HistoricalDrawRecord};

/// Points below a cutoff that still count as a near miss.
pub const NEAR_MISS_MARGIN: u32 = 20;
/// Trend strength beyond which a moving trend raises an alert.
const TREND_ALERT_STRENGTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationChance {
    High,
    Medium,
    Low,
}

/// A qualifying or near-miss record. `gap` is `user_score - cutoff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedDraw {
    pub record: HistoricalDrawRecord,
    pub gap: i64,
    pub qualifies: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChance {
    pub program_label: String,
    pub average_cutoff: f64,
    pub minimum_cutoff: u32,
    pub chance: QualificationChance,
}

/// A score measured against every recorded draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDrawComparison {
    pub user_score: u32,
    pub would_qualify_now: bool,
    pub qualifying_count: usize,
    pub total_count: usize,
    pub matching_records: Vec<MatchedDraw>,
    pub average_gap: f64,
    pub percentile: f64,
    pub per_category_chance: Vec<CategoryChance>,
}

pub fn compare(
    user_score: u32,
    records: &[HistoricalDrawRecord],
    category: Option<&str>,
) -> UserDrawComparison {
    let selected = select(records, category);
    let qualifying_count = selected
        .iter()
        .filter(|record| user_score >= record.cutoff_score)
        .count();
    let total_count = selected.len();

    let matching_records = selected
        .iter()
        .filter(|record| record.cutoff_score <= user_score.saturating_add(NEAR_MISS_MARGIN))
        .map(|record| MatchedDraw {
            record: (*record).clone(),
            gap: gap(user_score, record),
            qualifies: user_score >= record.cutoff_score,
        })
        .collect();

    let gaps: Vec<f64> = selected
        .iter()
        .map(|record| gap(user_score, record) as f64)
        .collect();
    let percentile = if total_count == 0 {
        0.0
    } else {
        round_to_tenth(qualifying_count as f64 / total_count as f64 * 100.0)
    };

    UserDrawComparison {
        user_score,
        would_qualify_now: qualifying_count > 0,
        qualifying_count,
        total_count,
        matching_records,
        average_gap: round_to_tenth(mean(&gaps)),
        percentile,
        per_category_chance: category_chances(user_score, &selected),
    }
}

fn gap(user_score: u32, record: &HistoricalDrawRecord) -> i64 {
    i64::from(user_score) - i64::from(record.cutoff_score)
}

fn category_chances(user_score: u32, records: &[&HistoricalDrawRecord]) -> Vec<CategoryChance> {
    let mut labels: Vec<&str> = Vec::new();
    for record in records {
        if !labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(&record.program_label))
        {
            labels.push(&record.program_label);
        }
    }

    labels
        .into_iter()
        .map(|label| {
            let cutoffs: Vec<u32> = records
                .iter()
                .filter(|record| record.program_label.eq_ignore_ascii_case(label))
                .map(|record| record.cutoff_score)
                .collect();
            let as_f64: Vec<f64> = cutoffs.iter().map(|c| f64::from(*c)).collect();
            let average_cutoff = mean(&as_f64);
            let minimum_cutoff = cutoffs.iter().copied().min().unwrap_or(0);

            let score = f64::from(user_score);
            let chance = if score >= average_cutoff {
                QualificationChance::High
            } else if user_score >= minimum_cutoff {
                QualificationChance::Medium
            } else {
                QualificationChance::Low
            };

            CategoryChance {
                program_label: label.to_string(),
                average_cutoff: round_to_tenth(average_cutoff),
                minimum_cutoff,
                chance,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    AlmostQualifying,
    Qualifying,
    TrendChange,
    NextDraw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawAlert {
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    pub message: String,
}

/// Rule-based alerts in a fixed order. The next-draw alert is always present.
pub fn alerts(
    user_score: u32,
    records: &[HistoricalDrawRecord],
    category: Option<&str>,
    today: NaiveDate,
    settings: &DrawSettings,
) -> Vec<DrawAlert> {
    let mut alerts = Vec::new();

    if let Some(latest) = select(records, category).first() {
        let shortfall = i64::from(latest.cutoff_score) - i64::from(user_score);
        if shortfall > 0 && shortfall < i64::from(NEAR_MISS_MARGIN) {
            alerts.push(DrawAlert {
                kind: AlertKind::AlmostQualifying,
                priority: AlertPriority::High,
                title: "Almost qualifying".to_string(),
                message: format!(
                    "Your score of {user_score} is {shortfall} points below the latest {} cutoff of {} on {}",
                    latest.program_label, latest.cutoff_score, latest.date
                ),
            });
        } else if shortfall <= 0 {
            alerts.push(DrawAlert {
                kind: AlertKind::Qualifying,
                priority: AlertPriority::High,
                title: "Qualifying score".to_string(),
                message: format!(
                    "Your score of {user_score} meets the latest {} cutoff of {} on {}",
                    latest.program_label, latest.cutoff_score, latest.date
                ),
            });
        }
    }

    let trend = analyze(records, category, settings);
    if trend.trend_direction != TrendDirection::Stable
        && trend.trend_strength.abs() > TREND_ALERT_STRENGTH
    {
        let movement = match trend.trend_direction {
            TrendDirection::Up => "rising",
            _ => "falling",
        };
        alerts.push(DrawAlert {
            kind: AlertKind::TrendChange,
            priority: AlertPriority::Medium,
            title: format!("Cutoffs {movement}"),
            message: format!(
                "Cutoffs are {movement} across the last {} draws (strength {:.1})",
                trend.record_count, trend.trend_strength
            ),
        });
    }

    let prediction = predict(records, category, today, settings);
    alerts.push(DrawAlert {
        kind: AlertKind::NextDraw,
        priority: AlertPriority::Low,
        title: "Next draw prediction".to_string(),
        message: format!(
            "Next draw expected around {} with a cutoff near {} ({}-{}, {} confidence)",
            prediction.predicted_date,
            prediction.predicted_cutoff,
            prediction.range_min,
            prediction.range_max,
            prediction.confidence_level
        ),
    });

    alerts
}
