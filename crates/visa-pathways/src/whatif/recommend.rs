use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{Difficulty, ScenarioEvaluation, WhatIfResult};

/// Upper bound on the recommendation list.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Months at or below which an action counts as quick.
const QUICK_WIN_MONTHS: u8 = 6;
/// Gain at or above which an action earns medium priority.
const MEDIUM_PRIORITY_GAIN: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Scenario ranked by points gained per month of effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedAction {
    pub action_id: String,
    pub title: String,
    pub title_pt: String,
    pub points_gain: i64,
    pub months: u8,
    pub difficulty: Difficulty,
    pub efficiency: f64,
    pub priority: Priority,
    /// The gain alone reaches the target score.
    pub closes_gap: bool,
    /// Needs a third party's approval, such as a nomination.
    pub externally_gated: bool,
}

/// Greedy plan: applicable positive-gain scenarios by efficiency, at most
/// [`MAX_RECOMMENDATIONS`] of them.
///
/// Externally gated actions keep their place in the efficiency ranking, so a
/// nomination usually leads the list. They are flagged with `externally_gated` instead
/// of being demoted; only the best-single and combined framings leave them out.
pub fn recommend(result: &WhatIfResult, target_score: u32) -> Vec<PrioritizedAction> {
    let gap = i64::from(target_score) - i64::from(result.current_score);

    let mut ranked: Vec<PrioritizedAction> = result
        .scenarios
        .iter()
        .filter(|scenario| scenario.improves())
        .map(|scenario| prioritize(scenario, gap))
        .collect();

    ranked.sort_by(|a, b| {
        b.efficiency
            .partial_cmp(&a.efficiency)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.points_gain.cmp(&a.points_gain))
            .then_with(|| a.action_id.cmp(&b.action_id))
    });
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}

fn prioritize(scenario: &ScenarioEvaluation, gap: i64) -> PrioritizedAction {
    let closes_gap = scenario.points_gain >= gap;
    let priority = if closes_gap
        || scenario.difficulty == Difficulty::Easy
        || scenario.months <= QUICK_WIN_MONTHS
    {
        Priority::High
    } else if scenario.points_gain >= MEDIUM_PRIORITY_GAIN {
        Priority::Medium
    } else {
        Priority::Low
    };

    PrioritizedAction {
        action_id: scenario.action_id.clone(),
        title: scenario.title.clone(),
        title_pt: scenario.title_pt.clone(),
        points_gain: scenario.points_gain,
        months: scenario.months,
        difficulty: scenario.difficulty,
        efficiency: scenario.points_gain as f64 / f64::from(scenario.months.max(1)),
        priority,
        closes_gap,
        externally_gated: scenario.is_externally_gated(),
    }
}
