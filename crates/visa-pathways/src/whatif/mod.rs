//! Hypothetical improvement scenarios and the combined best-case score.

mod catalog;
mod recommend;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use catalog::{ActionCatalog, ActionGate, Difficulty, ImprovementAction, LocalizedText};
pub use recommend::{recommend, PrioritizedAction, Priority, MAX_RECOMMENDATIONS};

use crate::scoring::{scorer_for, ApplicantProfile, Program, ScoreCategory, Scorer, ScoringError};

/// Outcome of applying one catalog action to the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvaluation {
    pub action_id: String,
    pub title: String,
    pub title_pt: String,
    pub category: ScoreCategory,
    pub difficulty: Difficulty,
    pub months: u8,
    pub gate: ActionGate,
    pub new_score: u32,
    pub points_gain: i64,
    pub is_applicable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ScenarioEvaluation {
    fn new(action: &ImprovementAction, new_score: u32, points_gain: i64) -> Self {
        Self {
            action_id: action.id.to_string(),
            title: action.title.en.to_string(),
            title_pt: action.title.pt.to_string(),
            category: action.category,
            difficulty: action.difficulty,
            months: action.months,
            gate: action.gate,
            new_score,
            points_gain,
            is_applicable: true,
            reason: None,
        }
    }

    fn not_applicable(action: &ImprovementAction, current_score: u32, reason: &str) -> Self {
        Self {
            is_applicable: false,
            reason: Some(reason.to_string()),
            ..Self::new(action, current_score, 0)
        }
    }

    /// Applicable with a positive gain.
    pub fn improves(&self) -> bool {
        self.is_applicable && self.points_gain > 0
    }

    /// Depends on a third party's decision (a nomination) rather than the applicant.
    pub fn is_externally_gated(&self) -> bool {
        self.gate == ActionGate::ExternalApproval
    }

    /// Candidate for the best-single and combined framings.
    pub fn is_incremental_improvement(&self) -> bool {
        self.improves() && !self.is_externally_gated()
    }
}

/// Every scenario for one profile plus the best single and combined outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfResult {
    pub program: Program,
    pub current_score: u32,
    pub scenarios: Vec<ScenarioEvaluation>,
    pub best_scenario: Option<ScenarioEvaluation>,
    pub combined_max_score: u32,
}

/// Evaluates a program's action catalog against a profile with that program's scorer.
pub struct WhatIfEngine {
    scorer: Box<dyn Scorer>,
    catalog: ActionCatalog,
}

impl WhatIfEngine {
    pub fn new(program: Program) -> Self {
        Self::with_parts(scorer_for(program), ActionCatalog::for_program(program))
    }

    pub fn with_parts(scorer: Box<dyn Scorer>, catalog: ActionCatalog) -> Self {
        Self { scorer, catalog }
    }

    pub fn program(&self) -> Program {
        self.scorer.program()
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> Result<WhatIfResult, ScoringError> {
        let current_score = self.scorer.score(profile)?.total_score;

        let mut scenarios = Vec::with_capacity(self.catalog.actions().len());
        for action in self.catalog.actions() {
            let scenario = match action.blocked_by(profile) {
                Some(reason) => ScenarioEvaluation::not_applicable(action, current_score, reason),
                None => {
                    let new_score = self.scorer.score(&action.apply(profile))?.total_score;
                    let gain = i64::from(new_score) - i64::from(current_score);
                    ScenarioEvaluation::new(action, new_score, gain)
                }
            };
            scenarios.push(scenario);
        }

        let best_scenario = scenarios
            .iter()
            .filter(|scenario| scenario.is_incremental_improvement())
            .fold(None::<&ScenarioEvaluation>, |best, candidate| match best {
                Some(best) if best.points_gain >= candidate.points_gain => Some(best),
                _ => Some(candidate),
            })
            .cloned();

        let combined_max_score = self.combined_score(profile, &scenarios)?.max(current_score);

        debug!(
            program = self.program().label(),
            current_score,
            combined_max_score,
            applicable = scenarios.iter().filter(|s| s.is_applicable).count(),
            "what-if scenarios evaluated"
        );

        Ok(WhatIfResult {
            program: self.program(),
            current_score,
            scenarios,
            best_scenario,
            combined_max_score,
        })
    }

    /// Fold ranked improvements onto one working copy and score it once. Gains share
    /// category caps, so they are never summed.
    fn combined_score(
        &self,
        profile: &ApplicantProfile,
        scenarios: &[ScenarioEvaluation],
    ) -> Result<u32, ScoringError> {
        let mut ranked: Vec<&ScenarioEvaluation> = scenarios
            .iter()
            .filter(|scenario| scenario.is_incremental_improvement())
            .collect();
        ranked.sort_by(|a, b| {
            b.points_gain
                .cmp(&a.points_gain)
                .then_with(|| a.action_id.cmp(&b.action_id))
        });

        let mut working = profile.clone();
        let mut used_groups = HashSet::new();
        for scenario in ranked {
            let Some(action) = self.catalog.get(&scenario.action_id) else {
                continue;
            };
            if action
                .conflict_group
                .is_some_and(|group| used_groups.contains(group))
            {
                continue;
            }
            if action.blocked_by(&working).is_some() {
                continue;
            }
            if let Some(group) = action.conflict_group {
                used_groups.insert(group);
            }
            working = action.apply(&working);
        }

        Ok(self.scorer.score(&working)?.total_score)
    }
}

/// Evaluate `program`'s catalog against `profile`.
pub fn what_if(profile: &ApplicantProfile, program: Program) -> Result<WhatIfResult, ScoringError> {
    WhatIfEngine::new(program).evaluate(profile)
}
