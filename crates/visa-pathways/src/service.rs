use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PathwayConfig;
use crate::draws::{
    alerts, analyze, compare, predict, DrawAlert, DrawHistory, DrawHistoryStore, DrawImportError,
    DrawImporter, DrawPrediction, TrendAnalysis, UserDrawComparison,
};
use crate::error::AppError;
use crate::scoring::{calculate_score, ApplicantProfile, Program, ScoreResult, ScoringError};
use crate::whatif::{recommend, PrioritizedAction, WhatIfEngine, WhatIfResult};

/// What-if scenarios for a profile with the recommendations toward `target_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfReport {
    pub target_score: u32,
    pub result: WhatIfResult,
    pub recommendations: Vec<PrioritizedAction>,
}

/// Composition root for the scoring, what-if and draw engines.
pub struct PathwayService {
    config: PathwayConfig,
    draws: Arc<DrawHistoryStore>,
}

impl PathwayService {
    pub fn new(config: PathwayConfig, history: DrawHistory) -> Self {
        Self {
            config,
            draws: Arc::new(DrawHistoryStore::new(history)),
        }
    }

    /// Build from configuration, importing the configured draw history when present.
    pub fn from_config(config: PathwayConfig) -> Result<Self, AppError> {
        let history = match &config.draws_csv {
            Some(path) => DrawImporter::from_path(path)?,
            None => DrawHistory::default(),
        };
        Ok(Self::new(config, history))
    }

    pub fn config(&self) -> &PathwayConfig {
        &self.config
    }

    pub fn draw_history(&self) -> Arc<DrawHistory> {
        self.draws.snapshot()
    }

    /// Swap in a new dataset. Requests already holding a snapshot keep it.
    pub fn replace_draws(&self, history: DrawHistory) {
        info!(records = history.len(), "draw history replaced");
        self.draws.replace(history);
    }

    pub fn reload_draws<P: AsRef<Path>>(&self, path: P) -> Result<usize, DrawImportError> {
        let history = DrawImporter::from_path(path)?;
        let count = history.len();
        self.replace_draws(history);
        Ok(count)
    }

    pub fn score(
        &self,
        profile: &ApplicantProfile,
        program: Program,
    ) -> Result<ScoreResult, ScoringError> {
        calculate_score(profile, program)
    }

    pub fn what_if(
        &self,
        profile: &ApplicantProfile,
        program: Program,
        target_score: Option<u32>,
    ) -> Result<WhatIfReport, ScoringError> {
        let target_score = target_score.unwrap_or(self.config.target_score);
        let result = WhatIfEngine::new(program).evaluate(profile)?;
        let recommendations = recommend(&result, target_score);
        Ok(WhatIfReport {
            target_score,
            result,
            recommendations,
        })
    }

    pub fn draw_analysis(&self, category: Option<&str>) -> TrendAnalysis {
        analyze(self.draws.snapshot().records(), category, &self.config.draws)
    }

    pub fn draw_prediction(&self, category: Option<&str>, today: Option<NaiveDate>) -> DrawPrediction {
        predict(
            self.draws.snapshot().records(),
            category,
            today.unwrap_or_else(current_date),
            &self.config.draws,
        )
    }

    pub fn draw_comparison(&self, user_score: u32, category: Option<&str>) -> UserDrawComparison {
        compare(user_score, self.draws.snapshot().records(), category)
    }

    pub fn draw_alerts(
        &self,
        user_score: u32,
        category: Option<&str>,
        today: Option<NaiveDate>,
    ) -> Vec<DrawAlert> {
        alerts(
            user_score,
            self.draws.snapshot().records(),
            category,
            today.unwrap_or_else(current_date),
            &self.config.draws,
        )
    }
}

fn current_date() -> NaiveDate {
    Local::now().date_naive()
}
