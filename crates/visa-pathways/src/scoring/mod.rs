//! Points calculators for the supported migration programs.
//!
//! Every program is an independent implementation of [`Scorer`] with its own private,
//! versioned rule tables. Calculators share the calling convention and the
//! [`ScoreResult`] shape, nothing else.

mod australia;
mod crs;
mod portugal;
pub mod profile;
mod validation;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use australia::AustraliaScorer;
pub use crs::CrsScorer;
pub use portugal::PortugalScorer;
pub use profile::{
    ApplicantProfile, CefrLevel, DomesticEducation, EducationLevel, Finances, JobOffer,
    LanguageAbility, LanguageScores, LanguageTest, MaritalStatus, Nomination,
    OccupationSkillLevel, OfficialLanguage, SpouseProfile,
};
pub use validation::{validate_profile, ProfileViolation};

/// Programs the engine can score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    /// Canada Comprehensive Ranking System.
    Crs,
    /// Australia general skilled migration points test.
    Australia,
    /// Portugal residence visa eligibility, scored per visa type.
    Portugal(PortugalVisa),
}

impl Program {
    pub const fn label(self) -> &'static str {
        match self {
            Program::Crs => "crs",
            Program::Australia => "australia",
            Program::Portugal(visa) => visa.label(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Portuguese residence visa types with distinct eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortugalVisa {
    D1Work,
    D2Entrepreneur,
    D3HighlyQualified,
    D7PassiveIncome,
    D8DigitalNomad,
    JobSeeker,
}

impl PortugalVisa {
    pub const fn label(self) -> &'static str {
        match self {
            PortugalVisa::D1Work => "portugal_d1",
            PortugalVisa::D2Entrepreneur => "portugal_d2",
            PortugalVisa::D3HighlyQualified => "portugal_d3",
            PortugalVisa::D7PassiveIncome => "portugal_d7",
            PortugalVisa::D8DigitalNomad => "portugal_d8",
            PortugalVisa::JobSeeker => "portugal_job_seeker",
        }
    }

    pub const fn all() -> [PortugalVisa; 6] {
        [
            PortugalVisa::D1Work,
            PortugalVisa::D2Entrepreneur,
            PortugalVisa::D3HighlyQualified,
            PortugalVisa::D7PassiveIncome,
            PortugalVisa::D8DigitalNomad,
            PortugalVisa::JobSeeker,
        ]
    }
}

/// Point category tag. Each program uses a fixed subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Age,
    Education,
    FirstLanguage,
    SecondLanguage,
    DomesticExperience,
    SpouseFactors,
    SkillTransferability,
    English,
    Employment,
    Partner,
    Nomination,
    Income,
    Savings,
    Experience,
    Language,
    Ties,
    Additional,
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Age => "age",
            ScoreCategory::Education => "education",
            ScoreCategory::FirstLanguage => "first_language",
            ScoreCategory::SecondLanguage => "second_language",
            ScoreCategory::DomesticExperience => "domestic_experience",
            ScoreCategory::SpouseFactors => "spouse_factors",
            ScoreCategory::SkillTransferability => "skill_transferability",
            ScoreCategory::English => "english",
            ScoreCategory::Employment => "employment",
            ScoreCategory::Partner => "partner",
            ScoreCategory::Nomination => "nomination",
            ScoreCategory::Income => "income",
            ScoreCategory::Savings => "savings",
            ScoreCategory::Experience => "experience",
            ScoreCategory::Language => "language",
            ScoreCategory::Ties => "ties",
            ScoreCategory::Additional => "additional",
        }
    }
}

/// Category-by-category score with the total. `total_score` always equals the sum of
/// the breakdown and each entry stays within its category cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub program: Program,
    pub table_version: String,
    pub total_score: u32,
    pub max_score: u32,
    pub breakdown: BTreeMap<ScoreCategory, u32>,
}

impl ScoreResult {
    pub fn category(&self, category: ScoreCategory) -> u32 {
        self.breakdown.get(&category).copied().unwrap_or(0)
    }
}

/// The one capability every program calculator provides.
pub trait Scorer: Send + Sync {
    fn program(&self) -> Program;

    fn table_version(&self) -> &'static str;

    /// Fixed categories with their caps, in reporting order.
    fn categories(&self) -> &'static [(ScoreCategory, u32)];

    fn max_score(&self) -> u32;

    fn score(&self, profile: &ApplicantProfile) -> Result<ScoreResult, ScoringError>;
}

/// Error raised by a calculator call. No partial results are produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error(transparent)]
    InvalidProfile(#[from] ProfileViolation),
    #[error("{program} rule table '{table}' has no entry for {key}")]
    MissingTableEntry {
        program: &'static str,
        table: &'static str,
        key: String,
    },
}

impl ScoringError {
    /// True for caller mistakes, false for defects in the rule tables.
    pub fn is_validation(&self) -> bool {
        matches!(self, ScoringError::InvalidProfile(_))
    }
}

/// Calculator for `program`.
pub fn scorer_for(program: Program) -> Box<dyn Scorer> {
    match program {
        Program::Crs => Box::new(CrsScorer),
        Program::Australia => Box::new(AustraliaScorer),
        Program::Portugal(visa) => Box::new(PortugalScorer::new(visa)),
    }
}

/// Score `profile` against `program`'s rule tables.
pub fn calculate_score(
    profile: &ApplicantProfile,
    program: Program,
) -> Result<ScoreResult, ScoringError> {
    let result = scorer_for(program).score(profile)?;
    debug!(
        program = program.label(),
        total = result.total_score,
        "profile scored"
    );
    Ok(result)
}

/// Accumulates clamped category scores for one calculator call.
pub(crate) struct Breakdown {
    program: Program,
    caps: &'static [(ScoreCategory, u32)],
    entries: BTreeMap<ScoreCategory, u32>,
}

impl Breakdown {
    pub(crate) fn new(program: Program, caps: &'static [(ScoreCategory, u32)]) -> Self {
        let entries = caps.iter().map(|(category, _)| (*category, 0)).collect();
        Self {
            program,
            caps,
            entries,
        }
    }

    /// Record `raw` points for `category`, clamped to the category cap.
    pub(crate) fn record(&mut self, category: ScoreCategory, raw: u32) -> Result<(), ScoringError> {
        let cap = self
            .caps
            .iter()
            .find(|(known, _)| *known == category)
            .map(|(_, cap)| *cap)
            .ok_or_else(|| ScoringError::MissingTableEntry {
                program: self.program.label(),
                table: "categories",
                key: category.label().to_string(),
            })?;
        self.entries.insert(category, raw.min(cap));
        Ok(())
    }

    pub(crate) fn finish(self, table_version: &'static str, max_score: u32) -> ScoreResult {
        let total_score = self.entries.values().sum();
        ScoreResult {
            program: self.program,
            table_version: table_version.to_string(),
            total_score,
            max_score,
            breakdown: self.entries,
        }
    }
}

/// Points for the last band whose lower bound is at or below `value`; zero below the
/// first band. Bands must be sorted ascending.
pub(crate) fn band_points<T: Copy>(bands: &[(u8, T)], value: u8, zero: T) -> T {
    bands
        .iter()
        .take_while(|(lower, _)| *lower <= value)
        .last()
        .map(|(_, points)| *points)
        .unwrap_or(zero)
}

/// Exact-key lookup in a rule table; a miss is a table defect.
pub(crate) fn table_entry<K, V>(
    program: Program,
    table: &'static str,
    entries: &[(K, V)],
    key: K,
) -> Result<V, ScoringError>
where
    K: PartialEq + Copy + fmt::Debug,
    V: Copy,
{
    entries
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
        .ok_or_else(|| ScoringError::MissingTableEntry {
            program: program.label(),
            table,
            key: format!("{key:?}"),
        })
}
