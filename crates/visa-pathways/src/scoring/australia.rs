use super::profile::{ApplicantProfile, EducationLevel, Nomination};
use super::{
    band_points, table_entry, validate_profile, Breakdown, Program, ScoreCategory, ScoreResult,
    Scorer, ScoringError,
};

const TABLE_VERSION: &str = "AU-2024.1";
const MAX_SCORE: u32 = 145;

const CATEGORIES: &[(ScoreCategory, u32)] = &[
    (ScoreCategory::Age, 30),
    (ScoreCategory::English, 20),
    (ScoreCategory::Employment, 20),
    (ScoreCategory::Education, 20),
    (ScoreCategory::Partner, 10),
    (ScoreCategory::Nomination, 15),
    (ScoreCategory::Additional, 30),
];

const AGE: &[(u8, u32)] = &[(18, 25), (25, 30), (33, 25), (40, 15), (45, 0)];

/// Lowest ability benchmark required for each English band.
const SUPERIOR_ENGLISH_CLB: u8 = 10;
const PROFICIENT_ENGLISH_CLB: u8 = 9;
const COMPETENT_ENGLISH_CLB: u8 = 7;

const OVERSEAS_EMPLOYMENT: &[(u8, u32)] = &[(3, 5), (5, 10), (8, 15)];
const DOMESTIC_EMPLOYMENT: &[(u8, u32)] = &[(1, 5), (3, 10), (5, 15), (8, 20)];
const EMPLOYMENT_COMBINED_CAP: u32 = 20;

const EDUCATION: &[(EducationLevel, u32)] = &[
    (EducationLevel::None, 0),
    (EducationLevel::Secondary, 0),
    (EducationLevel::OneYearPostSecondary, 10),
    (EducationLevel::TwoYearPostSecondary, 10),
    (EducationLevel::Bachelors, 15),
    (EducationLevel::TwoOrMoreCredentials, 15),
    (EducationLevel::Masters, 15),
    (EducationLevel::Phd, 20),
];
const TRADE_QUALIFICATION: u32 = 10;

/// Australia general skilled migration points test.
#[derive(Debug, Clone, Copy, Default)]
pub struct AustraliaScorer;

impl Scorer for AustraliaScorer {
    fn program(&self) -> Program {
        Program::Australia
    }

    fn table_version(&self) -> &'static str {
        TABLE_VERSION
    }

    fn categories(&self) -> &'static [(ScoreCategory, u32)] {
        CATEGORIES
    }

    fn max_score(&self) -> u32 {
        MAX_SCORE
    }

    fn score(&self, profile: &ApplicantProfile) -> Result<ScoreResult, ScoringError> {
        validate_profile(profile)?;

        let mut breakdown = Breakdown::new(Program::Australia, CATEGORIES);

        breakdown.record(ScoreCategory::Age, band_points(AGE, profile.age, 0))?;
        breakdown.record(ScoreCategory::English, english(profile))?;

        let overseas = band_points(OVERSEAS_EMPLOYMENT, profile.foreign_experience_years, 0);
        let domestic = band_points(DOMESTIC_EMPLOYMENT, profile.domestic_experience_years, 0);
        breakdown.record(
            ScoreCategory::Employment,
            (overseas + domestic).min(EMPLOYMENT_COMBINED_CAP),
        )?;

        let mut education = table_entry(
            Program::Australia,
            "education",
            EDUCATION,
            profile.education,
        )?;
        if profile.trade_certificate {
            education = education.max(TRADE_QUALIFICATION);
        }
        breakdown.record(ScoreCategory::Education, education)?;

        breakdown.record(ScoreCategory::Partner, partner(profile))?;

        let nomination = match profile.nomination {
            Some(Nomination::Standard) => 5,
            Some(Nomination::Regional) => 15,
            None => 0,
        };
        breakdown.record(ScoreCategory::Nomination, nomination)?;

        breakdown.record(ScoreCategory::Additional, additional(profile))?;

        Ok(breakdown.finish(TABLE_VERSION, MAX_SCORE))
    }
}

fn english(profile: &ApplicantProfile) -> u32 {
    match profile.english_scores().map(|scores| scores.min_level()) {
        Some(level) if level >= SUPERIOR_ENGLISH_CLB => 20,
        Some(level) if level >= PROFICIENT_ENGLISH_CLB => 10,
        _ => 0,
    }
}

fn partner(profile: &ApplicantProfile) -> u32 {
    let Some(spouse) = profile.accompanying_spouse() else {
        return 10;
    };

    let competent_english = spouse
        .language
        .map(|scores| scores.all_at_least(COMPETENT_ENGLISH_CLB))
        .unwrap_or(false);

    match (competent_english, spouse.education.is_post_secondary()) {
        (true, true) => 10,
        (true, false) => 5,
        (false, _) => 0,
    }
}

fn additional(profile: &ApplicantProfile) -> u32 {
    [
        (profile.specialist_education, 10),
        (profile.domestic_education.is_some(), 5),
        (profile.professional_year, 5),
        (profile.community_language, 5),
        (profile.regional_study, 5),
    ]
    .iter()
    .filter(|(held, _)| *held)
    .map(|(_, points)| points)
    .sum()
}
