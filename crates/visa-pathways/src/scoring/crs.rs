use super::profile::{
    ApplicantProfile, DomesticEducation, EducationLevel, LanguageScores, Nomination,
    OccupationSkillLevel, SpouseProfile,
};
use super::{
    band_points, table_entry, validate_profile, Breakdown, Program, ScoreCategory, ScoreResult,
    Scorer, ScoringError,
};

const TABLE_VERSION: &str = "CRS-2024.1";
const MAX_SCORE: u32 = 1200;

const CATEGORIES: &[(ScoreCategory, u32)] = &[
    (ScoreCategory::Age, 110),
    (ScoreCategory::Education, 150),
    (ScoreCategory::FirstLanguage, 136),
    (ScoreCategory::SecondLanguage, 24),
    (ScoreCategory::DomesticExperience, 80),
    (ScoreCategory::SpouseFactors, 40),
    (ScoreCategory::SkillTransferability, 100),
    (ScoreCategory::Additional, 600),
];

/// Points as `(single, with accompanying spouse)`.
type Pair = (u32, u32);

const AGE: &[(u8, Pair)] = &[
    (18, (99, 90)),
    (19, (105, 95)),
    (20, (110, 100)),
    (30, (105, 95)),
    (31, (99, 90)),
    (32, (94, 85)),
    (33, (88, 80)),
    (34, (83, 75)),
    (35, (77, 70)),
    (36, (72, 65)),
    (37, (66, 60)),
    (38, (61, 55)),
    (39, (55, 50)),
    (40, (50, 45)),
    (41, (39, 35)),
    (42, (28, 25)),
    (43, (17, 15)),
    (44, (6, 5)),
    (45, (0, 0)),
];

const EDUCATION: &[(EducationLevel, Pair)] = &[
    (EducationLevel::None, (0, 0)),
    (EducationLevel::Secondary, (30, 28)),
    (EducationLevel::OneYearPostSecondary, (90, 84)),
    (EducationLevel::TwoYearPostSecondary, (98, 91)),
    (EducationLevel::Bachelors, (120, 112)),
    (EducationLevel::TwoOrMoreCredentials, (128, 119)),
    (EducationLevel::Masters, (135, 126)),
    (EducationLevel::Phd, (150, 140)),
];

/// Per ability, keyed by the lowest CLB of the band.
const FIRST_LANGUAGE: &[(u8, Pair)] = &[
    (4, (6, 6)),
    (6, (9, 8)),
    (7, (17, 16)),
    (8, (23, 22)),
    (9, (31, 29)),
    (10, (34, 32)),
];

const SECOND_LANGUAGE: &[(u8, u32)] = &[(5, 1), (7, 3), (9, 6)];
const SECOND_LANGUAGE_CAP_WITH_SPOUSE: u32 = 22;

const DOMESTIC_EXPERIENCE_CEILING: u8 = 5;
const DOMESTIC_EXPERIENCE: &[(u8, Pair)] = &[
    (1, (40, 35)),
    (2, (53, 46)),
    (3, (64, 56)),
    (4, (72, 63)),
    (5, (80, 70)),
];

const SPOUSE_EDUCATION: &[(EducationLevel, u32)] = &[
    (EducationLevel::None, 0),
    (EducationLevel::Secondary, 2),
    (EducationLevel::OneYearPostSecondary, 6),
    (EducationLevel::TwoYearPostSecondary, 7),
    (EducationLevel::Bachelors, 8),
    (EducationLevel::TwoOrMoreCredentials, 9),
    (EducationLevel::Masters, 10),
    (EducationLevel::Phd, 10),
];
const SPOUSE_LANGUAGE: &[(u8, u32)] = &[(5, 1), (7, 3), (9, 5)];
const SPOUSE_EXPERIENCE: &[(u8, u32)] = &[(1, 5), (2, 7), (3, 8), (4, 9), (5, 10)];

const TRANSFERABILITY_SUBTOTAL_CAP: u32 = 50;
const TRANSFERABILITY_CAP: u32 = 100;

const NOMINATION_POINTS: u32 = 600;
const JOB_OFFER_MAJOR_GROUP_00: u32 = 200;
const JOB_OFFER_SKILLED: u32 = 50;
const SIBLING_POINTS: u32 = 15;
const FRENCH_WITH_WEAK_ENGLISH: u32 = 25;
const FRENCH_WITH_ENGLISH: u32 = 50;

/// Canada Comprehensive Ranking System calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrsScorer;

impl Scorer for CrsScorer {
    fn program(&self) -> Program {
        Program::Crs
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

        let spouse = profile.accompanying_spouse();
        let pick = |pair: Pair| if spouse.is_some() { pair.1 } else { pair.0 };
        let mut breakdown = Breakdown::new(Program::Crs, CATEGORIES);

        breakdown.record(ScoreCategory::Age, pick(band_points(AGE, profile.age, (0, 0))))?;

        let education = table_entry(Program::Crs, "education", EDUCATION, profile.education)?;
        breakdown.record(ScoreCategory::Education, pick(education))?;

        let first_language: u32 = profile
            .first_language
            .scores
            .abilities()
            .iter()
            .map(|(_, level)| pick(band_points(FIRST_LANGUAGE, *level, (0, 0))))
            .sum();
        breakdown.record(ScoreCategory::FirstLanguage, first_language)?;

        breakdown.record(ScoreCategory::SecondLanguage, second_language(profile, spouse))?;

        let domestic_years = profile
            .domestic_experience_years
            .min(DOMESTIC_EXPERIENCE_CEILING);
        breakdown.record(
            ScoreCategory::DomesticExperience,
            pick(band_points(DOMESTIC_EXPERIENCE, domestic_years, (0, 0))),
        )?;

        let spouse_points = match spouse {
            Some(spouse) => spouse_factors(spouse)?,
            None => 0,
        };
        breakdown.record(ScoreCategory::SpouseFactors, spouse_points)?;

        breakdown.record(ScoreCategory::SkillTransferability, transferability(profile))?;
        breakdown.record(ScoreCategory::Additional, additional(profile))?;

        Ok(breakdown.finish(TABLE_VERSION, MAX_SCORE))
    }
}

fn second_language(profile: &ApplicantProfile, spouse: Option<&SpouseProfile>) -> u32 {
    let Some(second) = &profile.second_language else {
        return 0;
    };
    if second.language == profile.first_language.language {
        return 0;
    }

    let points: u32 = second
        .scores
        .abilities()
        .iter()
        .map(|(_, level)| band_points(SECOND_LANGUAGE, *level, 0))
        .sum();

    if spouse.is_some() {
        points.min(SECOND_LANGUAGE_CAP_WITH_SPOUSE)
    } else {
        points
    }
}

fn spouse_factors(spouse: &SpouseProfile) -> Result<u32, ScoringError> {
    let education = table_entry(
        Program::Crs,
        "spouse_education",
        SPOUSE_EDUCATION,
        spouse.education,
    )?;
    let language: u32 = spouse
        .language
        .map(|scores| {
            scores
                .abilities()
                .iter()
                .map(|(_, level)| band_points(SPOUSE_LANGUAGE, *level, 0))
                .sum()
        })
        .unwrap_or(0);
    let experience = band_points(
        SPOUSE_EXPERIENCE,
        spouse
            .domestic_experience_years
            .min(DOMESTIC_EXPERIENCE_CEILING),
        0,
    );

    Ok(education + language + experience)
}

/// Credential tier used by the transferability grid: 0 none, 1 a single
/// post-secondary credential, 2 two or more credentials or a graduate degree.
fn education_tier(level: EducationLevel) -> u8 {
    match level {
        EducationLevel::None | EducationLevel::Secondary => 0,
        EducationLevel::OneYearPostSecondary
        | EducationLevel::TwoYearPostSecondary
        | EducationLevel::Bachelors => 1,
        EducationLevel::TwoOrMoreCredentials | EducationLevel::Masters | EducationLevel::Phd => 2,
    }
}

/// Grid cell: `(weak, strong)` pair picked by tier, where tier 0 earns nothing.
fn grid(tier: u8, strong: bool) -> u32 {
    match (tier, strong) {
        (0, _) => 0,
        (1, false) => 13,
        (1, true) => 25,
        (_, false) => 25,
        (_, true) => 50,
    }
}

fn language_tier(scores: &LanguageScores) -> Option<bool> {
    if scores.all_at_least(9) {
        Some(true)
    } else if scores.all_at_least(7) {
        Some(false)
    } else {
        None
    }
}

fn transferability(profile: &ApplicantProfile) -> u32 {
    let language = language_tier(&profile.first_language.scores);
    let domestic = profile.domestic_experience_years;
    let domestic_tier = match domestic {
        0 => None,
        1 => Some(false),
        _ => Some(true),
    };

    let education_tier = education_tier(profile.education);
    let education_with_language = language
        .map(|strong| grid(education_tier, strong))
        .unwrap_or(0);
    let education_with_experience = domestic_tier
        .map(|strong| grid(education_tier, strong))
        .unwrap_or(0);
    let education = (education_with_language + education_with_experience)
        .min(TRANSFERABILITY_SUBTOTAL_CAP);

    let foreign_tier = match profile.foreign_experience_years {
        0 => 0,
        1 | 2 => 1,
        _ => 2,
    };
    let foreign_with_language = language
        .map(|strong| grid(foreign_tier, strong))
        .unwrap_or(0);
    let foreign_with_experience = domestic_tier
        .map(|strong| grid(foreign_tier, strong))
        .unwrap_or(0);
    let foreign = (foreign_with_language + foreign_with_experience)
        .min(TRANSFERABILITY_SUBTOTAL_CAP);

    let certificate = if !profile.trade_certificate {
        0
    } else if profile.first_language.scores.all_at_least(7) {
        50
    } else if profile.first_language.scores.all_at_least(5) {
        25
    } else {
        0
    };

    (education + foreign + certificate).min(TRANSFERABILITY_CAP)
}

fn additional(profile: &ApplicantProfile) -> u32 {
    let nomination = match profile.nomination {
        Some(Nomination::Standard) | Some(Nomination::Regional) => NOMINATION_POINTS,
        None => 0,
    };

    let job_offer = match profile.job_offer.map(|offer| offer.skill_level) {
        Some(OccupationSkillLevel::Teer0MajorGroup00) => JOB_OFFER_MAJOR_GROUP_00,
        Some(
            OccupationSkillLevel::Teer0
            | OccupationSkillLevel::Teer1
            | OccupationSkillLevel::Teer2
            | OccupationSkillLevel::Teer3,
        ) => JOB_OFFER_SKILLED,
        Some(OccupationSkillLevel::Teer4 | OccupationSkillLevel::Teer5) | None => 0,
    };

    let study = match profile.domestic_education {
        Some(DomesticEducation::OneOrTwoYear) => 15,
        Some(DomesticEducation::ThreeYearOrMore) => 30,
        None => 0,
    };

    let french = match profile.french_scores() {
        Some(french) if french.all_at_least(7) => {
            if profile
                .english_scores()
                .map(|english| english.all_at_least(5))
                .unwrap_or(false)
            {
                FRENCH_WITH_ENGLISH
            } else {
                FRENCH_WITH_WEAK_ENGLISH
            }
        }
        _ => 0,
    };

    let sibling = if profile.sibling_in_country {
        SIBLING_POINTS
    } else {
        0
    };

    nomination + job_offer + study + french + sibling
}
