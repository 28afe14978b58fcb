use super::profile::{ApplicantProfile, CefrLevel, EducationLevel};
use super::{
    table_entry, validate_profile, Breakdown, PortugalVisa, Program, ScoreCategory, ScoreResult,
    Scorer, ScoringError,
};

const TABLE_VERSION: &str = "PT-2025.1";
const MAX_SCORE: u32 = 100;

/// National monthly minimum wage in euros, the reference for every income threshold.
const MINIMUM_WAGE_EUR: u32 = 870;

const CATEGORIES: &[(ScoreCategory, u32)] = &[
    (ScoreCategory::Income, 35),
    (ScoreCategory::Savings, 15),
    (ScoreCategory::Education, 15),
    (ScoreCategory::Experience, 10),
    (ScoreCategory::Language, 10),
    (ScoreCategory::Ties, 15),
];

/// Income bands as `(minimum ratio of income to threshold, points)`, strongest first.
const INCOME_BANDS: &[(f64, u32)] = &[(1.5, 35), (1.0, 25), (0.75, 10)];
/// Savings bands as `(months of threshold covered, points)`, strongest first.
const SAVINGS_BANDS: &[(u32, u32)] = &[(12, 15), (6, 8)];

const EDUCATION: &[(EducationLevel, u32)] = &[
    (EducationLevel::None, 0),
    (EducationLevel::Secondary, 3),
    (EducationLevel::OneYearPostSecondary, 6),
    (EducationLevel::TwoYearPostSecondary, 6),
    (EducationLevel::Bachelors, 10),
    (EducationLevel::TwoOrMoreCredentials, 10),
    (EducationLevel::Masters, 13),
    (EducationLevel::Phd, 15),
];

const EXPERIENCE_BANDS: &[(u16, u32)] = &[(5, 10), (3, 7), (1, 4)];

const PORTUGUESE: &[(CefrLevel, u32)] = &[
    (CefrLevel::A1, 2),
    (CefrLevel::A2, 5),
    (CefrLevel::B1, 7),
    (CefrLevel::B2, 7),
    (CefrLevel::C1, 10),
    (CefrLevel::C2, 10),
];
const ENGLISH_WORKING_LANGUAGE_BONUS: u32 = 3;

const ACCOMMODATION_POINTS: u32 = 5;
const VISA_ANCHOR_POINTS: u32 = 10;

/// Portugal residence visa eligibility scorer for one visa type.
#[derive(Debug, Clone, Copy)]
pub struct PortugalScorer {
    visa: PortugalVisa,
}

impl PortugalScorer {
    pub fn new(visa: PortugalVisa) -> Self {
        Self { visa }
    }

    /// Monthly income, in euros, the visa expects the applicant to demonstrate.
    pub fn monthly_threshold_eur(&self) -> u32 {
        match self.visa {
            PortugalVisa::D1Work | PortugalVisa::D2Entrepreneur | PortugalVisa::D7PassiveIncome => {
                MINIMUM_WAGE_EUR
            }
            PortugalVisa::D3HighlyQualified => MINIMUM_WAGE_EUR * 3 / 2,
            PortugalVisa::D8DigitalNomad => MINIMUM_WAGE_EUR * 4,
            PortugalVisa::JobSeeker => MINIMUM_WAGE_EUR * 3,
        }
    }

    fn relevant_income_eur(&self, profile: &ApplicantProfile) -> u32 {
        let finances = &profile.finances;
        let salary = profile
            .job_offer
            .map(|offer| offer.monthly_salary_eur)
            .unwrap_or(0);
        match self.visa {
            PortugalVisa::D1Work | PortugalVisa::D3HighlyQualified => salary,
            PortugalVisa::D2Entrepreneur => finances
                .monthly_passive_income_eur
                .saturating_add(finances.monthly_remote_income_eur),
            PortugalVisa::D7PassiveIncome => finances.monthly_passive_income_eur,
            PortugalVisa::D8DigitalNomad => finances.monthly_remote_income_eur,
            PortugalVisa::JobSeeker => finances.savings_eur,
        }
    }

    fn has_visa_anchor(&self, profile: &ApplicantProfile) -> bool {
        match self.visa {
            PortugalVisa::D1Work | PortugalVisa::D3HighlyQualified => profile.job_offer.is_some(),
            PortugalVisa::D2Entrepreneur => profile.has_business_plan,
            PortugalVisa::D7PassiveIncome
            | PortugalVisa::D8DigitalNomad
            | PortugalVisa::JobSeeker => profile.has_health_insurance,
        }
    }
}

impl Scorer for PortugalScorer {
    fn program(&self) -> Program {
        Program::Portugal(self.visa)
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

        let program = self.program();
        let threshold = self.monthly_threshold_eur();
        let mut breakdown = Breakdown::new(program, CATEGORIES);

        let ratio = self.relevant_income_eur(profile) as f64 / threshold as f64;
        let income = INCOME_BANDS
            .iter()
            .find(|(minimum, _)| ratio >= *minimum)
            .map(|(_, points)| *points)
            .unwrap_or(0);
        breakdown.record(ScoreCategory::Income, income)?;

        let months_covered = profile.finances.savings_eur / threshold;
        let savings = SAVINGS_BANDS
            .iter()
            .find(|(months, _)| months_covered >= *months)
            .map(|(_, points)| *points)
            .unwrap_or(0);
        breakdown.record(ScoreCategory::Savings, savings)?;

        let education = table_entry(program, "education", EDUCATION, profile.education)?;
        breakdown.record(ScoreCategory::Education, education)?;

        let years = profile.total_experience_years();
        let experience = EXPERIENCE_BANDS
            .iter()
            .find(|(minimum, _)| years >= *minimum)
            .map(|(_, points)| *points)
            .unwrap_or(0);
        breakdown.record(ScoreCategory::Experience, experience)?;

        let portuguese = match profile.portuguese_level {
            Some(level) => table_entry(program, "portuguese", PORTUGUESE, level)?,
            None => 0,
        };
        let english_bonus = profile
            .english_scores()
            .filter(|scores| scores.all_at_least(7))
            .map(|_| ENGLISH_WORKING_LANGUAGE_BONUS)
            .unwrap_or(0);
        breakdown.record(ScoreCategory::Language, portuguese + english_bonus)?;

        let mut ties = 0;
        if profile.has_accommodation {
            ties += ACCOMMODATION_POINTS;
        }
        if self.has_visa_anchor(profile) {
            ties += VISA_ANCHOR_POINTS;
        }
        breakdown.record(ScoreCategory::Ties, ties)?;

        Ok(breakdown.finish(TABLE_VERSION, MAX_SCORE))
    }
}
