use crate::scoring::profile::{
    ApplicantProfile, EducationLevel, Finances, LanguageScores, LanguageTest, MaritalStatus,
    OfficialLanguage,
};
use crate::whatif::{ScenarioEvaluation, WhatIfResult};

/// Single 29-year-old, bachelor's degree, CLB 9 English, one year of domestic and three
/// years of foreign experience. Scores 482 on the CRS and 75 on the Australian test.
pub(super) fn skilled_worker() -> ApplicantProfile {
    ApplicantProfile {
        age: 29,
        marital_status: MaritalStatus::Single,
        spouse: None,
        first_language: LanguageTest {
            language: OfficialLanguage::English,
            scores: LanguageScores::uniform(9),
        },
        second_language: None,
        education: EducationLevel::Bachelors,
        domestic_experience_years: 1,
        foreign_experience_years: 3,
        domestic_education: None,
        job_offer: None,
        nomination: None,
        trade_certificate: false,
        sibling_in_country: false,
        specialist_education: false,
        professional_year: false,
        community_language: false,
        regional_study: false,
        has_accommodation: false,
        has_health_insurance: false,
        has_business_plan: false,
        portuguese_level: None,
        finances: Finances::default(),
    }
}

/// Passive-income applicant scoring 85 for the D7 visa.
pub(super) fn retiree() -> ApplicantProfile {
    ApplicantProfile {
        domestic_experience_years: 0,
        foreign_experience_years: 4,
        has_accommodation: true,
        has_health_insurance: true,
        finances: Finances {
            monthly_passive_income_eur: 1500,
            monthly_remote_income_eur: 0,
            savings_eur: 12_000,
        },
        ..skilled_worker()
    }
}

pub(super) fn scenario<'a>(result: &'a WhatIfResult, id: &str) -> &'a ScenarioEvaluation {
    result
        .scenarios
        .iter()
        .find(|scenario| scenario.action_id == id)
        .unwrap_or_else(|| panic!("scenario {id} missing"))
}
