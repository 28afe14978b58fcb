use crate::scoring::profile::{
    ApplicantProfile, EducationLevel, Finances, LanguageScores, LanguageTest, MaritalStatus,
    OfficialLanguage, SpouseProfile,
};

pub(super) fn english(level: u8) -> LanguageTest {
    LanguageTest {
        language: OfficialLanguage::English,
        scores: LanguageScores::uniform(level),
    }
}

pub(super) fn french(level: u8) -> LanguageTest {
    LanguageTest {
        language: OfficialLanguage::French,
        scores: LanguageScores::uniform(level),
    }
}

/// Single 29-year-old with a bachelor's degree, CLB 9 English, one year of domestic and
/// three years of foreign experience.
pub(super) fn base_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 29,
        marital_status: MaritalStatus::Single,
        spouse: None,
        first_language: english(9),
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

pub(super) fn married_profile() -> ApplicantProfile {
    ApplicantProfile {
        marital_status: MaritalStatus::Married,
        spouse: Some(SpouseProfile {
            accompanying: true,
            education: EducationLevel::Bachelors,
            language: Some(LanguageScores::uniform(7)),
            domestic_experience_years: 0,
        }),
        ..base_profile()
    }
}
