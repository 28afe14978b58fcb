use proptest::option;
use proptest::prelude::*;
use visa_pathways::scoring::{
    ApplicantProfile, CefrLevel, DomesticEducation, EducationLevel, Finances, JobOffer,
    LanguageScores, LanguageTest, MaritalStatus, Nomination, OccupationSkillLevel,
    OfficialLanguage, PortugalVisa, Program, SpouseProfile,
};

pub fn programs() -> Vec<Program> {
    let mut programs = vec![Program::Crs, Program::Australia];
    programs.extend(PortugalVisa::all().into_iter().map(Program::Portugal));
    programs
}

fn language_scores() -> impl Strategy<Value = LanguageScores> {
    (0u8..=12, 0u8..=12, 0u8..=12, 0u8..=12).prop_map(|(speaking, listening, reading, writing)| {
        LanguageScores {
            speaking,
            listening,
            reading,
            writing,
        }
    })
}

fn language_test() -> impl Strategy<Value = LanguageTest> {
    (
        prop_oneof![Just(OfficialLanguage::English), Just(OfficialLanguage::French)],
        language_scores(),
    )
        .prop_map(|(language, scores)| LanguageTest { language, scores })
}

fn education() -> impl Strategy<Value = EducationLevel> {
    prop_oneof![
        Just(EducationLevel::None),
        Just(EducationLevel::Secondary),
        Just(EducationLevel::OneYearPostSecondary),
        Just(EducationLevel::TwoYearPostSecondary),
        Just(EducationLevel::Bachelors),
        Just(EducationLevel::TwoOrMoreCredentials),
        Just(EducationLevel::Masters),
        Just(EducationLevel::Phd),
    ]
}

fn marital_status() -> impl Strategy<Value = MaritalStatus> {
    prop_oneof![
        Just(MaritalStatus::Single),
        Just(MaritalStatus::Married),
        Just(MaritalStatus::CommonLaw),
        Just(MaritalStatus::Divorced),
    ]
}

fn spouse() -> impl Strategy<Value = SpouseProfile> {
    (any::<bool>(), education(), option::of(language_scores()), 0u8..=50).prop_map(
        |(accompanying, education, language, domestic_experience_years)| SpouseProfile {
            accompanying,
            education,
            language,
            domestic_experience_years,
        },
    )
}

fn job_offer() -> impl Strategy<Value = JobOffer> {
    (
        prop_oneof![
            Just(OccupationSkillLevel::Teer0MajorGroup00),
            Just(OccupationSkillLevel::Teer0),
            Just(OccupationSkillLevel::Teer1),
            Just(OccupationSkillLevel::Teer3),
            Just(OccupationSkillLevel::Teer5),
        ],
        0u32..6000,
    )
        .prop_map(|(skill_level, monthly_salary_eur)| JobOffer {
            skill_level,
            monthly_salary_eur,
        })
}

fn finances() -> impl Strategy<Value = Finances> {
    (0u32..6000, 0u32..6000, 0u32..100_000).prop_map(
        |(monthly_passive_income_eur, monthly_remote_income_eur, savings_eur)| Finances {
            monthly_passive_income_eur,
            monthly_remote_income_eur,
            savings_eur,
        },
    )
}

fn cefr() -> impl Strategy<Value = CefrLevel> {
    prop_oneof![
        Just(CefrLevel::A1),
        Just(CefrLevel::A2),
        Just(CefrLevel::B1),
        Just(CefrLevel::B2),
        Just(CefrLevel::C1),
        Just(CefrLevel::C2),
    ]
}

/// Valid profiles: every numeric field in its domain and a spouse only with a partner.
pub fn profile() -> impl Strategy<Value = ApplicantProfile> {
    let core = (
        0u8..=120,
        marital_status(),
        option::of(spouse()),
        language_test(),
        option::of(language_test()),
        education(),
        0u8..=50,
        0u8..=50,
    );
    let programs = (
        option::of(prop_oneof![
            Just(DomesticEducation::OneOrTwoYear),
            Just(DomesticEducation::ThreeYearOrMore),
        ]),
        option::of(job_offer()),
        option::of(prop_oneof![Just(Nomination::Standard), Just(Nomination::Regional)]),
        option::of(cefr()),
        finances(),
    );
    let flags = proptest::collection::vec(any::<bool>(), 9);

    (core, programs, flags).prop_map(
        |(
            (age, marital_status, spouse, first_language, second_language, education, domestic, foreign),
            (domestic_education, job_offer, nomination, portuguese_level, finances),
            flags,
        )| ApplicantProfile {
            age,
            marital_status,
            spouse: spouse.filter(|_| marital_status.has_partner()),
            first_language,
            second_language,
            education,
            domestic_experience_years: domestic,
            foreign_experience_years: foreign,
            domestic_education,
            job_offer,
            nomination,
            trade_certificate: flags[0],
            sibling_in_country: flags[1],
            specialist_education: flags[2],
            professional_year: flags[3],
            community_language: flags[4],
            regional_study: flags[5],
            has_accommodation: flags[6],
            has_health_insurance: flags[7],
            has_business_plan: flags[8],
            portuguese_level,
            finances,
        },
    )
}
