//! Static registry of improvement actions.
//!
//! Each entry pairs a precondition with a pure transform. The precondition returns the
//! reason an action does not apply; the transform builds a new profile and never touches
//! its input.

use serde::{Deserialize, Serialize};

use crate::scoring::profile::{
    ApplicantProfile, CefrLevel, DomesticEducation, EducationLevel, JobOffer, LanguageScores,
    LanguageTest, Nomination, OccupationSkillLevel, OfficialLanguage, MAX_EXPERIENCE_YEARS,
};
use crate::scoring::{Program, ScoreCategory};

/// Display text in English and Portuguese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub pt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Whether the applicant controls the outcome or a third party must approve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionGate {
    Incremental,
    ExternalApproval,
}

/// One hypothetical change to an applicant profile.
#[derive(Debug)]
pub struct ImprovementAction {
    pub id: &'static str,
    pub title: LocalizedText,
    pub category: ScoreCategory,
    pub difficulty: Difficulty,
    pub months: u8,
    pub gate: ActionGate,
    /// Actions sharing a group are alternatives; at most one is folded into a plan.
    pub conflict_group: Option<&'static str>,
    precondition: fn(&ApplicantProfile) -> Option<&'static str>,
    transform: fn(&ApplicantProfile) -> ApplicantProfile,
}

impl ImprovementAction {
    /// Reason the action is not applicable to `profile`, if any.
    pub fn blocked_by(&self, profile: &ApplicantProfile) -> Option<&'static str> {
        (self.precondition)(profile)
    }

    pub fn apply(&self, profile: &ApplicantProfile) -> ApplicantProfile {
        (self.transform)(profile)
    }
}

/// The actions offered for one program.
#[derive(Debug, Clone, Copy)]
pub struct ActionCatalog {
    actions: &'static [ImprovementAction],
}

impl ActionCatalog {
    pub fn for_program(program: Program) -> Self {
        let actions = match program {
            Program::Crs => CRS_ACTIONS,
            Program::Australia => AUSTRALIA_ACTIONS,
            Program::Portugal(_) => PORTUGAL_ACTIONS,
        };
        Self { actions }
    }

    pub fn actions(&self) -> &'static [ImprovementAction] {
        self.actions
    }

    pub fn get(&self, id: &str) -> Option<&'static ImprovementAction> {
        self.actions.iter().find(|action| action.id == id)
    }
}

const MASTERS_DEGREE: ImprovementAction = ImprovementAction {
    id: "masters_degree",
    title: LocalizedText {
        en: "Complete a master's degree",
        pt: "Concluir um mestrado",
    },
    category: ScoreCategory::Education,
    difficulty: Difficulty::Hard,
    months: 18,
    gate: ActionGate::Incremental,
    conflict_group: Some("education"),
    precondition: already_masters,
    transform: to_masters,
};

const PHD_DEGREE: ImprovementAction = ImprovementAction {
    id: "phd_degree",
    title: LocalizedText {
        en: "Complete a doctorate",
        pt: "Concluir um doutoramento",
    },
    category: ScoreCategory::Education,
    difficulty: Difficulty::Hard,
    months: 48,
    gate: ActionGate::Incremental,
    conflict_group: Some("education"),
    precondition: already_phd,
    transform: to_phd,
};

static CRS_ACTIONS: &[ImprovementAction] = &[
    ImprovementAction {
        id: "language_clb9",
        title: LocalizedText {
            en: "Reach CLB 9 in every language ability",
            pt: "Atingir CLB 9 em todas as competências linguísticas",
        },
        category: ScoreCategory::FirstLanguage,
        difficulty: Difficulty::Medium,
        months: 4,
        gate: ActionGate::Incremental,
        conflict_group: Some("first_language"),
        precondition: first_language_at_clb9,
        transform: first_language_to_clb9,
    },
    ImprovementAction {
        id: "language_clb10",
        title: LocalizedText {
            en: "Reach CLB 10 in every language ability",
            pt: "Atingir CLB 10 em todas as competências linguísticas",
        },
        category: ScoreCategory::FirstLanguage,
        difficulty: Difficulty::Hard,
        months: 8,
        gate: ActionGate::Incremental,
        conflict_group: Some("first_language"),
        precondition: first_language_at_clb10,
        transform: first_language_to_clb10,
    },
    ImprovementAction {
        id: "french_nclc7",
        title: LocalizedText {
            en: "Reach NCLC 7 in French",
            pt: "Atingir NCLC 7 em francês",
        },
        category: ScoreCategory::SecondLanguage,
        difficulty: Difficulty::Hard,
        months: 12,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: french_at_nclc7,
        transform: french_to_nclc7,
    },
    ImprovementAction {
        id: "domestic_experience_one_year",
        title: LocalizedText {
            en: "Gain one more year of Canadian work experience",
            pt: "Obter mais um ano de experiência profissional no Canadá",
        },
        category: ScoreCategory::DomesticExperience,
        difficulty: Difficulty::Medium,
        months: 12,
        gate: ActionGate::Incremental,
        conflict_group: Some("domestic_experience"),
        precondition: crs_experience_maxed,
        transform: plus_one_domestic_year,
    },
    ImprovementAction {
        id: "domestic_experience_two_years",
        title: LocalizedText {
            en: "Gain two more years of Canadian work experience",
            pt: "Obter mais dois anos de experiência profissional no Canadá",
        },
        category: ScoreCategory::DomesticExperience,
        difficulty: Difficulty::Hard,
        months: 24,
        gate: ActionGate::Incremental,
        conflict_group: Some("domestic_experience"),
        precondition: crs_experience_maxed,
        transform: plus_two_domestic_years,
    },
    MASTERS_DEGREE,
    PHD_DEGREE,
    ImprovementAction {
        id: "job_offer_teer1",
        title: LocalizedText {
            en: "Secure a qualifying job offer (TEER 1)",
            pt: "Obter uma oferta de emprego qualificada (TEER 1)",
        },
        category: ScoreCategory::Additional,
        difficulty: Difficulty::Hard,
        months: 6,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_skilled_job_offer,
        transform: with_teer1_job_offer,
    },
    ImprovementAction {
        id: "domestic_study_two_year",
        title: LocalizedText {
            en: "Complete a two-year Canadian credential",
            pt: "Concluir uma formação de dois anos no Canadá",
        },
        category: ScoreCategory::Additional,
        difficulty: Difficulty::Hard,
        months: 24,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_domestic_education,
        transform: with_domestic_education,
    },
    ImprovementAction {
        id: "trade_certificate",
        title: LocalizedText {
            en: "Obtain a certificate of qualification in a trade",
            pt: "Obter um certificado de qualificação profissional",
        },
        category: ScoreCategory::SkillTransferability,
        difficulty: Difficulty::Medium,
        months: 6,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_trade_certificate,
        transform: with_trade_certificate,
    },
    ImprovementAction {
        id: "spouse_language_clb7",
        title: LocalizedText {
            en: "Spouse reaches CLB 7 in every ability",
            pt: "Cônjuge atinge CLB 7 em todas as competências",
        },
        category: ScoreCategory::SpouseFactors,
        difficulty: Difficulty::Medium,
        months: 4,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: spouse_language_at_clb7,
        transform: spouse_language_to_clb7,
    },
    ImprovementAction {
        id: "provincial_nomination",
        title: LocalizedText {
            en: "Obtain a provincial nomination",
            pt: "Obter uma nomeação provincial",
        },
        category: ScoreCategory::Additional,
        difficulty: Difficulty::Hard,
        months: 12,
        gate: ActionGate::ExternalApproval,
        conflict_group: Some("nomination"),
        precondition: has_nomination,
        transform: with_standard_nomination,
    },
];

static AUSTRALIA_ACTIONS: &[ImprovementAction] = &[
    ImprovementAction {
        id: "english_proficient",
        title: LocalizedText {
            en: "Reach proficient English (CLB 9 equivalent)",
            pt: "Atingir inglês proficiente (equivalente a CLB 9)",
        },
        category: ScoreCategory::English,
        difficulty: Difficulty::Medium,
        months: 4,
        gate: ActionGate::Incremental,
        conflict_group: Some("english"),
        precondition: english_at_clb9,
        transform: english_to_clb9,
    },
    ImprovementAction {
        id: "english_superior",
        title: LocalizedText {
            en: "Reach superior English (CLB 10 equivalent)",
            pt: "Atingir inglês superior (equivalente a CLB 10)",
        },
        category: ScoreCategory::English,
        difficulty: Difficulty::Hard,
        months: 8,
        gate: ActionGate::Incremental,
        conflict_group: Some("english"),
        precondition: english_at_clb10,
        transform: english_to_clb10,
    },
    ImprovementAction {
        id: "professional_year",
        title: LocalizedText {
            en: "Complete a professional year",
            pt: "Concluir um ano profissional",
        },
        category: ScoreCategory::Additional,
        difficulty: Difficulty::Medium,
        months: 12,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_professional_year,
        transform: with_professional_year,
    },
    ImprovementAction {
        id: "community_language",
        title: LocalizedText {
            en: "Gain a credentialled community language",
            pt: "Obter credenciação numa língua comunitária",
        },
        category: ScoreCategory::Additional,
        difficulty: Difficulty::Easy,
        months: 3,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_community_language,
        transform: with_community_language,
    },
    ImprovementAction {
        id: "regional_study",
        title: LocalizedText {
            en: "Study in a regional area",
            pt: "Estudar numa área regional",
        },
        category: ScoreCategory::Additional,
        difficulty: Difficulty::Hard,
        months: 24,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_regional_study,
        transform: with_regional_study,
    },
    ImprovementAction {
        id: "specialist_education",
        title: LocalizedText {
            en: "Complete a specialist STEM qualification",
            pt: "Concluir uma qualificação especializada em STEM",
        },
        category: ScoreCategory::Additional,
        difficulty: Difficulty::Hard,
        months: 24,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_specialist_education,
        transform: with_specialist_education,
    },
    ImprovementAction {
        id: "domestic_experience_one_year",
        title: LocalizedText {
            en: "Gain one more year of Australian skilled employment",
            pt: "Obter mais um ano de emprego qualificado na Austrália",
        },
        category: ScoreCategory::Employment,
        difficulty: Difficulty::Medium,
        months: 12,
        gate: ActionGate::Incremental,
        conflict_group: Some("domestic_experience"),
        precondition: australia_experience_maxed,
        transform: plus_one_domestic_year,
    },
    MASTERS_DEGREE,
    PHD_DEGREE,
    ImprovementAction {
        id: "state_nomination",
        title: LocalizedText {
            en: "Obtain a state nomination",
            pt: "Obter uma nomeação estadual",
        },
        category: ScoreCategory::Nomination,
        difficulty: Difficulty::Hard,
        months: 6,
        gate: ActionGate::ExternalApproval,
        conflict_group: Some("nomination"),
        precondition: has_nomination,
        transform: with_standard_nomination,
    },
    ImprovementAction {
        id: "regional_nomination",
        title: LocalizedText {
            en: "Obtain a regional nomination or family sponsorship",
            pt: "Obter uma nomeação regional ou patrocínio familiar",
        },
        category: ScoreCategory::Nomination,
        difficulty: Difficulty::Hard,
        months: 6,
        gate: ActionGate::ExternalApproval,
        conflict_group: Some("nomination"),
        precondition: has_regional_nomination,
        transform: with_regional_nomination,
    },
];

static PORTUGAL_ACTIONS: &[ImprovementAction] = &[
    ImprovementAction {
        id: "portuguese_a2",
        title: LocalizedText {
            en: "Reach A2 Portuguese",
            pt: "Atingir o nível A2 de português",
        },
        category: ScoreCategory::Language,
        difficulty: Difficulty::Medium,
        months: 6,
        gate: ActionGate::Incremental,
        conflict_group: Some("portuguese"),
        precondition: portuguese_at_a2,
        transform: portuguese_to_a2,
    },
    ImprovementAction {
        id: "portuguese_b1",
        title: LocalizedText {
            en: "Reach B1 Portuguese",
            pt: "Atingir o nível B1 de português",
        },
        category: ScoreCategory::Language,
        difficulty: Difficulty::Hard,
        months: 12,
        gate: ActionGate::Incremental,
        conflict_group: Some("portuguese"),
        precondition: portuguese_at_b1,
        transform: portuguese_to_b1,
    },
    ImprovementAction {
        id: "secure_accommodation",
        title: LocalizedText {
            en: "Secure accommodation in Portugal",
            pt: "Garantir alojamento em Portugal",
        },
        category: ScoreCategory::Ties,
        difficulty: Difficulty::Easy,
        months: 2,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_accommodation,
        transform: with_accommodation,
    },
    ImprovementAction {
        id: "health_insurance",
        title: LocalizedText {
            en: "Take out travel and health insurance",
            pt: "Contratar seguro de viagem e de saúde",
        },
        category: ScoreCategory::Ties,
        difficulty: Difficulty::Easy,
        months: 1,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_health_insurance,
        transform: with_health_insurance,
    },
    ImprovementAction {
        id: "business_plan",
        title: LocalizedText {
            en: "Prepare a viable business plan",
            pt: "Preparar um plano de negócios viável",
        },
        category: ScoreCategory::Ties,
        difficulty: Difficulty::Medium,
        months: 3,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_business_plan,
        transform: with_business_plan,
    },
    ImprovementAction {
        id: "job_offer_portugal",
        title: LocalizedText {
            en: "Secure a Portuguese employment contract",
            pt: "Obter um contrato de trabalho em Portugal",
        },
        category: ScoreCategory::Ties,
        difficulty: Difficulty::Hard,
        months: 6,
        gate: ActionGate::Incremental,
        conflict_group: None,
        precondition: has_any_job_offer,
        transform: with_portuguese_job_offer,
    },
    MASTERS_DEGREE,
];

const CRS_EXPERIENCE_CEILING: u8 = 5;
const AUSTRALIA_EXPERIENCE_CEILING: u8 = 8;
const PORTUGUESE_CONTRACT_SALARY_EUR: u32 = 1500;

fn first_language_at_clb9(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .first_language
        .scores
        .all_at_least(9)
        .then_some("Already at CLB 9 or higher in every ability")
}

fn first_language_at_clb10(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .first_language
        .scores
        .all_at_least(10)
        .then_some("Already at CLB 10 or higher in every ability")
}

fn raise_first_language(profile: &ApplicantProfile, level: u8) -> ApplicantProfile {
    let mut next = profile.clone();
    next.first_language.scores = profile.first_language.scores.raised_to(level);
    next
}

fn first_language_to_clb9(profile: &ApplicantProfile) -> ApplicantProfile {
    raise_first_language(profile, 9)
}

fn first_language_to_clb10(profile: &ApplicantProfile) -> ApplicantProfile {
    raise_first_language(profile, 10)
}

fn french_at_nclc7(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .french_scores()
        .filter(|scores| scores.all_at_least(7))
        .map(|_| "Already at NCLC 7 or higher in French")
}

fn french_to_nclc7(profile: &ApplicantProfile) -> ApplicantProfile {
    raise_language(profile, OfficialLanguage::French, 7)
}

fn english_at_clb9(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .english_scores()
        .filter(|scores| scores.all_at_least(9))
        .map(|_| "Already at proficient English or higher")
}

fn english_at_clb10(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .english_scores()
        .filter(|scores| scores.all_at_least(10))
        .map(|_| "Already at superior English")
}

fn english_to_clb9(profile: &ApplicantProfile) -> ApplicantProfile {
    raise_language(profile, OfficialLanguage::English, 9)
}

fn english_to_clb10(profile: &ApplicantProfile) -> ApplicantProfile {
    raise_language(profile, OfficialLanguage::English, 10)
}

/// Raise whichever test slot holds `language`, or record a new second test.
fn raise_language(
    profile: &ApplicantProfile,
    language: OfficialLanguage,
    level: u8,
) -> ApplicantProfile {
    let mut next = profile.clone();
    if next.first_language.language == language {
        next.first_language.scores = next.first_language.scores.raised_to(level);
        return next;
    }

    let scores = match &next.second_language {
        Some(test) if test.language == language => test.scores.raised_to(level),
        _ => LanguageScores::uniform(level),
    };
    next.second_language = Some(LanguageTest { language, scores });
    next
}

fn crs_experience_maxed(profile: &ApplicantProfile) -> Option<&'static str> {
    (profile.domestic_experience_years >= CRS_EXPERIENCE_CEILING)
        .then_some("Already at the maximum band for domestic experience")
}

fn australia_experience_maxed(profile: &ApplicantProfile) -> Option<&'static str> {
    (profile.domestic_experience_years >= AUSTRALIA_EXPERIENCE_CEILING)
        .then_some("Already at the maximum band for domestic experience")
}

fn add_domestic_years(profile: &ApplicantProfile, years: u8) -> ApplicantProfile {
    let mut next = profile.clone();
    next.domestic_experience_years = profile
        .domestic_experience_years
        .saturating_add(years)
        .min(MAX_EXPERIENCE_YEARS);
    next
}

fn plus_one_domestic_year(profile: &ApplicantProfile) -> ApplicantProfile {
    add_domestic_years(profile, 1)
}

fn plus_two_domestic_years(profile: &ApplicantProfile) -> ApplicantProfile {
    add_domestic_years(profile, 2)
}

fn already_masters(profile: &ApplicantProfile) -> Option<&'static str> {
    (profile.education >= EducationLevel::Masters)
        .then_some("Already holds a master's degree or higher")
}

fn already_phd(profile: &ApplicantProfile) -> Option<&'static str> {
    (profile.education == EducationLevel::Phd).then_some("Already holds a doctorate")
}

fn to_masters(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        education: EducationLevel::Masters,
        ..profile.clone()
    }
}

fn to_phd(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        education: EducationLevel::Phd,
        ..profile.clone()
    }
}

fn has_skilled_job_offer(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .job_offer
        .filter(|offer| offer.skill_level <= OccupationSkillLevel::Teer3)
        .map(|_| "Already has a qualifying job offer")
}

fn with_teer1_job_offer(profile: &ApplicantProfile) -> ApplicantProfile {
    let monthly_salary_eur = profile
        .job_offer
        .map(|offer| offer.monthly_salary_eur)
        .unwrap_or(0);
    ApplicantProfile {
        job_offer: Some(JobOffer {
            skill_level: OccupationSkillLevel::Teer1,
            monthly_salary_eur,
        }),
        ..profile.clone()
    }
}

fn has_any_job_offer(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .job_offer
        .map(|_| "Already has an employment contract")
}

fn with_portuguese_job_offer(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        job_offer: Some(JobOffer {
            skill_level: OccupationSkillLevel::Teer1,
            monthly_salary_eur: PORTUGUESE_CONTRACT_SALARY_EUR,
        }),
        ..profile.clone()
    }
}

fn has_domestic_education(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .domestic_education
        .map(|_| "Already holds a domestic credential")
}

fn with_domestic_education(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        domestic_education: Some(DomesticEducation::OneOrTwoYear),
        ..profile.clone()
    }
}

fn has_trade_certificate(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .trade_certificate
        .then_some("Already holds a certificate of qualification")
}

fn with_trade_certificate(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        trade_certificate: true,
        ..profile.clone()
    }
}

fn spouse_language_at_clb7(profile: &ApplicantProfile) -> Option<&'static str> {
    match profile.accompanying_spouse() {
        None => Some("No accompanying spouse or partner"),
        Some(spouse) => spouse
            .language
            .filter(|scores| scores.all_at_least(7))
            .map(|_| "Spouse already at CLB 7 or higher in every ability"),
    }
}

fn spouse_language_to_clb7(profile: &ApplicantProfile) -> ApplicantProfile {
    let mut next = profile.clone();
    if let Some(spouse) = next.spouse.as_mut() {
        spouse.language = Some(
            spouse
                .language
                .map(|scores| scores.raised_to(7))
                .unwrap_or(LanguageScores::uniform(7)),
        );
    }
    next
}

fn has_nomination(profile: &ApplicantProfile) -> Option<&'static str> {
    profile.nomination.map(|_| "Already holds a nomination")
}

fn has_regional_nomination(profile: &ApplicantProfile) -> Option<&'static str> {
    (profile.nomination == Some(Nomination::Regional))
        .then_some("Already holds a regional nomination")
}

fn with_standard_nomination(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        nomination: Some(Nomination::Standard),
        ..profile.clone()
    }
}

fn with_regional_nomination(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        nomination: Some(Nomination::Regional),
        ..profile.clone()
    }
}

fn has_professional_year(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .professional_year
        .then_some("Already completed a professional year")
}

fn with_professional_year(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        professional_year: true,
        ..profile.clone()
    }
}

fn has_community_language(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .community_language
        .then_some("Already holds a community language credential")
}

fn with_community_language(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        community_language: true,
        ..profile.clone()
    }
}

fn has_regional_study(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .regional_study
        .then_some("Already studied in a regional area")
}

fn with_regional_study(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        regional_study: true,
        ..profile.clone()
    }
}

fn has_specialist_education(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .specialist_education
        .then_some("Already holds a specialist qualification")
}

fn with_specialist_education(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        specialist_education: true,
        ..profile.clone()
    }
}

fn portuguese_at_a2(profile: &ApplicantProfile) -> Option<&'static str> {
    (profile.portuguese_level >= Some(CefrLevel::A2))
        .then_some("Already at A2 Portuguese or higher")
}

fn portuguese_at_b1(profile: &ApplicantProfile) -> Option<&'static str> {
    (profile.portuguese_level >= Some(CefrLevel::B1))
        .then_some("Already at B1 Portuguese or higher")
}

fn portuguese_to_a2(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        portuguese_level: Some(CefrLevel::A2),
        ..profile.clone()
    }
}

fn portuguese_to_b1(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        portuguese_level: Some(CefrLevel::B1),
        ..profile.clone()
    }
}

fn has_accommodation(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .has_accommodation
        .then_some("Accommodation already secured")
}

fn with_accommodation(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        has_accommodation: true,
        ..profile.clone()
    }
}

fn has_health_insurance(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .has_health_insurance
        .then_some("Health insurance already in place")
}

fn with_health_insurance(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        has_health_insurance: true,
        ..profile.clone()
    }
}

fn has_business_plan(profile: &ApplicantProfile) -> Option<&'static str> {
    profile
        .has_business_plan
        .then_some("Business plan already prepared")
}

fn with_business_plan(profile: &ApplicantProfile) -> ApplicantProfile {
    ApplicantProfile {
        has_business_plan: true,
        ..profile.clone()
    }
}
