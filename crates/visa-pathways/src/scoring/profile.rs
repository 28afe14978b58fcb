use serde::{Deserialize, Serialize};

/// Upper bound of the CLB/NCLC benchmark scale used for every language score.
pub const LANGUAGE_SCALE_MAX: u8 = 12;
/// Oldest age accepted as a plausible applicant age.
pub const MAX_AGE: u8 = 120;
/// Upper bound for any work experience field, in years.
pub const MAX_EXPERIENCE_YEARS: u8 = 50;

/// The normalized, validated applicant attributes consumed by every calculator.
///
/// "Domestic" fields are relative to the program being scored: Canadian experience for
/// the CRS, Australian experience for the points test, and so on. Callers normalize the
/// profile per program before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u8,
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub spouse: Option<SpouseProfile>,
    pub first_language: LanguageTest,
    #[serde(default)]
    pub second_language: Option<LanguageTest>,
    pub education: EducationLevel,
    #[serde(default)]
    pub domestic_experience_years: u8,
    #[serde(default)]
    pub foreign_experience_years: u8,
    #[serde(default)]
    pub domestic_education: Option<DomesticEducation>,
    #[serde(default)]
    pub job_offer: Option<JobOffer>,
    #[serde(default)]
    pub nomination: Option<Nomination>,
    #[serde(default)]
    pub trade_certificate: bool,
    #[serde(default)]
    pub sibling_in_country: bool,
    #[serde(default)]
    pub specialist_education: bool,
    #[serde(default)]
    pub professional_year: bool,
    #[serde(default)]
    pub community_language: bool,
    #[serde(default)]
    pub regional_study: bool,
    #[serde(default)]
    pub has_accommodation: bool,
    #[serde(default)]
    pub has_health_insurance: bool,
    #[serde(default)]
    pub has_business_plan: bool,
    #[serde(default)]
    pub portuguese_level: Option<CefrLevel>,
    #[serde(default)]
    pub finances: Finances,
}

impl ApplicantProfile {
    /// Accompanying spouse or partner, if the marital status allows one.
    pub fn accompanying_spouse(&self) -> Option<&SpouseProfile> {
        if !self.marital_status.has_partner() {
            return None;
        }

        self.spouse.as_ref().filter(|spouse| spouse.accompanying)
    }

    /// French test results, whichever slot they were recorded in.
    pub fn french_scores(&self) -> Option<&LanguageScores> {
        [Some(&self.first_language), self.second_language.as_ref()]
            .into_iter()
            .flatten()
            .find(|test| test.language == OfficialLanguage::French)
            .map(|test| &test.scores)
    }

    /// English test results, whichever slot they were recorded in.
    pub fn english_scores(&self) -> Option<&LanguageScores> {
        [Some(&self.first_language), self.second_language.as_ref()]
            .into_iter()
            .flatten()
            .find(|test| test.language == OfficialLanguage::English)
            .map(|test| &test.scores)
    }

    pub fn total_experience_years(&self) -> u16 {
        self.domestic_experience_years as u16 + self.foreign_experience_years as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    CommonLaw,
    Divorced,
    Widowed,
    Separated,
}

impl MaritalStatus {
    pub const fn has_partner(self) -> bool {
        matches!(self, MaritalStatus::Married | MaritalStatus::CommonLaw)
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::CommonLaw => "common_law",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
            MaritalStatus::Separated => "separated",
        }
    }
}

/// Partner attributes that feed the spouse and partner categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpouseProfile {
    pub accompanying: bool,
    pub education: EducationLevel,
    #[serde(default)]
    pub language: Option<LanguageScores>,
    #[serde(default)]
    pub domestic_experience_years: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficialLanguage {
    English,
    French,
}

impl OfficialLanguage {
    pub const fn label(self) -> &'static str {
        match self {
            OfficialLanguage::English => "english",
            OfficialLanguage::French => "french",
        }
    }
}

/// A completed language test: which language and the benchmark per ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTest {
    pub language: OfficialLanguage,
    pub scores: LanguageScores,
}

/// Benchmark levels (CLB/NCLC, 0..=12) for the four tested abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageScores {
    pub speaking: u8,
    pub listening: u8,
    pub reading: u8,
    pub writing: u8,
}

impl LanguageScores {
    pub const fn uniform(level: u8) -> Self {
        Self {
            speaking: level,
            listening: level,
            reading: level,
            writing: level,
        }
    }

    pub fn abilities(&self) -> [(LanguageAbility, u8); 4] {
        [
            (LanguageAbility::Speaking, self.speaking),
            (LanguageAbility::Listening, self.listening),
            (LanguageAbility::Reading, self.reading),
            (LanguageAbility::Writing, self.writing),
        ]
    }

    pub fn min_level(&self) -> u8 {
        self.speaking
            .min(self.listening)
            .min(self.reading)
            .min(self.writing)
    }

    pub fn all_at_least(&self, level: u8) -> bool {
        self.min_level() >= level
    }

    /// Raise every ability to at least `level`, leaving higher abilities untouched.
    pub fn raised_to(&self, level: u8) -> Self {
        Self {
            speaking: self.speaking.max(level),
            listening: self.listening.max(level),
            reading: self.reading.max(level),
            writing: self.writing.max(level),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageAbility {
    Speaking,
    Listening,
    Reading,
    Writing,
}

impl LanguageAbility {
    pub const fn label(self) -> &'static str {
        match self {
            LanguageAbility::Speaking => "speaking",
            LanguageAbility::Listening => "listening",
            LanguageAbility::Reading => "reading",
            LanguageAbility::Writing => "writing",
        }
    }
}

/// Highest completed education credential, ordered from none to doctorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    None,
    Secondary,
    OneYearPostSecondary,
    TwoYearPostSecondary,
    Bachelors,
    TwoOrMoreCredentials,
    Masters,
    Phd,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::None => "none",
            EducationLevel::Secondary => "secondary",
            EducationLevel::OneYearPostSecondary => "one_year_post_secondary",
            EducationLevel::TwoYearPostSecondary => "two_year_post_secondary",
            EducationLevel::Bachelors => "bachelors",
            EducationLevel::TwoOrMoreCredentials => "two_or_more_credentials",
            EducationLevel::Masters => "masters",
            EducationLevel::Phd => "phd",
        }
    }

    pub fn is_post_secondary(self) -> bool {
        self >= EducationLevel::OneYearPostSecondary
    }
}

/// Education completed inside the destination country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomesticEducation {
    OneOrTwoYear,
    ThreeYearOrMore,
}

/// Qualifying job offer with its occupation skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub skill_level: OccupationSkillLevel,
    #[serde(default)]
    pub monthly_salary_eur: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupationSkillLevel {
    Teer0MajorGroup00,
    Teer0,
    Teer1,
    Teer2,
    Teer3,
    Teer4,
    Teer5,
}

/// Government nomination held by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nomination {
    Standard,
    Regional,
}

/// Common European Framework level for Portuguese proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// Monthly income streams and liquid savings, in euros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finances {
    #[serde(default)]
    pub monthly_passive_income_eur: u32,
    #[serde(default)]
    pub monthly_remote_income_eur: u32,
    #[serde(default)]
    pub savings_eur: u32,
}
