use super::profile::{
    ApplicantProfile, LanguageAbility, LanguageScores, LANGUAGE_SCALE_MAX, MAX_AGE,
    MAX_EXPERIENCE_YEARS,
};

/// Validation errors raised before a profile reaches any rule table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("age {} is outside the accepted range 0..={}", .0, MAX_AGE)]
    AgeOutOfRange(u8),
    #[error(
        "{} {} score {} is outside the benchmark scale 0..={}",
        .test,
        .ability.label(),
        .value,
        LANGUAGE_SCALE_MAX
    )]
    LanguageScoreOutOfRange {
        test: &'static str,
        ability: LanguageAbility,
        value: u8,
    },
    #[error(
        "{} of {} years is outside the accepted range 0..={}",
        .field,
        .value,
        MAX_EXPERIENCE_YEARS
    )]
    ExperienceOutOfRange { field: &'static str, value: u8 },
    #[error("spouse details supplied for marital status '{0}'")]
    SpouseWithoutPartner(&'static str),
}

/// Reject profiles whose fields fall outside their documented domains.
///
/// Values inside the domain but beyond a program ceiling (for example six years of
/// domestic experience where the table stops at five) are accepted here and clamped by
/// the calculators.
pub fn validate_profile(profile: &ApplicantProfile) -> Result<(), ProfileViolation> {
    if profile.age > MAX_AGE {
        return Err(ProfileViolation::AgeOutOfRange(profile.age));
    }

    check_language("first_language", &profile.first_language.scores)?;
    if let Some(second) = &profile.second_language {
        check_language("second_language", &second.scores)?;
    }

    check_experience("domestic_experience_years", profile.domestic_experience_years)?;
    check_experience("foreign_experience_years", profile.foreign_experience_years)?;

    if let Some(spouse) = &profile.spouse {
        if !profile.marital_status.has_partner() {
            return Err(ProfileViolation::SpouseWithoutPartner(
                profile.marital_status.label(),
            ));
        }
        if let Some(language) = &spouse.language {
            check_language("spouse_language", language)?;
        }
        check_experience(
            "spouse_domestic_experience_years",
            spouse.domestic_experience_years,
        )?;
    }

    Ok(())
}

fn check_language(test: &'static str, scores: &LanguageScores) -> Result<(), ProfileViolation> {
    match scores
        .abilities()
        .into_iter()
        .find(|(_, value)| *value > LANGUAGE_SCALE_MAX)
    {
        Some((ability, value)) => Err(ProfileViolation::LanguageScoreOutOfRange {
            test,
            ability,
            value,
        }),
        None => Ok(()),
    }
}

fn check_experience(field: &'static str, value: u8) -> Result<(), ProfileViolation> {
    if value > MAX_EXPERIENCE_YEARS {
        return Err(ProfileViolation::ExperienceOutOfRange { field, value });
    }
    Ok(())
}
