use super::common::*;
use crate::scoring::profile::{MaritalStatus, Nomination};
use crate::scoring::{PortugalVisa, Program, ScoreCategory, ScoringError};
use crate::whatif::{what_if, ActionGate, WhatIfEngine};

#[test]
fn crs_scenarios_report_gain_against_current_score() {
    let result = what_if(&skilled_worker(), Program::Crs).expect("what-if evaluates");

    assert_eq!(result.current_score, 482);
    assert_eq!(result.scenarios.len(), 12);

    let french = scenario(&result, "french_nclc7");
    assert!(french.is_applicable);
    assert_eq!(french.new_score, 544);
    assert_eq!(french.points_gain, 62);
    assert_eq!(french.category, ScoreCategory::SecondLanguage);

    assert_eq!(scenario(&result, "domestic_experience_one_year").points_gain, 25);
    assert_eq!(scenario(&result, "masters_degree").points_gain, 27);
    assert_eq!(scenario(&result, "job_offer_teer1").points_gain, 50);
    assert_eq!(scenario(&result, "trade_certificate").points_gain, 12);
}

#[test]
fn already_satisfied_actions_are_not_applicable() {
    let mut profile = skilled_worker();
    profile.nomination = Some(Nomination::Standard);

    let result = what_if(&profile, Program::Crs).expect("what-if evaluates");

    let language = scenario(&result, "language_clb9");
    assert!(!language.is_applicable);
    assert_eq!(language.points_gain, 0);
    assert_eq!(language.new_score, result.current_score);
    assert_eq!(
        language.reason.as_deref(),
        Some("Already at CLB 9 or higher in every ability")
    );

    let nomination = scenario(&result, "provincial_nomination");
    assert!(!nomination.is_applicable);
    assert_eq!(nomination.reason.as_deref(), Some("Already holds a nomination"));
}

#[test]
fn spouse_action_needs_an_accompanying_spouse() {
    let mut profile = skilled_worker();
    profile.marital_status = MaritalStatus::Married;

    let result = what_if(&profile, Program::Crs).expect("what-if evaluates");

    let spouse = scenario(&result, "spouse_language_clb7");
    assert!(!spouse.is_applicable);
    assert_eq!(
        spouse.reason.as_deref(),
        Some("No accompanying spouse or partner")
    );
}

#[test]
fn experience_gain_is_limited_by_table_ceiling() {
    let mut profile = skilled_worker();
    profile.domestic_experience_years = 4;

    let result = what_if(&profile, Program::Crs).expect("what-if evaluates");

    let two_years = scenario(&result, "domestic_experience_two_years");
    assert!(two_years.is_applicable);
    assert_eq!(two_years.points_gain, 8);
    assert_eq!(two_years.new_score, result.current_score + 8);
}

#[test]
fn experience_action_stops_at_the_top_band() {
    let mut profile = skilled_worker();
    profile.domestic_experience_years = 5;

    let result = what_if(&profile, Program::Crs).expect("what-if evaluates");

    let one_year = scenario(&result, "domestic_experience_one_year");
    assert!(!one_year.is_applicable);
    assert_eq!(
        one_year.reason.as_deref(),
        Some("Already at the maximum band for domestic experience")
    );
}

#[test]
fn best_scenario_skips_externally_gated_nomination() {
    let result = what_if(&skilled_worker(), Program::Crs).expect("what-if evaluates");

    let nomination = scenario(&result, "provincial_nomination");
    assert_eq!(nomination.gate, ActionGate::ExternalApproval);
    assert!(nomination.is_externally_gated());
    assert!(!nomination.is_incremental_improvement());
    assert_eq!(nomination.points_gain, 600);

    let best = result.best_scenario.expect("best scenario");
    assert_eq!(best.action_id, "french_nclc7");
    assert_eq!(best.points_gain, 62);
}

#[test]
fn combined_score_folds_actions_instead_of_summing_gains() {
    let result = what_if(&skilled_worker(), Program::Crs).expect("what-if evaluates");

    let summed: i64 = result
        .scenarios
        .iter()
        .filter(|scenario| scenario.is_incremental_improvement())
        .map(|scenario| scenario.points_gain)
        .sum();

    assert_eq!(result.combined_max_score, 687);
    assert!(i64::from(result.combined_max_score) < i64::from(result.current_score) + summed);
}

#[test]
fn australia_combined_score_respects_category_caps() {
    let result = what_if(&skilled_worker(), Program::Australia).expect("what-if evaluates");

    assert_eq!(result.current_score, 75);
    assert!(!scenario(&result, "english_proficient").is_applicable);
    assert_eq!(scenario(&result, "english_superior").points_gain, 10);
    assert_eq!(scenario(&result, "masters_degree").points_gain, 0);
    assert_eq!(scenario(&result, "regional_nomination").points_gain, 15);

    let best = result.best_scenario.as_ref().expect("best scenario");
    assert_eq!(best.action_id, "english_superior");
    assert_eq!(result.combined_max_score, 115);
}

#[test]
fn portugal_combined_score_uses_one_language_level() {
    let program = Program::Portugal(PortugalVisa::D7PassiveIncome);
    let result = what_if(&retiree(), program).expect("what-if evaluates");

    assert_eq!(result.current_score, 85);
    assert!(!scenario(&result, "secure_accommodation").is_applicable);
    assert_eq!(scenario(&result, "portuguese_a2").points_gain, 5);
    assert_eq!(scenario(&result, "portuguese_b1").points_gain, 7);
    assert_eq!(scenario(&result, "business_plan").points_gain, 0);
    assert_eq!(result.combined_max_score, 95);
}

#[test]
fn combined_score_never_drops_below_current() {
    let mut profile = skilled_worker();
    profile.first_language.scores = crate::scoring::LanguageScores::uniform(12);
    profile.education = crate::scoring::EducationLevel::Phd;
    profile.domestic_experience_years = 5;

    let result = WhatIfEngine::new(Program::Crs)
        .evaluate(&profile)
        .expect("what-if evaluates");

    assert!(result.combined_max_score >= result.current_score);
}

#[test]
fn evaluation_does_not_modify_the_input_profile() {
    let profile = skilled_worker();
    let before = profile.clone();

    what_if(&profile, Program::Crs).expect("what-if evaluates");

    assert_eq!(profile, before);
}

#[test]
fn invalid_profile_is_rejected_before_any_scenario() {
    let mut profile = skilled_worker();
    profile.first_language.scores.speaking = 13;

    let error = what_if(&profile, Program::Crs).expect_err("profile rejected");

    assert!(matches!(error, ScoringError::InvalidProfile(_)));
}
