use std::collections::HashSet;

use super::common::*;
use crate::scoring::profile::{CefrLevel, OfficialLanguage};
use crate::scoring::{PortugalVisa, Program};
use crate::whatif::{ActionCatalog, ActionGate};

#[test]
fn catalog_ids_are_unique_per_program() {
    for program in [
        Program::Crs,
        Program::Australia,
        Program::Portugal(PortugalVisa::D1Work),
    ] {
        let catalog = ActionCatalog::for_program(program);
        let ids: HashSet<_> = catalog.actions().iter().map(|action| action.id).collect();

        assert_eq!(ids.len(), catalog.actions().len(), "{program}");
        assert!(catalog
            .actions()
            .iter()
            .all(|action| !action.title.en.is_empty() && !action.title.pt.is_empty()));
    }
}

#[test]
fn only_nominations_need_external_approval() {
    let gated: Vec<_> = ActionCatalog::for_program(Program::Australia)
        .actions()
        .iter()
        .filter(|action| action.gate == ActionGate::ExternalApproval)
        .map(|action| action.id)
        .collect();

    assert_eq!(gated, vec!["state_nomination", "regional_nomination"]);
}

#[test]
fn french_action_adds_a_second_language_test() {
    let catalog = ActionCatalog::for_program(Program::Crs);
    let action = catalog.get("french_nclc7").expect("action exists");
    let profile = skilled_worker();

    let improved = action.apply(&profile);

    let second = improved.second_language.as_ref().expect("second language recorded");
    assert_eq!(second.language, OfficialLanguage::French);
    assert!(second.scores.all_at_least(7));
    assert_eq!(improved.first_language, profile.first_language);
    assert!(action.blocked_by(&improved).is_some());
}

#[test]
fn language_action_only_raises_weaker_abilities() {
    let catalog = ActionCatalog::for_program(Program::Crs);
    let action = catalog.get("language_clb10").expect("action exists");
    let mut profile = skilled_worker();
    profile.first_language.scores.reading = 11;

    let improved = action.apply(&profile);

    assert_eq!(improved.first_language.scores.reading, 11);
    assert_eq!(improved.first_language.scores.speaking, 10);
}

#[test]
fn portuguese_levels_block_lower_targets() {
    let catalog = ActionCatalog::for_program(Program::Portugal(PortugalVisa::D7PassiveIncome));
    let mut profile = retiree();
    profile.portuguese_level = Some(CefrLevel::B1);

    assert!(catalog
        .get("portuguese_a2")
        .and_then(|action| action.blocked_by(&profile))
        .is_some());
    assert!(catalog
        .get("portuguese_b1")
        .and_then(|action| action.blocked_by(&profile))
        .is_some());
}

#[test]
fn unknown_action_id_is_absent() {
    assert!(ActionCatalog::for_program(Program::Crs)
        .get("lottery_win")
        .is_none());
}
