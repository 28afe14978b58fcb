mod strategies;

use proptest::prelude::*;
use strategies::{profile, programs};
use visa_pathways::whatif::{recommend, WhatIfEngine, MAX_RECOMMENDATIONS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn applicable_actions_never_lower_the_score(profile in profile()) {
        for program in programs() {
            let result = WhatIfEngine::new(program).evaluate(&profile).expect("what-if evaluates");

            for scenario in result.scenarios.iter().filter(|s| s.is_applicable) {
                prop_assert!(
                    scenario.new_score >= result.current_score,
                    "{} {} lowered the score",
                    program, scenario.action_id
                );
            }
            prop_assert!(result.combined_max_score >= result.current_score);
        }
    }

    #[test]
    fn non_applicable_reasons_are_stable(profile in profile()) {
        for program in programs() {
            let engine = WhatIfEngine::new(program);
            let first = engine.evaluate(&profile).expect("what-if evaluates");
            let second = engine.evaluate(&profile).expect("what-if evaluates");

            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn recommendations_are_bounded_and_ordered(profile in profile(), target in 0u32..1200) {
        for program in programs() {
            let result = WhatIfEngine::new(program).evaluate(&profile).expect("what-if evaluates");
            let recommendations = recommend(&result, target);

            prop_assert!(recommendations.len() <= MAX_RECOMMENDATIONS);
            prop_assert!(recommendations
                .windows(2)
                .all(|pair| pair[0].efficiency >= pair[1].efficiency));
            prop_assert!(recommendations.iter().all(|action| action.points_gain > 0));
        }
    }
}
