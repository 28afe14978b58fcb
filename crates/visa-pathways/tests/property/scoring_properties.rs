mod strategies;

use proptest::prelude::*;
use strategies::{profile, programs};
use visa_pathways::scoring::{scorer_for, validate_profile};

proptest! {
    #[test]
    fn every_category_stays_within_its_cap(profile in profile()) {
        for program in programs() {
            let scorer = scorer_for(program);
            let result = scorer.score(&profile).expect("valid profile scores");

            prop_assert_eq!(result.breakdown.len(), scorer.categories().len());
            for (category, cap) in scorer.categories() {
                let points = result.category(*category);
                prop_assert!(
                    points <= *cap,
                    "{} {} scored {} above cap {}",
                    program, category.label(), points, cap
                );
            }
            prop_assert_eq!(result.total_score, result.breakdown.values().sum::<u32>());
            prop_assert!(result.total_score <= result.max_score);
        }
    }

    #[test]
    fn generated_profiles_pass_validation(profile in profile()) {
        prop_assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn scoring_is_deterministic(profile in profile()) {
        for program in programs() {
            let scorer = scorer_for(program);
            prop_assert_eq!(
                scorer.score(&profile).expect("valid profile scores"),
                scorer.score(&profile).expect("valid profile scores")
            );
        }
    }

    #[test]
    fn out_of_range_language_is_rejected(profile in profile(), level in 13u8..=u8::MAX) {
        let mut profile = profile;
        profile.first_language.scores.listening = level;

        for program in programs() {
            let error = scorer_for(program).score(&profile).expect_err("profile rejected");
            prop_assert!(error.is_validation());
        }
    }
}
