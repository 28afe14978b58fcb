use chrono::{Duration, NaiveDate};
use proptest::collection::vec;
use proptest::prelude::*;
use visa_pathways::draws::{analyze, compare, predict, DrawSettings, HistoricalDrawRecord};

fn latest() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 5).expect("valid date")
}

fn biweekly(cutoffs: &[u32]) -> Vec<HistoricalDrawRecord> {
    cutoffs
        .iter()
        .enumerate()
        .map(|(index, cutoff)| {
            HistoricalDrawRecord::new(
                latest() - Duration::days(14 * index as i64),
                "Express Entry",
                *cutoff,
                2000,
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn trend_strength_stays_bounded(cutoffs in vec(1u32..1200, 0..25)) {
        let analysis = analyze(&biweekly(&cutoffs), None, &DrawSettings::default());

        prop_assert!((-100.0..=100.0).contains(&analysis.trend_strength));
        prop_assert!(analysis.record_count <= DrawSettings::default().window);
    }

    #[test]
    fn prediction_range_stays_inside_band(
        cutoffs in vec(300u32..900, 0..25),
        days_after in 0i64..40,
    ) {
        let settings = DrawSettings::default();
        let today = latest() + Duration::days(days_after);

        let prediction = predict(&biweekly(&cutoffs), None, today, &settings);

        prop_assert!(settings.band_min <= prediction.range_min);
        prop_assert!(prediction.range_min <= prediction.range_max);
        prop_assert!(prediction.range_max <= settings.band_max);
        prop_assert!(prediction.predicted_date >= today);
    }

    /// Range ends are clamped to the band independently of the point estimate, so
    /// histories above the band predict a cutoff outside the reported range.
    #[test]
    fn high_cutoffs_predict_outside_their_range(cutoffs in vec(650u32..900, 2..12)) {
        let settings = DrawSettings::default();

        let prediction = predict(&biweekly(&cutoffs), None, latest(), &settings);

        prop_assert_eq!(prediction.range_max, settings.band_max);
        prop_assert!(prediction.predicted_cutoff > prediction.range_max);
    }

    #[test]
    fn percentile_matches_qualifying_share(
        cutoffs in vec(300u32..900, 0..25),
        user_score in 0u32..1200,
    ) {
        let comparison = compare(user_score, &biweekly(&cutoffs), None);

        prop_assert!((0.0..=100.0).contains(&comparison.percentile));
        prop_assert_eq!(comparison.total_count, cutoffs.len());
        prop_assert_eq!(comparison.would_qualify_now, comparison.qualifying_count > 0);
        prop_assert!(comparison
            .matching_records
            .iter()
            .all(|matched| matched.gap == user_score as i64 - matched.record.cutoff_score as i64));
    }
}
