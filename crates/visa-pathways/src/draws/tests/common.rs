use chrono::{Duration, NaiveDate};

use crate::draws::HistoricalDrawRecord;

pub(super) fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

/// Biweekly draws for `label`, most recent first, the newest on `latest`.
pub(super) fn biweekly(label: &str, latest: &str, cutoffs: &[u32]) -> Vec<HistoricalDrawRecord> {
    let latest = date(latest);
    cutoffs
        .iter()
        .enumerate()
        .map(|(index, cutoff)| {
            HistoricalDrawRecord::new(
                latest - Duration::days(14 * index as i64),
                label,
                *cutoff,
                1500 + 100 * index as u32,
            )
        })
        .collect()
}

/// The reference window `[520, 519, 522, 518, 515]`, newest on 2024-06-05.
pub(super) fn steady_window() -> Vec<HistoricalDrawRecord> {
    biweekly("Express Entry", "2024-06-05", &[520, 519, 522, 518, 515])
}

pub(super) fn rising_window() -> Vec<HistoricalDrawRecord> {
    biweekly("Express Entry", "2024-06-05", &[560, 540, 520, 500, 480])
}
