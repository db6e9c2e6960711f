use std::collections::BTreeMap;

use super::value::{DailyPoint, View};
use crate::model::{RecordSet, TimestampTrait};

/// Opens per calendar date (UTC), ascending. Records that were never
/// opened carry no timestamp and stay out of the series.
pub(super) fn daily_activity(records: &RecordSet) -> View {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(date) = record.opened.and_then(|ts| ts.utc_date()) {
            *counts.entry(date).or_insert(0u64) += 1;
        }
    }

    View::Daily(
        counts
            .into_iter()
            .map(|(date, opens)| DailyPoint {
                date: date.format("%Y-%m-%d").to_string(),
                opens,
            })
            .collect(),
    )
}
