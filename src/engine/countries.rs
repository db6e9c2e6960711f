use std::collections::BTreeMap;

use super::value::{GeoBucket, View};
use crate::geo;
use crate::model::RecordSet;

/// Opens per resolved ISO3 code, sorted descending. Names the resolver
/// does not know are left out entirely; the choropleth has no bucket for
/// them.
pub(super) fn country_opens(records: &RecordSet) -> View {
    let mut counts: BTreeMap<&'static str, u64> = BTreeMap::new();
    for record in records {
        if let Some(code) = record.country_name.as_deref().and_then(geo::resolve) {
            *counts.entry(code).or_insert(0) += 1;
        }
    }

    let mut buckets: Vec<GeoBucket> = counts
        .into_iter()
        .map(|(code, value)| GeoBucket {
            id: code.to_owned(),
            name: code.to_owned(),
            value,
        })
        .collect();
    buckets.sort_by(|a, b| b.value.cmp(&a.value));

    View::Geo(buckets)
}
