use std::collections::BTreeMap;

use serde::Serialize;

/// One computed view, ready for a renderer. Views are value objects:
/// recomputed from scratch on every call, never cached, never touching the
/// records they were derived from.
#[derive(Debug, PartialEq)]
pub enum View {
    Summary(Vec<Metric>),
    Breakdown(Vec<Bucket>),
    Falloff(Vec<FalloffPoint>),
    Daily(Vec<DailyPoint>),
    Geo(Vec<GeoBucket>),
}

/// Counts stay integers on the wire; durations may be fractional.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Seconds(f64),
}

/// A named headline figure.
#[derive(Debug, PartialEq, Serialize)]
pub struct Metric {
    pub name: &'static str,
    pub value: MetricValue,
}

/// A labelled count for bar and pie renderers.
#[derive(Debug, PartialEq, Serialize)]
pub struct Bucket {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FalloffPoint {
    pub time: String,
    pub percentage: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub opens: u64,
}

/// A count keyed for the choropleth renderer. `id` and `name` both carry
/// the ISO3 code; the map keys on `id` and never needs a display name.
#[derive(Debug, PartialEq, Serialize)]
pub struct GeoBucket {
    pub id: String,
    pub name: String,
    pub value: u64,
}

/// Turns a fold accumulator into buckets sorted by count, descending.
/// The accumulator iterates in name order and the sort is stable, so ties
/// come out alphabetical and the result is deterministic.
pub(super) fn ranked(counts: BTreeMap<String, u64>) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = counts
        .into_iter()
        .map(|(name, value)| Bucket { name, value })
        .collect();
    buckets.sort_by(|a, b| b.value.cmp(&a.value));
    buckets
}
