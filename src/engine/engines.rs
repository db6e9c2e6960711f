use std::collections::BTreeMap;

use super::value::{ranked, View};
use crate::model::RecordSet;

/// Raw rendering engine strings counted verbatim, sorted descending.
/// Records without one fall into "Other".
pub(super) fn rendering_engines(records: &RecordSet) -> View {
    let mut counts = BTreeMap::new();
    for record in records {
        let engine = record.rendering_engine.as_deref().unwrap_or("Other");
        *counts.entry(engine.to_owned()).or_insert(0u64) += 1;
    }
    View::Breakdown(ranked(counts))
}
