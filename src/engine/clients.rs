use std::collections::BTreeMap;

use super::value::{ranked, View};
use crate::model::RecordSet;

const TOP_CLIENTS: usize = 10;

// Family needles, tested in priority order against the raw client string.
const CLIENT_FAMILIES: [(&str, &str); 6] = [
    ("iOS Mail", "iOS Mail"),
    ("Apple Mail", "Apple Mail"),
    ("Gmail", "Gmail"),
    ("Outlook", "Outlook"),
    ("Yahoo", "Yahoo"),
    ("Android", "Android Mail"),
];

fn family(client: Option<&str>) -> &str {
    let raw = match client {
        None => return "Unknown",
        Some(raw) => raw,
    };

    for (needle, family) in &CLIENT_FAMILIES {
        if raw.contains(needle) {
            return family;
        }
    }

    // The export spells this category with an occasional trailing space.
    if raw == "Other" || raw == "Other " {
        return "Other";
    }

    raw
}

/// Clients normalized to product families, top ten by count. A client
/// outside every family keeps its raw name.
pub(super) fn email_clients(records: &RecordSet) -> View {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts
            .entry(family(record.email_client.as_deref()).to_owned())
            .or_insert(0u64) += 1;
    }

    let mut buckets = ranked(counts);
    buckets.truncate(TOP_CLIENTS);
    View::Breakdown(buckets)
}
