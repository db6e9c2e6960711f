use std::collections::BTreeMap;

use super::value::{ranked, View};
use crate::model::{Record, RecordSet};

fn client(record: &Record) -> &str {
    record.email_client.as_deref().unwrap_or("")
}

fn environment(record: &Record) -> &str {
    record.environment.as_deref().unwrap_or("")
}

fn platform(record: &Record) -> &str {
    record.platform.as_deref().unwrap_or("")
}

// Evaluated top to bottom; the first matching rule wins.
const RULES: [(&str, fn(&Record) -> bool); 4] = [
    ("Image Cache", |r| {
        client(r).contains("Apple Mail Privacy Protection")
            || client(r).contains("Gmail Image Cache")
    }),
    ("Webmail", |r| {
        environment(r) == "Web Client" || client(r).contains("Gmail") || client(r).contains("Yahoo")
    }),
    ("Mobile", |r| {
        environment(r) == "Mobile" || platform(r).contains("iOS") || platform(r).contains("Android")
    }),
    ("Desktop", |r| {
        environment(r) == "Desktop"
            || platform(r).contains("Macintosh")
            || platform(r).contains("Windows")
    }),
];

fn classify(record: &Record) -> &'static str {
    for (bucket, applies) in &RULES {
        if applies(record) {
            return bucket;
        }
    }
    "Unknown"
}

/// Where the open most likely happened, counted per environment bucket and
/// sorted descending.
pub(super) fn reading_environments(records: &RecordSet) -> View {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(classify(record).to_owned()).or_insert(0u64) += 1;
    }
    View::Breakdown(ranked(counts))
}
