use std::collections::BTreeMap;

use super::value::{ranked, View};
use crate::model::{Record, RecordSet};

fn client(record: &Record) -> &str {
    record.email_client.as_deref().unwrap_or("")
}

fn browser(record: &Record) -> &str {
    record.browser.as_deref().unwrap_or("")
}

// Evaluated top to bottom; the image-cache client checks outrank the
// exact browser matches.
const RULES: [(&str, fn(&Record) -> bool); 5] = [
    ("Via Gmail's Image Cache", |r| client(r).contains("Gmail")),
    ("Via Yahoo/AOL's Image Cache", |r| {
        client(r).contains("Yahoo") || client(r).contains("AOL")
    }),
    ("Using Chrome", |r| browser(r) == "Chrome"),
    ("Using Firefox", |r| browser(r) == "Firefox"),
    ("Using Safari", |r| browser(r) == "Safari"),
];

fn classify(record: &Record) -> &'static str {
    for (bucket, applies) in &RULES {
        if applies(record) {
            return bucket;
        }
    }
    "Other"
}

/// What fetched the tracking pixel, counted per bucket and sorted
/// descending.
pub(super) fn browser_usage(records: &RecordSet) -> View {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(classify(record).to_owned()).or_insert(0u64) += 1;
    }
    View::Breakdown(ranked(counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(client: &str, browser: &str) -> Record {
        let field = |v: &str| {
            if v.is_empty() {
                None
            } else {
                Some(v.to_owned())
            }
        };
        Record {
            email_client: field(client),
            browser: field(browser),
            ..Record::default()
        }
    }

    #[test]
    fn test_classification_rules() {
        let tests = [
            (record("Gmail IMAP", ""), "Via Gmail's Image Cache"),
            (record("Yahoo! Mail", ""), "Via Yahoo/AOL's Image Cache"),
            (record("AOL Webmail", ""), "Via Yahoo/AOL's Image Cache"),
            (record("", "Chrome"), "Using Chrome"),
            (record("", "Firefox"), "Using Firefox"),
            (record("", "Safari"), "Using Safari"),
            // Exact browser match only; UA-style strings stay unclassified.
            (record("", "Chrome Mobile"), "Other"),
            (record("", "Opera"), "Other"),
            (record("", ""), "Other"),
        ];

        for (record, expected) in &tests {
            assert_eq!(*expected, classify(record), "while classifying {:?}", record);
        }
    }

    #[test]
    fn test_cache_rules_take_priority_over_browser() {
        let r = record("Gmail Image Cache", "Chrome");
        assert_eq!("Via Gmail's Image Cache", classify(&r));
    }

    #[test]
    fn test_counts_sorted_descending() {
        let records = vec![
            record("", "Safari"),
            record("", "Safari"),
            record("Gmail", ""),
            record("", ""),
        ];

        match browser_usage(&records) {
            View::Breakdown(buckets) => {
                assert_eq!("Using Safari", buckets[0].name);
                assert_eq!(2, buckets[0].value);
                let total: u64 = buckets.iter().map(|b| b.value).sum();
                assert_eq!(4, total);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }
}
