use std::collections::HashSet;

use super::value::{Metric, MetricValue, View};
use crate::model::{Record, RecordSet};

/// The nine headline figures of the dashboard, in fixed order: total and
/// unique opens, total read time, then distinct-value counts over the six
/// categorical fields.
pub(super) fn activity_summary(records: &RecordSet) -> View {
    let total_opens = records.iter().filter(|r| r.opened.is_some()).count();

    // A record without a customer still counts as one distinct opener.
    let unique_opens = records
        .iter()
        .filter(|r| r.opened.is_some())
        .map(|r| r.customer.as_deref())
        .collect::<HashSet<_>>()
        .len();

    // Unparseable durations were already nulled at ingestion; they simply
    // contribute nothing here.
    let total_read_time: f64 = records.iter().filter_map(|r| r.seconds).sum();

    View::Summary(vec![
        Metric {
            name: "Total Opens",
            value: MetricValue::Count(total_opens),
        },
        Metric {
            name: "Unique Opens",
            value: MetricValue::Count(unique_opens),
        },
        Metric {
            name: "Total Read Time (seconds)",
            value: MetricValue::Seconds(total_read_time),
        },
        Metric {
            name: "Unique Email Clients",
            value: MetricValue::Count(distinct(records, |r| &r.email_client)),
        },
        Metric {
            name: "Unique Environments",
            value: MetricValue::Count(distinct(records, |r| &r.environment)),
        },
        Metric {
            name: "Unique Platforms",
            value: MetricValue::Count(distinct(records, |r| &r.platform)),
        },
        Metric {
            name: "Unique Browsers",
            value: MetricValue::Count(distinct(records, |r| &r.browser)),
        },
        Metric {
            name: "Unique Rendering Engines",
            value: MetricValue::Count(distinct(records, |r| &r.rendering_engine)),
        },
        Metric {
            name: "Unique Countries",
            value: MetricValue::Count(distinct(records, |r| &r.country_name)),
        },
    ])
}

fn distinct<F>(records: &RecordSet, field: F) -> usize
where
    F: Fn(&Record) -> &Option<String>,
{
    records
        .iter()
        .filter_map(|r| field(r).as_deref())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn opened(customer: Option<&str>, seconds: Option<f64>) -> Record {
        Record {
            opened: Some(1675245600000),
            customer: customer.map(str::to_owned),
            seconds,
            ..Record::default()
        }
    }

    #[test]
    fn test_total_opens_counts_opened_records_only() {
        let records = vec![
            opened(Some("a"), None),
            opened(Some("b"), None),
            Record::default(),
        ];

        match activity_summary(&records) {
            View::Summary(metrics) => {
                assert_eq!("Total Opens", metrics[0].name);
                assert_eq!(MetricValue::Count(2), metrics[0].value);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn test_unique_opens_dedupes_customers() {
        let records = vec![
            opened(Some("a"), None),
            opened(Some("a"), None),
            opened(Some("b"), None),
            opened(None, None),
        ];

        match activity_summary(&records) {
            View::Summary(metrics) => {
                assert_eq!("Unique Opens", metrics[1].name);
                // a, b, and the anonymous opener.
                assert_eq!(MetricValue::Count(3), metrics[1].value);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn test_total_read_time_sums_known_durations() {
        let records = vec![
            opened(Some("a"), Some(10.0)),
            opened(Some("b"), Some(2.5)),
            opened(Some("c"), None),
            Record::default(),
        ];

        match activity_summary(&records) {
            View::Summary(metrics) => {
                assert_eq!("Total Read Time (seconds)", metrics[2].name);
                assert_eq!(MetricValue::Seconds(12.5), metrics[2].value);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn test_distinct_counts_skip_missing_values() {
        let records = vec![
            Record {
                email_client: Some("Gmail".into()),
                country_name: Some("France".into()),
                ..Record::default()
            },
            Record {
                email_client: Some("Gmail".into()),
                ..Record::default()
            },
            Record::default(),
        ];

        match activity_summary(&records) {
            View::Summary(metrics) => {
                assert_eq!("Unique Email Clients", metrics[3].name);
                assert_eq!(MetricValue::Count(1), metrics[3].value);
                assert_eq!("Unique Countries", metrics[8].name);
                assert_eq!(MetricValue::Count(1), metrics[8].value);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn test_empty_record_set() {
        match activity_summary(&vec![]) {
            View::Summary(metrics) => {
                assert_eq!(9, metrics.len());
                assert_eq!(MetricValue::Count(0), metrics[0].value);
                assert_eq!(MetricValue::Seconds(0.0), metrics[2].value);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }
}
