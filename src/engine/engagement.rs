use super::value::{Bucket, View};
use crate::model::{Record, RecordSet};

// Bucket order is fixed for the pie renderer.
const BUCKETS: [&str; 4] = ["Read", "Skim", "Delete", "Unknown"];

fn bucket(record: &Record) -> &'static str {
    match record.seconds {
        None => "Unknown",
        Some(s) if s < 2.0 => "Delete",
        Some(s) if s < 8.0 => "Skim",
        Some(_) => "Read",
    }
}

/// Every record lands in exactly one engagement bucket; empty buckets are
/// omitted from the output.
pub(super) fn engagement_distribution(records: &RecordSet) -> View {
    View::Breakdown(
        BUCKETS
            .iter()
            .map(|&name| Bucket {
                name: name.to_owned(),
                value: records.iter().filter(|r| bucket(r) == name).count() as u64,
            })
            .filter(|b| b.value > 0)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_seconds(seconds: Option<f64>) -> Record {
        Record {
            seconds,
            ..Record::default()
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!("Unknown", bucket(&with_seconds(None)));
        assert_eq!("Delete", bucket(&with_seconds(Some(0.0))));
        assert_eq!("Delete", bucket(&with_seconds(Some(1.9))));
        assert_eq!("Skim", bucket(&with_seconds(Some(2.0))));
        assert_eq!("Skim", bucket(&with_seconds(Some(7.9))));
        assert_eq!("Read", bucket(&with_seconds(Some(8.0))));
        assert_eq!("Read", bucket(&with_seconds(Some(120.0))));
    }

    #[test]
    fn test_buckets_partition_the_record_set() {
        let records: Vec<Record> = [None, Some(0.5), Some(3.0), Some(9.0), Some(15.0), None]
            .iter()
            .map(|s| with_seconds(*s))
            .collect();

        match engagement_distribution(&records) {
            View::Breakdown(buckets) => {
                let total: u64 = buckets.iter().map(|b| b.value).sum();
                assert_eq!(records.len() as u64, total);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn test_zero_buckets_are_dropped_and_order_is_fixed() {
        let records = vec![with_seconds(Some(9.0)), with_seconds(Some(1.0)), with_seconds(None)];

        match engagement_distribution(&records) {
            View::Breakdown(buckets) => {
                let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
                assert_eq!(vec!["Read", "Delete", "Unknown"], names);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }
}
