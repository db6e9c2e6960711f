use super::value::{FalloffPoint, View};
use crate::model::RecordSet;

// Two-second steps up to the charted maximum.
const THRESHOLDS: [u32; 11] = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20];

/// Share of the audience still reading at each threshold. A missing
/// duration reads as zero seconds. An empty record set pins every
/// percentage to 0 instead of dividing by zero.
pub(super) fn read_time_falloff(records: &RecordSet) -> View {
    let total = records.len();

    View::Falloff(
        THRESHOLDS
            .iter()
            .map(|&threshold| {
                let retained = records
                    .iter()
                    .filter(|r| r.seconds.unwrap_or(0.0) >= threshold as f64)
                    .count();
                FalloffPoint {
                    time: format!("{}s", threshold),
                    percentage: if total == 0 {
                        0.0
                    } else {
                        retained as f64 * 100.0 / total as f64
                    },
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn with_seconds(seconds: Option<f64>) -> Record {
        Record {
            seconds,
            ..Record::default()
        }
    }

    #[test]
    fn test_empty_set_yields_zero_percentages() {
        match read_time_falloff(&vec![]) {
            View::Falloff(points) => {
                assert_eq!(11, points.len());
                assert_eq!("0s", points[0].time);
                assert_eq!("20s", points[10].time);
                for point in &points {
                    assert_eq!(0.0, point.percentage, "at {}", point.time);
                }
            }
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn test_missing_duration_reads_as_zero() {
        let records = vec![with_seconds(None), with_seconds(Some(20.0))];

        match read_time_falloff(&records) {
            View::Falloff(points) => {
                // Everyone clears the zero threshold...
                assert_eq!(100.0, points[0].percentage);
                // ...but only the 20s read clears the rest.
                assert_eq!(50.0, points[1].percentage);
                assert_eq!(50.0, points[10].percentage);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let records = vec![with_seconds(Some(4.0)), with_seconds(Some(3.9))];

        match read_time_falloff(&records) {
            View::Falloff(points) => {
                assert_eq!("4s", points[2].time);
                assert_eq!(50.0, points[2].percentage);
            }
            v => panic!("unexpected view {:?}", v),
        }
    }
}
