use super::encoder::Encoder;
use crate::engine::{MetricValue, View, ViewKind};
use crate::error::Result;

/// Titled, aligned tables for terminal reading.
pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

fn row(label: &str, value: &str) -> String {
    format!("  {:<32}{}", label, value)
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, kind: ViewKind, view: &View) -> Result<Vec<u8>> {
        let mut lines = vec![kind.title().to_owned()];

        match view {
            View::Summary(metrics) => {
                for metric in metrics {
                    let value = match metric.value {
                        MetricValue::Count(v) => v.to_string(),
                        MetricValue::Seconds(v) => v.to_string(),
                    };
                    lines.push(row(metric.name, &value));
                }
            }
            View::Breakdown(buckets) => {
                for bucket in buckets {
                    lines.push(row(&bucket.name, &bucket.value.to_string()));
                }
            }
            View::Falloff(points) => {
                for point in points {
                    lines.push(row(&point.time, &format!("{:.1}%", point.percentage)));
                }
            }
            View::Daily(points) => {
                for point in points {
                    lines.push(row(&point.date, &point.opens.to_string()));
                }
            }
            View::Geo(buckets) => {
                for bucket in buckets {
                    lines.push(row(&bucket.id, &bucket.value.to_string()));
                }
            }
        }

        lines.push(String::new());
        Ok(String::into_bytes(lines.join("\n")))
    }
}
