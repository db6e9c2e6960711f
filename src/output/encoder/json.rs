use serde::Serialize;

use super::encoder::Encoder;
use crate::engine::{View, ViewKind};
use crate::error::Result;

// One object per view, e.g.
// {
//   "view": "daily",
//   "result": [
//     {"date": "2023-02-01", "opens": 2},
//     {"date": "2023-02-02", "opens": 1}
//   ]
// }
#[derive(Serialize)]
struct Envelope<'a, T> {
    view: &'static str,
    result: &'a [T],
}

pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn envelope<T: Serialize>(&self, kind: ViewKind, result: &[T]) -> Result<Vec<u8>> {
        serde_json::to_vec(&Envelope {
            view: kind.token(),
            result,
        })
        .map_err(|e| ("JSON serialization failed", e).into())
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, kind: ViewKind, view: &View) -> Result<Vec<u8>> {
        match view {
            View::Summary(metrics) => self.envelope(kind, metrics),
            View::Breakdown(buckets) => self.envelope(kind, buckets),
            View::Falloff(points) => self.envelope(kind, points),
            View::Daily(points) => self.envelope(kind, points),
            View::Geo(buckets) => self.envelope(kind, buckets),
        }
    }
}
