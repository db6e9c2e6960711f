use super::timestamp::Timestamp;

/// The immutable, ordered collection of records parsed from one export.
/// Order is the original row order; views sort on their own when they care.
pub type RecordSet = Vec<Record>;

/// One tracked email open event.
///
/// Every field is optional: an empty cell, an unparseable date, or a
/// non-numeric duration all degrade to `None` at ingestion time and never
/// abort parsing. The mapping from export header names to these fields
/// lives in `ingest::Column`.
#[derive(Debug, Default, PartialEq)]
pub struct Record {
    pub opened: Option<Timestamp>,
    pub customer: Option<String>,
    pub seconds: Option<f64>,
    pub email_client: Option<String>,
    pub environment: Option<String>,
    pub platform: Option<String>,
    pub browser: Option<String>,
    pub rendering_engine: Option<String>,
    pub country_name: Option<String>,
}
