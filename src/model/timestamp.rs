use chrono::{NaiveDate, NaiveDateTime};

// Unix timestamp in milliseconds.
pub type Timestamp = i64;

pub trait TimestampTrait {
    fn utc_date(&self) -> Option<NaiveDate>;
}

impl TimestampTrait for Timestamp {
    /// Calendar date portion of the timestamp, in UTC.
    #[inline]
    fn utc_date(&self) -> Option<NaiveDate> {
        NaiveDateTime::from_timestamp_opt(self.div_euclid(1000), 0).map(|dt| dt.date())
    }
}
