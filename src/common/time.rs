use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::model::Timestamp;

/// Grammar for the export's `Opened` column: `d/m/yyyy H:MM`, day before
/// month, with an optional trailing seconds component that is accepted and
/// ignored. Components are interpreted as UTC. Out-of-range components
/// (month 13, hour 25, ...) make the whole value unparseable rather than
/// rolling over into the next unit.
pub fn parse_datetime(value: &str) -> Option<Timestamp> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4}) (\d{1,2}):(\d{2})(?::\d{2})?$").unwrap();
    }

    let caps = RE.captures(value)?;

    let day = caps[1].parse::<u32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let year = caps[3].parse::<i32>().ok()?;
    let hour = caps[4].parse::<u32>().ok()?;
    let minute = caps[5].parse::<u32>().ok()?;

    let opened = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    Some(opened.timestamp_millis())
}
