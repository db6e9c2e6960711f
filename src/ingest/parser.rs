use log::{debug, warn};

use super::columns::Column;
use crate::common::parser::parse_number;
use crate::common::time::parse_datetime;
use crate::error::{Error, Result};
use crate::model::{Record, RecordSet};

/// Parses a whole comma-delimited export into a `RecordSet`.
///
/// The first non-blank line is the header; each header name is trimmed and
/// mapped to a `Column` once. Data rows whose field count differs from the
/// header's are dropped silently (logged, never an error). Within a kept
/// row, an empty field is `None`, and a field the `Opened`/`Seconds`
/// grammars reject degrades to `None` too.
///
/// The only failures that reach the caller are an input with no content at
/// all and an input where no data row matched the header width.
///
/// No quoted-field dialect: a literal comma inside a value shifts the row's
/// width and gets the row dropped. That is an accepted input constraint.
pub fn parse(text: &str) -> Result<RecordSet> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(header) => header,
        None => return Err(Error::empty_input()),
    };

    let columns: Vec<Column> = header
        .split(',')
        .map(|name| Column::from_header(name.trim()))
        .collect();

    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != columns.len() {
            debug!(
                "dropping row: {} fields against {} header columns",
                fields.len(),
                columns.len(),
            );
            continue;
        }
        records.push(build_record(&columns, &fields));
    }

    if records.is_empty() {
        return Err(Error::no_valid_rows());
    }

    Ok(records)
}

fn build_record(columns: &[Column], fields: &[&str]) -> Record {
    let mut record = Record::default();

    for (column, raw) in columns.iter().zip(fields.iter()) {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }

        match column {
            Column::Opened => {
                record.opened = parse_datetime(value);
                if record.opened.is_none() {
                    warn!("unparseable open time {:?}", value);
                }
            }
            Column::Seconds => {
                record.seconds = parse_number(value);
                if record.seconds.is_none() {
                    warn!("unparseable read time {:?}", value);
                }
            }
            Column::Customer => record.customer = Some(value.to_owned()),
            Column::EmailClient => record.email_client = Some(value.to_owned()),
            Column::Environment => record.environment = Some(value.to_owned()),
            Column::Platform => record.platform = Some(value.to_owned()),
            Column::Browser => record.browser = Some(value.to_owned()),
            Column::RenderingEngine => record.rendering_engine = Some(value.to_owned()),
            Column::CountryName => record.country_name = Some(value.to_owned()),
            Column::Ignored => (),
        }
    }

    record
}
