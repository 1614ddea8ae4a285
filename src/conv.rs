// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Conversions from raw metadata strings.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Format of date & time metadata, i.e. `yyyy-MM-dd'T'HH:mm:ssZ`.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})(Z|[+-]\d{2}:?\d{2})$").unwrap()
});

/// Parses a date & time string in `DATE_FORMAT`. The offset may be written as
/// `+hhmm`, `+hh:mm` or `Z`.
///
/// # Errors
///
/// If `date` is not in `DATE_FORMAT`, or is not a real date & time.
pub fn parse_date(date: &str) -> Result<DateTime<Utc>, String> {
  let caps = DATE_RE
    .captures(date)
    .ok_or(format!("Date string `{date}` did not match regex."))?;

  let offset = match &caps[2] {
    "Z" => "+0000".to_string(),
    offset => offset.replace(':', ""),
  };

  DateTime::parse_from_str(&format!("{}{offset}", &caps[1]), DATE_FORMAT)
    .map(|d| d.with_timezone(&Utc))
    .map_err(|e| format!("Unable to parse date `{date}` ({e})."))
}
