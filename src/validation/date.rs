// ABOUTME: Date parameter spec accepting epoch milliseconds or ISO calendar dates
// ABOUTME: ISO dates resolve to local start-of-day, expressed in UTC
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use super::{non_blank, ParamSpec, Resolution};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Spec for a single date argument
#[derive(Debug, Clone)]
pub struct DateSpec {
    name: String,
    raw: Option<String>,
}

impl DateSpec {
    /// Describe argument `name` with raw input `raw`
    #[must_use]
    pub fn new(name: &str, raw: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            raw: raw.map(str::to_owned),
        }
    }
}

/// Epoch milliseconds first, then `YYYY-MM-DD` at local midnight
fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(millis) = value.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis);
    }

    let date = NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()?;
    Local
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

impl ParamSpec for DateSpec {
    type Value = DateTime<Utc>;

    fn resolve(&self) -> Resolution<DateTime<Utc>> {
        let Some(value) = non_blank(self.raw.as_deref()) else {
            return Resolution::empty();
        };

        parse_date(value).map_or_else(
            || {
                Resolution::failed(format!(
                    "Invalid {}: '{value}'. Expected epoch milliseconds or ISO date format (YYYY-MM-DD)",
                    self.name
                ))
            },
            Resolution::of,
        )
    }
}
