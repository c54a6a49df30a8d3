use std::fmt;

use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

/// Which calendar the date key is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateZone {
    /// The host's local time zone.
    #[default]
    Local,
    Named(Tz),
}

impl DateZone {
    /// Calendar date of `now` as seen from this zone.
    pub fn date_of(&self, now: DateTime<Utc>) -> NaiveDate {
        match self {
            DateZone::Local => now.with_timezone(&Local).date_naive(),
            DateZone::Named(tz) => now.with_timezone(tz).date_naive(),
        }
    }
}

/// An 8-digit `YYYYMMDD` key identifying the day whose matches are queried.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date.format("%Y%m%d").to_string())
    }

    pub fn for_instant(now: DateTime<Utc>, zone: DateZone) -> Self {
        Self::from_date(zone.date_of(now))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
