use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

use crate::{PeriodKey, ValidationError};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date of an observation, in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationDate(Date);

impl ObservationDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn from_calendar(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let month = Month::try_from(month)
            .map_err(|_| ValidationError::MonthOutOfRange { month })?;

        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: format!("{year:04}-{:02}-{day:02}", month as u8),
            })
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Calendar quarter in `1..=4`.
    pub fn quarter(self) -> u8 {
        (self.month() - 1) / 3 + 1
    }

    /// Year-month period this date falls into.
    pub fn month_key(self) -> PeriodKey {
        PeriodKey::Month {
            year: self.year(),
            month: self.month(),
        }
    }

    /// Year-quarter period this date falls into.
    pub fn quarter_key(self) -> PeriodKey {
        PeriodKey::Quarter {
            year: self.year(),
            quarter: self.quarter(),
        }
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("calendar date must be formattable")
    }
}

impl Display for ObservationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for ObservationDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for ObservationDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
