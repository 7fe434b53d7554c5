//! Civil birth input as entered by a user.
//!
//! A birth is a local wall-clock date and time (offset-naive, UTC+9
//! convention) declared either on the solar (Gregorian) calendar or on the
//! lunar calendar. Lunar input must go through a [`crate::LunarCalendar`]
//! before it can feed the chart engine.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::CalendarError;

/// Declared gender. Does not influence any stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lowercase English tag, as used in fortune seeds.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Korean label.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남자" => Ok(Self::Male),
            "female" | "f" | "여" | "여자" => Ok(Self::Female),
            other => Err(CalendarError::Parse(format!("unknown gender: {other:?}"))),
        }
    }
}

/// Which calendar the birth date digits are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum CalendarKind {
    Solar,
    Lunar { leap_month: bool },
}

/// Birth date and time as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub calendar: CalendarKind,
}

impl BirthInput {
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarKind::Solar,
        }
    }

    pub fn lunar(year: i32, month: u32, day: u32, hour: u32, minute: u32, leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarKind::Lunar { leap_month },
        }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` strings.
    pub fn parse(date: &str, time: &str, calendar: CalendarKind) -> Result<Self, CalendarError> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| CalendarError::Parse(format!("date {date:?}: {e}")))?;
        let t = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|e| CalendarError::Parse(format!("time {time:?}: {e}")))?;
        Ok(Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
            hour: t.hour(),
            minute: t.minute(),
            calendar,
        })
    }

    /// Validated wall-clock time of day.
    pub fn time(&self) -> Result<NaiveTime, CalendarError> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).ok_or(CalendarError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
        })
    }

    /// Solar date/time. Only valid for [`CalendarKind::Solar`] input;
    /// lunar input goes through [`crate::resolve_birth`].
    pub fn to_solar_datetime(&self) -> Result<NaiveDateTime, CalendarError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            CalendarError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )?;
        Ok(date.and_time(self.time()?))
    }
}

impl Display for BirthInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        match self.calendar {
            CalendarKind::Solar => Ok(()),
            CalendarKind::Lunar { leap_month: false } => f.write_str(" (lunar)"),
            CalendarKind::Lunar { leap_month: true } => f.write_str(" (lunar, leap)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parses_aliases() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" F ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("여".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn parse_date_and_time() {
        let b = BirthInput::parse("1990-05-15", "08:30", CalendarKind::Solar).unwrap();
        assert_eq!(b, BirthInput::solar(1990, 5, 15, 8, 30));
        assert_eq!(b.to_string(), "1990-05-15T08:30");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(BirthInput::parse("1990-13-01", "08:30", CalendarKind::Solar).is_err());
        assert!(BirthInput::parse("1990-05-15", "25:00", CalendarKind::Solar).is_err());
    }

    #[test]
    fn invalid_solar_date() {
        let err = BirthInput::solar(2023, 2, 29, 0, 0).to_solar_datetime().unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn invalid_time() {
        let err = BirthInput::solar(2024, 2, 29, 24, 0).to_solar_datetime().unwrap_err();
        assert_eq!(err, CalendarError::InvalidTime { hour: 24, minute: 0 });
    }

    #[test]
    fn lunar_display_marks_leap() {
        let b = BirthInput::lunar(2023, 2, 10, 12, 0, true);
        assert_eq!(b.to_string(), "2023-02-10T12:00 (lunar, leap)");
    }
}
