//! Error types for calendar input and solar-term lookup.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date validation, solar-term tables, or lunar conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The year/month/day triple is not a valid Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute outside 0..24 / 0..60.
    InvalidTime { hour: u32, minute: u32 },
    /// A solar-term table row failed validation.
    InvalidSolarTermTable(String),
    /// A lunar month table failed validation.
    InvalidLunarTable(String),
    /// The lunar converter rejected or could not map a lunar date.
    LunarConversion {
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    },
    /// The lunar converter could not map a solar date back to the lunar calendar.
    SolarConversion { year: i32, month: u32, day: u32 },
    /// A birth was declared lunar but no converter was supplied.
    NoLunarCalendar,
    /// Text input could not be parsed.
    Parse(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time of day: {hour:02}:{minute:02}")
            }
            Self::InvalidSolarTermTable(msg) => write!(f, "invalid solar-term table: {msg}"),
            Self::InvalidLunarTable(msg) => write!(f, "invalid lunar month table: {msg}"),
            Self::LunarConversion {
                year,
                month,
                day,
                leap_month,
            } => {
                let leap = if *leap_month { " (leap month)" } else { "" };
                write!(
                    f,
                    "lunar date {year:04}-{month:02}-{day:02}{leap} could not be converted to solar"
                )
            }
            Self::SolarConversion { year, month, day } => write!(
                f,
                "solar date {year:04}-{month:02}-{day:02} could not be converted to lunar"
            ),
            Self::NoLunarCalendar => write!(f, "lunar birth date given but no lunar calendar loaded"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for CalendarError {}
