//! Lunar/solar conversion seam.
//!
//! Lunar-calendar arithmetic is not computed here. Callers plug in any
//! [`LunarCalendar`]; [`TableLunarCalendar`] is a simple implementation
//! backed by explicit month records (first solar day and length of each
//! lunar month), typically loaded from a data file.
//!
//! A lunar birth that cannot be converted is an error. The digits are never
//! reinterpreted as solar.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::birth::{BirthInput, CalendarKind};
use crate::error::CalendarError;

/// A date on the lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap_month: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap_month,
        }
    }
}

/// Bidirectional lunar/solar date converter.
///
/// Both directions return `None` when the date is outside the converter's
/// range or does not exist (e.g. a leap month that year does not have).
pub trait LunarCalendar {
    fn lunar_to_solar(&self, date: LunarDate) -> Option<NaiveDate>;
    fn solar_to_lunar(&self, date: NaiveDate) -> Option<LunarDate>;
}

/// One lunar month: its label, first solar day, and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarMonthRecord {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub leap: bool,
    pub start: NaiveDate,
    pub days: u8,
}

impl LunarMonthRecord {
    fn end_exclusive(&self) -> NaiveDate {
        self.start + Duration::days(self.days as i64)
    }
}

/// Converter backed by a contiguous run of lunar month records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLunarCalendar {
    months: Vec<LunarMonthRecord>,
}

impl TableLunarCalendar {
    /// Build from month records. Records are sorted by start date and must
    /// tile the solar timeline without gaps or overlaps.
    pub fn new(mut months: Vec<LunarMonthRecord>) -> Result<Self, CalendarError> {
        months.sort_by_key(|m| m.start);
        for m in &months {
            if !(1..=12).contains(&m.month) {
                return Err(CalendarError::InvalidLunarTable(format!(
                    "lunar month {} of {} out of range",
                    m.month, m.year
                )));
            }
            if m.days != 29 && m.days != 30 {
                return Err(CalendarError::InvalidLunarTable(format!(
                    "lunar month {}-{} has {} days (expected 29 or 30)",
                    m.year, m.month, m.days
                )));
            }
        }
        for pair in months.windows(2) {
            if pair[0].end_exclusive() != pair[1].start {
                return Err(CalendarError::InvalidLunarTable(format!(
                    "lunar months {}-{} and {}-{} are not contiguous",
                    pair[0].year, pair[0].month, pair[1].year, pair[1].month
                )));
            }
        }
        Ok(Self { months })
    }

    /// Number of month records.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

impl LunarCalendar for TableLunarCalendar {
    fn lunar_to_solar(&self, date: LunarDate) -> Option<NaiveDate> {
        let record = self.months.iter().find(|m| {
            m.year == date.year && m.month == date.month && m.leap == date.leap_month
        })?;
        if date.day == 0 || date.day > record.days as u32 {
            return None;
        }
        Some(record.start + Duration::days(date.day as i64 - 1))
    }

    fn solar_to_lunar(&self, date: NaiveDate) -> Option<LunarDate> {
        let idx = self.months.partition_point(|m| m.start <= date);
        let record = self.months.get(idx.checked_sub(1)?)?;
        if date >= record.end_exclusive() {
            return None;
        }
        let day = (date - record.start).num_days() as u32 + 1;
        Some(LunarDate::new(record.year, record.month, day, record.leap))
    }
}

/// Resolve a birth input to a solar local date/time.
///
/// Solar input is validated and returned as-is. Lunar input is converted via
/// `calendar`; a missing converter or a failed conversion is an error.
pub fn resolve_birth(
    input: &BirthInput,
    calendar: Option<&dyn LunarCalendar>,
) -> Result<NaiveDateTime, CalendarError> {
    let leap_month = match input.calendar {
        CalendarKind::Solar => return input.to_solar_datetime(),
        CalendarKind::Lunar { leap_month } => leap_month,
    };
    let time = input.time()?;
    let calendar = calendar.ok_or(CalendarError::NoLunarCalendar)?;
    let lunar = LunarDate::new(input.year, input.month, input.day, leap_month);
    match calendar.lunar_to_solar(lunar) {
        Some(solar) => Ok(solar.and_time(time)),
        None => {
            warn!(%input, "lunar to solar conversion failed");
            Err(CalendarError::LunarConversion {
                year: input.year,
                month: input.month,
                day: input.day,
                leap_month,
            })
        }
    }
}
