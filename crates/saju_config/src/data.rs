//! Calendar data files referenced from `[calendar]`.
//!
//! Solar-term overrides:
//! ```toml
//! [[year]]
//! year = 2150
//! days = [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5]   # Feb..Dec, then Jan of year + 1
//! ```
//!
//! Lunar month table:
//! ```toml
//! [[month]]
//! year = 2023
//! month = 2
//! leap = true
//! start = "2023-03-22"
//! days = 29
//! ```

use std::path::Path;

use saju_time::{LunarMonthRecord, SolarTermTable, TableLunarCalendar};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// One year's twelve month-term days, in `TERM_MONTHS` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarTermOverride {
    pub year: i32,
    pub days: [u8; 12],
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SolarTermFile {
    year: Vec<SolarTermOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LunarTableFile {
    month: Vec<LunarMonthRecord>,
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))
}

/// Build a solar-term table from override TOML.
pub fn parse_solar_terms(s: &str) -> Result<SolarTermTable, ConfigError> {
    let file: SolarTermFile = toml::from_str(s)?;
    let mut table = SolarTermTable::new();
    for row in file.year {
        table.insert_override(row.year, row.days)?;
    }
    debug!(overrides = table.override_count(), "parsed solar-term overrides");
    Ok(table)
}

pub fn load_solar_terms(path: impl AsRef<Path>) -> Result<SolarTermTable, ConfigError> {
    parse_solar_terms(&read(path.as_ref())?)
}

/// Build a lunar converter from month-table TOML.
pub fn parse_lunar_table(s: &str) -> Result<TableLunarCalendar, ConfigError> {
    let file: LunarTableFile = toml::from_str(s)?;
    if file.month.is_empty() {
        return Err(ConfigError::Invalid("lunar table has no months"));
    }
    let calendar = TableLunarCalendar::new(file.month)?;
    debug!(months = calendar.len(), "parsed lunar table");
    Ok(calendar)
}

pub fn load_lunar_table(path: impl AsRef<Path>) -> Result<TableLunarCalendar, ConfigError> {
    parse_lunar_table(&read(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_time::{CalendarError, LunarCalendar, LunarDate, TermSource};

    #[test]
    fn override_applies() {
        let t = parse_solar_terms(
            "[[year]]\nyear = 2150\ndays = [4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5]\n",
        )
        .unwrap();
        let terms = t.terms_for_year(2150);
        assert_eq!(terms.source, TermSource::Override);
        assert_eq!(terms.ipchun().day, 4);
        assert!(t.is_covered(2150));
    }

    #[test]
    fn empty_override_file_is_builtin() {
        let t = parse_solar_terms("").unwrap();
        assert_eq!(t.override_count(), 0);
        assert_eq!(t.terms_for_year(2024).source, TermSource::Builtin);
    }

    #[test]
    fn override_day_validated() {
        let err = parse_solar_terms(
            "[[year]]\nyear = 2150\ndays = [30, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7, 5]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Calendar(CalendarError::InvalidSolarTermTable(_))
        ));
    }

    #[test]
    fn override_needs_twelve_days() {
        let err = parse_solar_terms("[[year]]\nyear = 2150\ndays = [4, 6]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    const LUNAR_2023: &str = r#"
        [[month]]
        year = 2023
        month = 2
        start = "2023-02-20"
        days = 30

        [[month]]
        year = 2023
        month = 2
        leap = true
        start = "2023-03-22"
        days = 29
    "#;

    #[test]
    fn lunar_table_round_trip() {
        let cal = parse_lunar_table(LUNAR_2023).unwrap();
        assert_eq!(cal.len(), 2);
        let leap_first = NaiveDate::from_ymd_opt(2023, 3, 22).unwrap();
        assert_eq!(
            cal.solar_to_lunar(leap_first),
            Some(LunarDate::new(2023, 2, 1, true))
        );
        assert_eq!(
            cal.lunar_to_solar(LunarDate::new(2023, 2, 1, false)),
            NaiveDate::from_ymd_opt(2023, 2, 20)
        );
    }

    #[test]
    fn empty_lunar_table_rejected() {
        assert_eq!(
            parse_lunar_table("").unwrap_err(),
            ConfigError::Invalid("lunar table has no months")
        );
    }

    #[test]
    fn lunar_gap_rejected() {
        let gap = LUNAR_2023.replace("2023-03-22", "2023-03-25");
        assert!(matches!(
            parse_lunar_table(&gap).unwrap_err(),
            ConfigError::Calendar(CalendarError::InvalidLunarTable(_))
        ));
    }
}
