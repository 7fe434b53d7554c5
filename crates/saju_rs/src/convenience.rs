//! Free functions over civil birth input and the [`Saju`] calendar context.
//!
//! ```rust
//! use saju_rs::{BirthInput, Gender, Saju};
//!
//! let input = BirthInput::solar(2000, 1, 1, 0, 0);
//! let chart = Saju::new().chart(&input, Gender::Male).unwrap();
//! assert_eq!(chart.day.ganji.hanja(), "戊午");
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use saju_base::{ElementBalance, SajuChart};
use saju_config::SajuConfig;
use saju_fortune::{DailyFortune, TojeongHexagram, YearlyFortune};
use saju_time::{BirthInput, Gender, LunarCalendar, SolarTermTable, TableLunarCalendar, resolve_birth};
use tracing::debug;

use crate::error::SajuRsError;

/// Chart for a solar KST birth, using the built-in solar-term table.
pub fn compute_chart(birth: NaiveDateTime, gender: Gender) -> SajuChart {
    saju_base::compute_chart(birth, gender)
}

pub fn element_balance(chart: &SajuChart) -> ElementBalance {
    chart.element_balance()
}

/// Directional day-stem compatibility of `a` toward `b`.
pub fn pairwise_compatibility(a: &SajuChart, b: &SajuChart) -> u8 {
    saju_fortune::pairwise_compatibility(a, b)
}

/// Daily fortune straight from a birth moment.
pub fn daily_fortune(birth: NaiveDateTime, gender: Gender, as_of: NaiveDate) -> DailyFortune {
    saju_fortune::daily_fortune(&compute_chart(birth, gender), as_of)
}

/// 2026 yearly fortune straight from a birth moment.
pub fn yearly_fortune(birth: NaiveDateTime, gender: Gender) -> YearlyFortune {
    saju_fortune::yearly_fortune(&compute_chart(birth, gender))
}

/// Chart from civil input, converting lunar dates through `calendar`.
pub fn chart_from_input(
    input: &BirthInput,
    gender: Gender,
    calendar: Option<&dyn LunarCalendar>,
) -> Result<SajuChart, SajuRsError> {
    let birth = resolve_birth(input, calendar)?;
    Ok(compute_chart(birth, gender))
}

/// Calendar data resolved from a [`SajuConfig`]: solar-term overrides and an
/// optional lunar table.
#[derive(Debug, Clone, Default)]
pub struct Saju {
    terms: SolarTermTable,
    lunar: Option<TableLunarCalendar>,
}

impl Saju {
    /// Built-in solar terms, no lunar conversion.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SajuConfig) -> Result<Self, SajuRsError> {
        let terms = config.solar_term_table()?;
        let lunar = config.lunar_calendar()?;
        debug!(
            overrides = terms.override_count(),
            lunar = lunar.is_some(),
            "calendar data ready"
        );
        Ok(Self { terms, lunar })
    }

    pub fn with_lunar(mut self, lunar: TableLunarCalendar) -> Self {
        self.lunar = Some(lunar);
        self
    }

    pub fn terms(&self) -> &SolarTermTable {
        &self.terms
    }

    pub fn lunar(&self) -> Option<&dyn LunarCalendar> {
        self.lunar.as_ref().map(|l| l as &dyn LunarCalendar)
    }

    pub fn chart(&self, input: &BirthInput, gender: Gender) -> Result<SajuChart, SajuRsError> {
        let birth = resolve_birth(input, self.lunar())?;
        Ok(saju_base::compute_chart_with(&self.terms, birth, gender))
    }

    /// Tojeong hexagram; the lunar birth day comes from the configured table.
    pub fn tojeong(&self, chart: &SajuChart, target_year: i32) -> Result<TojeongHexagram, SajuRsError> {
        let lunar = self.lunar().ok_or(saju_time::CalendarError::NoLunarCalendar)?;
        Ok(saju_fortune::tojeong_for_birth(chart, lunar, target_year)?)
    }
}
