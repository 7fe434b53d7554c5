//! Four-pillar chart computation.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDateTime};
use saju_time::{Gender, SolarTermTable, builtin_table};
use serde::Serialize;
use tracing::debug;

use crate::balance::ElementBalance;
use crate::pillar::{Pillar, hour_branch_of, hour_ganji, month_ganji};
use crate::sexagenary::{day_ganji, year_ganji};
use crate::stem::HeavenlyStem;

/// Confidence of the month (and year) boundaries used for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthPrecision {
    /// Boundaries came from the built-in table or an override.
    Exact,
    /// The year was outside the table; default boundaries were substituted.
    Approximate,
}

/// A computed four-pillar chart (사주).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub birth: NaiveDateTime,
    pub gender: Gender,
    pub month_precision: MonthPrecision,
}

impl SajuChart {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The day stem (일간), reference point for every Ten God.
    pub fn day_master(&self) -> HeavenlyStem {
        self.day.ganji.stem
    }

    pub fn element_balance(&self) -> ElementBalance {
        ElementBalance::from_chart(self)
    }

    pub fn is_exact(&self) -> bool {
        self.month_precision == MonthPrecision::Exact
    }
}

impl Display for SajuChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.ganji, self.month.ganji, self.day.ganji, self.hour.ganji
        )
    }
}

/// Compute a chart against the built-in solar-term table.
pub fn compute_chart(birth: NaiveDateTime, gender: Gender) -> SajuChart {
    compute_chart_with(builtin_table(), birth, gender)
}

/// Compute a chart against a caller-supplied solar-term table.
///
/// `birth` is local civil time (UTC+9 for the built-in table). Births from
/// 23:30 take the 子 hour but keep the calendar day's day pillar.
pub fn compute_chart_with(table: &SolarTermTable, birth: NaiveDateTime, gender: Gender) -> SajuChart {
    let date = birth.date();
    let terms = table.terms_for_year(date.year());
    let prev_terms = table.terms_for_year(date.year() - 1);

    let effective_year = if terms.is_before_ipchun(date) {
        date.year() - 1
    } else {
        date.year()
    };
    // January never reaches Ipchun, so only Sohan of the previous year matters.
    let month_precision = if date.month() == 1 {
        prev_terms.is_exact()
    } else {
        terms.is_exact()
    };
    let month_precision = if month_precision {
        MonthPrecision::Exact
    } else {
        MonthPrecision::Approximate
    };

    let year = year_ganji(effective_year);
    let term = terms.month_term(date, &prev_terms);
    let month = month_ganji(year.stem, term);
    let day = day_ganji(date);
    let hour = hour_ganji(day.stem, hour_branch_of(birth.time()));

    let day_stem = day.stem;
    let chart = SajuChart {
        year: Pillar::new(year, day_stem),
        month: Pillar::new(month, day_stem),
        day: Pillar::new(day, day_stem),
        hour: Pillar::new(hour, day_stem),
        birth,
        gender,
        month_precision,
    };
    debug!(
        %birth,
        effective_year,
        term = term.korean(),
        ?month_precision,
        pillars = %chart,
        "computed saju chart"
    );
    chart
}
