//! Month-changing solar terms (jeol) used as month-pillar boundaries.
//!
//! Of the 24 solar terms only the 12 jeol start a new saju month. Each year's
//! row lists them from Ipchun (start of spring, opening the tiger month) to
//! Daeseol, followed by Sohan, which falls in January of the *next* year and
//! opens the ox month.
//!
//! Years outside the precomputed range fall back to [`DEFAULT_TERMS`]; the
//! returned [`SolarTerms`] records which source answered so callers can flag
//! the result as approximate.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::CalendarError;
use crate::solar_terms_data::{SOLAR_TERM_DAYS, SOLAR_TERM_FIRST_YEAR, SOLAR_TERM_LAST_YEAR};

/// Civil month of each jeol term, in table order (index 11 is next January).
pub const TERM_MONTHS: [u8; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1];

/// A (month, day) civil-date boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermBoundary {
    pub month: u8,
    pub day: u8,
}

impl TermBoundary {
    pub const fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }
}

/// Approximate boundaries used when a year is absent from the table.
pub const DEFAULT_TERMS: [TermBoundary; 12] = [
    TermBoundary::new(2, 4),
    TermBoundary::new(3, 6),
    TermBoundary::new(4, 5),
    TermBoundary::new(5, 6),
    TermBoundary::new(6, 6),
    TermBoundary::new(7, 7),
    TermBoundary::new(8, 8),
    TermBoundary::new(9, 8),
    TermBoundary::new(10, 8),
    TermBoundary::new(11, 7),
    TermBoundary::new(12, 7),
    TermBoundary::new(1, 6),
];

/// The 12 month-changing solar terms in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JeolTerm {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 jeol terms in order (index 0 = Ipchun).
pub const ALL_JEOL_TERMS: [JeolTerm; 12] = [
    JeolTerm::Ipchun,
    JeolTerm::Gyeongchip,
    JeolTerm::Cheongmyeong,
    JeolTerm::Ipha,
    JeolTerm::Mangjong,
    JeolTerm::Soseo,
    JeolTerm::Ipchu,
    JeolTerm::Baengno,
    JeolTerm::Hallo,
    JeolTerm::Ipdong,
    JeolTerm::Daeseol,
    JeolTerm::Sohan,
];

impl JeolTerm {
    /// 0-based table index (Ipchun=0 .. Sohan=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Gyeongchip => 1,
            Self::Cheongmyeong => 2,
            Self::Ipha => 3,
            Self::Mangjong => 4,
            Self::Soseo => 5,
            Self::Ipchu => 6,
            Self::Baengno => 7,
            Self::Hallo => 8,
            Self::Ipdong => 9,
            Self::Daeseol => 10,
            Self::Sohan => 11,
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
            Self::Sohan => "소한",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "淸明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
            Self::Sohan => "小寒",
        }
    }

    /// Term at a table index, `None` for index >= 12.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_JEOL_TERMS.get(index as usize).copied()
    }
}

/// Where a year's boundaries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TermSource {
    /// Precomputed built-in row.
    Builtin,
    /// Caller-supplied override row.
    Override,
    /// Year not covered; [`DEFAULT_TERMS`] substituted.
    Default,
}

/// One year's 12 jeol boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarTerms {
    pub year: i32,
    pub boundaries: [TermBoundary; 12],
    pub source: TermSource,
}

impl SolarTerms {
    /// Whether these boundaries come from real data rather than the fallback.
    pub fn is_exact(&self) -> bool {
        self.source != TermSource::Default
    }

    /// Boundary for a given term.
    pub fn boundary(&self, term: JeolTerm) -> TermBoundary {
        self.boundaries[term.index() as usize]
    }

    /// Ipchun, the year-pillar boundary.
    pub fn ipchun(&self) -> TermBoundary {
        self.boundary(JeolTerm::Ipchun)
    }

    /// Civil date of a term. Sohan falls in January of `year + 1`.
    pub fn date_of(&self, term: JeolTerm) -> Option<NaiveDate> {
        let b = self.boundary(term);
        let year = if term == JeolTerm::Sohan {
            self.year + 1
        } else {
            self.year
        };
        NaiveDate::from_ymd_opt(year, b.month as u32, b.day as u32)
    }

    /// True when `date` (in this table's year) precedes Ipchun.
    pub fn is_before_ipchun(&self, date: NaiveDate) -> bool {
        let ipchun = self.ipchun();
        date.month() < ipchun.month as u32
            || (date.month() == ipchun.month as u32 && date.day() < ipchun.day as u32)
    }

    /// Index (0..12) of the jeol term in force on `date`.
    ///
    /// `self` must be the table for `date.year()`. January is decided by the
    /// previous year's Sohan, so `prev_year` must be the table for
    /// `date.year() - 1`. A day equal to the boundary belongs to the new term.
    pub fn month_term_index(&self, date: NaiveDate, prev_year: &SolarTerms) -> u8 {
        let day = date.day() as u8;
        if date.month() == 1 {
            let sohan = prev_year.boundary(JeolTerm::Sohan);
            return if day >= sohan.day { 11 } else { 10 };
        }
        // Feb..Dec map onto table rows 0..=10.
        let i = (date.month() - 2) as u8;
        if day >= self.boundaries[i as usize].day {
            i
        } else {
            (i + 11) % 12
        }
    }

    /// Jeol term in force on `date`; see [`Self::month_term_index`].
    pub fn month_term(&self, date: NaiveDate, prev_year: &SolarTerms) -> JeolTerm {
        ALL_JEOL_TERMS[self.month_term_index(date, prev_year) as usize]
    }
}

/// Per-year solar-term lookup: built-in data plus optional overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolarTermTable {
    overrides: BTreeMap<i32, [TermBoundary; 12]>,
}

static BUILTIN: SolarTermTable = SolarTermTable::new();

/// The shared built-in table (no overrides).
pub fn builtin_table() -> &'static SolarTermTable {
    &BUILTIN
}

impl SolarTermTable {
    /// Table backed only by the built-in data.
    pub const fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Add or replace a year's row. Days are in [`TERM_MONTHS`] order.
    pub fn insert_override(&mut self, year: i32, days: [u8; 12]) -> Result<(), CalendarError> {
        let mut row = [TermBoundary::new(0, 0); 12];
        for (i, (&day, &month)) in days.iter().zip(TERM_MONTHS.iter()).enumerate() {
            let civil_year = if i == 11 { year + 1 } else { year };
            if NaiveDate::from_ymd_opt(civil_year, month as u32, day as u32).is_none() {
                return Err(CalendarError::InvalidSolarTermTable(format!(
                    "year {year}: term {i} day {day} is not a valid day of month {month}"
                )));
            }
            row[i] = TermBoundary::new(month, day);
        }
        self.overrides.insert(year, row);
        Ok(())
    }

    /// Builder form of [`Self::insert_override`].
    pub fn with_override(mut self, year: i32, days: [u8; 12]) -> Result<Self, CalendarError> {
        self.insert_override(year, days)?;
        Ok(self)
    }

    /// Number of override rows.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Whether `year` has real (non-fallback) boundaries.
    pub fn is_covered(&self, year: i32) -> bool {
        self.overrides.contains_key(&year)
            || (SOLAR_TERM_FIRST_YEAR..=SOLAR_TERM_LAST_YEAR).contains(&year)
    }

    /// Boundaries for `year`, falling back to [`DEFAULT_TERMS`].
    pub fn terms_for_year(&self, year: i32) -> SolarTerms {
        if let Some(row) = self.overrides.get(&year) {
            return SolarTerms {
                year,
                boundaries: *row,
                source: TermSource::Override,
            };
        }
        if (SOLAR_TERM_FIRST_YEAR..=SOLAR_TERM_LAST_YEAR).contains(&year) {
            let days = &SOLAR_TERM_DAYS[(year - SOLAR_TERM_FIRST_YEAR) as usize];
            let mut boundaries = [TermBoundary::new(0, 0); 12];
            for (i, b) in boundaries.iter_mut().enumerate() {
                *b = TermBoundary::new(TERM_MONTHS[i], days[i]);
            }
            return SolarTerms {
                year,
                boundaries,
                source: TermSource::Builtin,
            };
        }
        debug!(year, "solar-term year not covered, using default boundaries");
        SolarTerms {
            year,
            boundaries: DEFAULT_TERMS,
            source: TermSource::Default,
        }
    }
}
