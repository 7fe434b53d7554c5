//! Calendar inputs for the saju engine.
//!
//! This crate provides:
//! - The month-changing solar-term table (1900-2100, UTC+9 civil dates)
//!   with per-year overrides and a documented fallback table
//! - Civil birth input (solar or lunar declared) and gender
//! - The lunar/solar converter seam consumed when a birth is declared lunar

pub mod birth;
pub mod error;
pub mod lunar;
pub mod solar_terms;
mod solar_terms_data;

pub use birth::{BirthInput, CalendarKind, Gender};
pub use error::CalendarError;
pub use lunar::{LunarCalendar, LunarDate, LunarMonthRecord, TableLunarCalendar, resolve_birth};
pub use solar_terms::{
    ALL_JEOL_TERMS, DEFAULT_TERMS, JeolTerm, SolarTermTable, SolarTerms, TERM_MONTHS, TermBoundary, TermSource,
    builtin_table,
};
pub use solar_terms_data::{SOLAR_TERM_FIRST_YEAR, SOLAR_TERM_LAST_YEAR};
