//! Convenience wrapper for the saju four-pillar engine.
//!
//! Free functions cover the common case (solar input, built-in tables).
//! [`Saju`] carries configured calendar data for lunar input and Tojeong.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use saju_rs::*;
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 5, 15)
//!     .and_then(|d| d.and_hms_opt(8, 30, 0))
//!     .unwrap();
//! let chart = compute_chart(birth, Gender::Male);
//! assert_eq!(chart.to_string(), "庚午 辛巳 庚辰 庚辰");
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    Saju, chart_from_input, compute_chart, daily_fortune, element_balance, pairwise_compatibility,
    yearly_fortune,
};
pub use error::SajuRsError;

// Re-export the types the convenience functions traffic in.
pub use saju_base::{
    EarthlyBranch, ElementBalance, FiveElement, Ganji, HeavenlyStem, MonthPrecision, Pillar,
    SajuChart, TenGod,
};
pub use saju_config::{OutputFormat, SajuConfig};
pub use saju_fortune::{
    CoupleCompatibility, DailyFortune, FamilyMember, FamilyRole, FamilySummary, FortuneDetails,
    MonthlyFortune, ScoreTier, TojeongHexagram, YearlyFortune, detailed_compatibility,
    family_summary, lifetime_fortune,
};
pub use saju_time::{
    BirthInput, CalendarKind, Gender, LunarCalendar, LunarDate, LunarMonthRecord,
    TableLunarCalendar,
};
