//! Four-pillar (사주) calculation core.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches and the 60-cycle
//! - Five Elements with generation/overcoming relations
//! - Ten God classification against the day stem
//! - Year/month/day/hour pillar derivation and [`compute_chart`]
//! - Element balance of a chart

pub mod balance;
pub mod branch;
pub mod chart;
pub mod element;
pub mod error;
pub mod pillar;
pub mod sexagenary;
pub mod stem;
pub mod ten_god;

pub use balance::ElementBalance;
pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use chart::{MonthPrecision, SajuChart, compute_chart, compute_chart_with};
pub use element::{ALL_ELEMENTS, ElementRelation, FiveElement, Polarity};
pub use error::SajuError;
pub use pillar::{
    HOUR_STEM_START, MONTH_BRANCH_BY_TERM, MONTH_STEM_START, Pillar, hour_branch, hour_branch_of,
    hour_ganji, month_ganji,
};
pub use sexagenary::{Ganji, day_ganji, year_ganji};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};

pub use saju_time::{BirthInput, CalendarError, CalendarKind, Gender};
