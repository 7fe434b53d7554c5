//! Tojeong hexagram (토정비결 괘).
//!
//! Three trigram numbers built from Xiantian (先天) numbers of the target
//! year's pillar and the natal month and day pillars:
//!
//! - upper  = (korean age + year number) mod 8, 0 → 8
//! - middle = (month number + 30) mod 6, 0 → 6
//! - lower  = (day number + lunar birth day) mod 3, 0 → 3

use chrono::Datelike;
use saju_base::{EarthlyBranch, Ganji, HeavenlyStem, SajuChart, year_ganji};
use saju_time::{CalendarError, LunarCalendar};
use serde::Serialize;
use tracing::debug;

use crate::error::FortuneError;

/// Length of a lunar month as counted for the middle trigram.
pub const TOJEONG_MONTH_DAYS: i64 = 30;

const STEM_XIANTIAN: [u8; 5] = [9, 8, 7, 6, 5];
const BRANCH_XIANTIAN: [u8; 6] = [9, 8, 7, 6, 5, 4];

/// 甲己 9, 乙庚 8, 丙辛 7, 丁壬 6, 戊癸 5.
pub const fn stem_number(stem: HeavenlyStem) -> u8 {
    STEM_XIANTIAN[(stem.index() % 5) as usize]
}

/// 子午 9, 丑未 8, 寅申 7, 卯酉 6, 辰戌 5, 巳亥 4.
pub const fn branch_number(branch: EarthlyBranch) -> u8 {
    BRANCH_XIANTIAN[(branch.index() % 6) as usize]
}

pub const fn ganji_number(g: Ganji) -> u8 {
    stem_number(g.stem) + branch_number(g.branch)
}

/// A Tojeong reading's hexagram for one target year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TojeongHexagram {
    pub target_year: i32,
    pub korean_age: i32,
    pub upper: u8,
    pub middle: u8,
    pub lower: u8,
    /// `"{upper}{middle}{lower}"`, e.g. `"551"`.
    pub code: String,
}

fn wrap(n: i64, m: i64) -> u8 {
    match n.rem_euclid(m) {
        0 => m as u8,
        r => r as u8,
    }
}

/// Hexagram for `target_year`, given the lunar day of birth.
pub fn tojeong(
    chart: &SajuChart,
    lunar_day: u32,
    target_year: i32,
) -> Result<TojeongHexagram, FortuneError> {
    if !(1..=30).contains(&lunar_day) {
        return Err(FortuneError::InvalidLunarDay(lunar_day));
    }
    let korean_age = i32::try_from(target_year as i64 - chart.birth.year() as i64 + 1)
        .map_err(|_| FortuneError::TargetYearOutOfRange(target_year))?;
    let tae = ganji_number(year_ganji(target_year)) as i64;
    let wol = ganji_number(chart.month.ganji) as i64;
    let il = ganji_number(chart.day.ganji) as i64;

    let upper = wrap(korean_age as i64 + tae, 8);
    let middle = wrap(wol + TOJEONG_MONTH_DAYS, 6);
    let lower = wrap(il + lunar_day as i64, 3);
    debug!(target_year, korean_age, tae, wol, il, "tojeong numbers");

    Ok(TojeongHexagram {
        target_year,
        korean_age,
        upper,
        middle,
        lower,
        code: format!("{upper}{middle}{lower}"),
    })
}

/// [`tojeong`] with the lunar birth day looked up through `calendar`.
pub fn tojeong_for_birth(
    chart: &SajuChart,
    calendar: &dyn LunarCalendar,
    target_year: i32,
) -> Result<TojeongHexagram, FortuneError> {
    let date = chart.birth.date();
    let lunar = calendar
        .solar_to_lunar(date)
        .ok_or(CalendarError::SolarConversion {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })?;
    tojeong(chart, lunar.day, target_year)
}
