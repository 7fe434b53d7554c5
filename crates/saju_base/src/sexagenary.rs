//! Sexagenary (60-cycle) stem/branch pairs and year/day arithmetic.
//!
//! Year anchor: CE 4 is 甲子, so stem = (y - 4) mod 10, branch = (y - 4) mod 12.
//! Day anchor: 2000-01-01 is 戊午 (stem 4, branch 6).

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::error::SajuError;
use crate::stem::HeavenlyStem;

/// CE year whose pillar is 甲子.
pub const YEAR_CYCLE_ANCHOR: i32 = 4;

/// 2000-01-01 as days from CE (0001-01-01 = 1), a 戊午 day.
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 730_120;
/// Stem index of the day epoch.
pub const DAY_EPOCH_STEM: i64 = 4;
/// Branch index of the day epoch.
pub const DAY_EPOCH_BRANCH: i64 = 6;

/// A stem/branch pair (간지) from the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ganji {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Ganji {
    /// Pair a stem and branch; both must share polarity.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, SajuError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(SajuError::MismatchedGanji {
                stem: stem.index(),
                branch: branch.index(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pair at any integer cycle position, reduced mod 60 (0 = 甲子).
    pub fn from_cycle(n: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_cycle(n),
            branch: EarthlyBranch::from_cycle(n),
        }
    }

    /// Position in the 60-cycle (甲子=0 .. 癸亥=59).
    pub fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// The pair `n` steps later (negative steps go back).
    pub fn offset(self, n: i64) -> Self {
        Self::from_cycle(self.cycle_index() as i64 + n)
    }

    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl Display for Ganji {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Year pillar for an effective (Ipchun-adjusted) year.
pub fn year_ganji(effective_year: i32) -> Ganji {
    Ganji::from_cycle(effective_year as i64 - YEAR_CYCLE_ANCHOR as i64)
}

/// Day pillar for a civil date.
pub fn day_ganji(date: NaiveDate) -> Ganji {
    let days = (date.num_days_from_ce() - DAY_EPOCH_DAYS_FROM_CE) as i64;
    Ganji {
        stem: HeavenlyStem::from_cycle(DAY_EPOCH_STEM + days),
        branch: EarthlyBranch::from_cycle(DAY_EPOCH_BRANCH + days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cycle_index_round_trip() {
        for n in 0..60 {
            assert_eq!(Ganji::from_cycle(n).cycle_index() as i64, n);
        }
    }

    #[test]
    fn mismatched_polarity_rejected() {
        assert!(Ganji::new(HeavenlyStem::Gap, EarthlyBranch::Chuk).is_err());
        assert!(Ganji::new(HeavenlyStem::Gap, EarthlyBranch::Ja).is_ok());
    }

    #[test]
    fn year_anchor() {
        assert_eq!(year_ganji(1984).hanja(), "甲子");
        assert_eq!(year_ganji(2024).hanja(), "甲辰");
        assert_eq!(year_ganji(2026).hanja(), "丙午");
        assert_eq!(year_ganji(4).cycle_index(), 0);
        assert_eq!(year_ganji(3).hanja(), "癸亥");
    }

    #[test]
    fn year_ganji_at_i32_bounds() {
        assert_eq!(year_ganji(i32::MIN).cycle_index(), 48);
        assert_eq!(year_ganji(i32::MAX).hanja(), "丁卯");
    }

    #[test]
    fn epoch_constant_matches_calendar() {
        assert_eq!(date(2000, 1, 1).num_days_from_ce(), DAY_EPOCH_DAYS_FROM_CE);
    }

    #[test]
    fn day_epoch_is_mu_o() {
        let g = day_ganji(date(2000, 1, 1));
        assert_eq!((g.stem.index(), g.branch.index()), (4, 6));
    }

    #[test]
    fn day_before_epoch() {
        assert_eq!(day_ganji(date(1999, 12, 31)).hanja(), "丁巳");
    }

    #[test]
    fn consecutive_days_step_once() {
        let mut d = date(1999, 11, 1);
        for _ in 0..120 {
            let next = d.succ_opt().unwrap();
            assert_eq!(day_ganji(next), day_ganji(d).offset(1));
            d = next;
        }
    }

    #[test]
    fn sixty_steps_close_the_cycle() {
        let g = Ganji::from_cycle(17);
        assert_eq!(g.offset(60), g);
        assert_eq!(g.offset(-60), g);
    }
}
