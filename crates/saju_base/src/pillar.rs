//! Month and hour pillar derivation (dun-gan rules) and the [`Pillar`] record.

use chrono::{NaiveTime, Timelike};
use saju_time::{CalendarError, JeolTerm};
use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::error::SajuError;
use crate::sexagenary::Ganji;
use crate::stem::HeavenlyStem;
use crate::ten_god::{TenGod, ten_god};

/// First-month (寅) stem keyed by `year_stem % 5` (월두법, 年上起月).
///
/// 甲己 → 丙寅, 乙庚 → 戊寅, 丙辛 → 庚寅, 丁壬 → 壬寅, 戊癸 → 甲寅.
pub const MONTH_STEM_START: [u8; 5] = [2, 4, 6, 8, 0];

/// 子-hour stem keyed by `day_stem % 5` (시두법, 日上起時).
///
/// 甲己 → 甲子, 乙庚 → 丙子, 丙辛 → 戊子, 丁壬 → 庚子, 戊癸 → 壬子.
pub const HOUR_STEM_START: [u8; 5] = [0, 2, 4, 6, 8];

/// Month branch for each jeol term index: 立春 opens 寅 (2), 小寒 opens 丑 (1).
pub const MONTH_BRANCH_BY_TERM: [u8; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1];

/// Minutes after midnight at which the 丑 hour begins (01:30).
const HOUR_WINDOW_OFFSET_MIN: u32 = 90;
/// Minutes after midnight at which the 子 hour begins (23:30).
const JA_HOUR_START_MIN: u32 = 23 * 60 + 30;

/// Month pillar from the year stem and the jeol term in force.
pub fn month_ganji(year_stem: HeavenlyStem, term: JeolTerm) -> Ganji {
    let ti = term.index() as i64;
    let start = MONTH_STEM_START[(year_stem.index() % 5) as usize] as i64;
    Ganji {
        stem: HeavenlyStem::from_cycle(start + ti),
        branch: EarthlyBranch::from_cycle(MONTH_BRANCH_BY_TERM[ti as usize] as i64),
    }
}

/// Hour branch for a civil clock time.
///
/// 子 spans 23:30..01:30; every later branch is a 2-hour window starting at
/// 01:30 (丑), 03:30 (寅), and so on.
pub fn hour_branch_of(time: NaiveTime) -> EarthlyBranch {
    let total = time.hour() * 60 + time.minute();
    if total >= JA_HOUR_START_MIN || total < HOUR_WINDOW_OFFSET_MIN {
        return EarthlyBranch::Ja;
    }
    EarthlyBranch::from_cycle(((total - HOUR_WINDOW_OFFSET_MIN) / 120 + 1) as i64)
}

/// Hour branch for `hour:minute`, rejecting out-of-range values.
pub fn hour_branch(hour: u32, minute: u32) -> Result<EarthlyBranch, SajuError> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or(CalendarError::InvalidTime { hour, minute })?;
    Ok(hour_branch_of(time))
}

/// Hour pillar from the day stem and hour branch.
pub fn hour_ganji(day_stem: HeavenlyStem, branch: EarthlyBranch) -> Ganji {
    let start = HOUR_STEM_START[(day_stem.index() % 5) as usize] as i64;
    Ganji {
        stem: HeavenlyStem::from_cycle(start + branch.index() as i64),
        branch,
    }
}

/// One of the four pillars with its derived attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    #[serde(flatten)]
    pub ganji: Ganji,
    pub stem_element: FiveElement,
    pub branch_element: FiveElement,
    /// Relation of this pillar's stem to the day stem. The day pillar
    /// compared with itself is always 비견.
    pub ten_god: TenGod,
}

impl Pillar {
    pub fn new(ganji: Ganji, day_stem: HeavenlyStem) -> Self {
        Self {
            ganji,
            stem_element: ganji.stem.element(),
            branch_element: ganji.branch.element(),
            ten_god: ten_god(ganji.stem, day_stem),
        }
    }

    pub fn stem(&self) -> HeavenlyStem {
        self.ganji.stem
    }

    pub fn branch(&self) -> EarthlyBranch {
        self.ganji.branch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;
    use saju_time::ALL_JEOL_TERMS;

    #[test]
    fn ipchun_month_for_each_year_stem_group() {
        let expected = ["丙寅", "戊寅", "庚寅", "壬寅", "甲寅"];
        for (stem, want) in ALL_STEMS.iter().take(5).zip(expected) {
            assert_eq!(month_ganji(*stem, JeolTerm::Ipchun).hanja(), want);
        }
        // 己 shares 甲's start.
        assert_eq!(month_ganji(HeavenlyStem::Gi, JeolTerm::Ipchun).hanja(), "丙寅");
    }

    #[test]
    fn month_branches_follow_terms() {
        assert_eq!(month_ganji(HeavenlyStem::Gap, JeolTerm::Daeseol).branch, EarthlyBranch::Ja);
        assert_eq!(month_ganji(HeavenlyStem::Gap, JeolTerm::Sohan).branch, EarthlyBranch::Chuk);
        for (i, t) in ALL_JEOL_TERMS.iter().enumerate() {
            let g = month_ganji(HeavenlyStem::Gye, *t);
            assert_eq!(g.branch.index(), MONTH_BRANCH_BY_TERM[i]);
            assert!(Ganji::new(g.stem, g.branch).is_ok());
        }
    }

    #[test]
    fn hour_boundaries() {
        let cases = [
            (23, 29, EarthlyBranch::Hae),
            (23, 30, EarthlyBranch::Ja),
            (0, 0, EarthlyBranch::Ja),
            (1, 29, EarthlyBranch::Ja),
            (1, 30, EarthlyBranch::Chuk),
            (3, 29, EarthlyBranch::Chuk),
            (3, 30, EarthlyBranch::In),
            (8, 30, EarthlyBranch::Jin),
            (12, 0, EarthlyBranch::O),
            (21, 30, EarthlyBranch::Hae),
        ];
        for (h, m, want) in cases {
            assert_eq!(hour_branch(h, m), Ok(want), "{h:02}:{m:02}");
        }
    }

    #[test]
    fn hour_out_of_range() {
        assert_eq!(
            hour_branch(24, 0),
            Err(SajuError::Calendar(CalendarError::InvalidTime { hour: 24, minute: 0 }))
        );
        assert!(hour_branch(10, 60).is_err());
    }

    #[test]
    fn hour_stems() {
        assert_eq!(hour_ganji(HeavenlyStem::Gap, EarthlyBranch::Ja).hanja(), "甲子");
        assert_eq!(hour_ganji(HeavenlyStem::Eul, EarthlyBranch::Ja).hanja(), "丙子");
        assert_eq!(hour_ganji(HeavenlyStem::Mu, EarthlyBranch::Ja).hanja(), "壬子");
        assert_eq!(hour_ganji(HeavenlyStem::Gyeong, EarthlyBranch::Jin).hanja(), "庚辰");
    }

    #[test]
    fn day_pillar_is_bigyeon() {
        let g = Ganji::from_cycle(54);
        assert_eq!(Pillar::new(g, g.stem).ten_god, TenGod::BiGyeon);
    }
}
