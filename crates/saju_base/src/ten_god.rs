//! Ten Gods (십신): a stem's relation to the day stem.
//!
//! The element relation picks the pair, polarity picks the member:
//!
//! | day → target   | same polarity | different polarity |
//! |----------------|---------------|--------------------|
//! | same element   | 비견 比肩     | 겁재 劫財          |
//! | day generates  | 식신 食神     | 상관 傷官          |
//! | day overcomes  | 편재 偏財     | 정재 正財          |
//! | target overcomes day | 편관 偏官 | 정관 正官       |
//! | target generates day | 편인 偏印 | 정인 正印       |

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::element::ElementRelation;
use crate::stem::HeavenlyStem;

/// The ten relation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    BiGyeon,
    GeopJae,
    SikSin,
    SangGwan,
    PyeonJae,
    JeongJae,
    PyeonGwan,
    JeongGwan,
    PyeonIn,
    JeongIn,
}

/// All ten in table order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiGyeon,
    TenGod::GeopJae,
    TenGod::SikSin,
    TenGod::SangGwan,
    TenGod::PyeonJae,
    TenGod::JeongJae,
    TenGod::PyeonGwan,
    TenGod::JeongGwan,
    TenGod::PyeonIn,
    TenGod::JeongIn,
];

const TEN_GOD_KOREAN: [&str; 10] = [
    "비견", "겁재", "식신", "상관", "편재", "정재", "편관", "정관", "편인", "정인",
];
const TEN_GOD_HANJA: [&str; 10] = [
    "比肩", "劫財", "食神", "傷官", "偏財", "正財", "偏官", "正官", "偏印", "正印",
];

impl TenGod {
    /// 0-based index (비견=0 .. 정인=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::BiGyeon => 0,
            Self::GeopJae => 1,
            Self::SikSin => 2,
            Self::SangGwan => 3,
            Self::PyeonJae => 4,
            Self::JeongJae => 5,
            Self::PyeonGwan => 6,
            Self::JeongGwan => 7,
            Self::PyeonIn => 8,
            Self::JeongIn => 9,
        }
    }

    pub fn korean(self) -> &'static str {
        TEN_GOD_KOREAN[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        TEN_GOD_HANJA[self.index() as usize]
    }

    /// Parse the Korean name.
    pub fn from_korean(s: &str) -> Option<Self> {
        TEN_GOD_KOREAN
            .iter()
            .position(|k| *k == s)
            .map(|i| ALL_TEN_GODS[i])
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean())
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.korean())
    }
}

/// Classify `target` relative to the `day` stem.
pub fn ten_god(target: HeavenlyStem, day: HeavenlyStem) -> TenGod {
    let same_polarity = target.polarity() == day.polarity();
    let pick = |same, diff| if same_polarity { same } else { diff };
    match ElementRelation::between(day.element(), target.element()) {
        ElementRelation::Same => pick(TenGod::BiGyeon, TenGod::GeopJae),
        ElementRelation::Generates => pick(TenGod::SikSin, TenGod::SangGwan),
        ElementRelation::Overcomes => pick(TenGod::PyeonJae, TenGod::JeongJae),
        ElementRelation::OvercomeBy => pick(TenGod::PyeonGwan, TenGod::JeongGwan),
        ElementRelation::GeneratedBy => pick(TenGod::PyeonIn, TenGod::JeongIn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_is_bigyeon() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::BiGyeon);
        }
    }

    #[test]
    fn known_pairs_for_gap_day() {
        let day = HeavenlyStem::Gap;
        assert_eq!(ten_god(HeavenlyStem::Eul, day), TenGod::GeopJae);
        assert_eq!(ten_god(HeavenlyStem::Byeong, day), TenGod::SikSin);
        assert_eq!(ten_god(HeavenlyStem::Jeong, day), TenGod::SangGwan);
        assert_eq!(ten_god(HeavenlyStem::Mu, day), TenGod::PyeonJae);
        assert_eq!(ten_god(HeavenlyStem::Gi, day), TenGod::JeongJae);
        assert_eq!(ten_god(HeavenlyStem::Gyeong, day), TenGod::PyeonGwan);
        assert_eq!(ten_god(HeavenlyStem::Sin, day), TenGod::JeongGwan);
        assert_eq!(ten_god(HeavenlyStem::Im, day), TenGod::PyeonIn);
        assert_eq!(ten_god(HeavenlyStem::Gye, day), TenGod::JeongIn);
    }

    #[test]
    fn each_day_stem_sees_all_ten() {
        for day in ALL_STEMS {
            let mut seen = [false; 10];
            for target in ALL_STEMS {
                seen[ten_god(target, day).index() as usize] = true;
            }
            assert!(seen.iter().all(|s| *s), "day {day}");
        }
    }

    #[test]
    fn korean_round_trip() {
        for g in ALL_TEN_GODS {
            assert_eq!(TenGod::from_korean(g.korean()), Some(g));
        }
    }
}
