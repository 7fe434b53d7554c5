//! Earthly branches (지지).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::{FiveElement, Polarity};
use crate::error::SajuError;

/// The 12 earthly branches, 子 through 亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_ANIMALS: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

impl EarthlyBranch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at `index`, rejecting values outside 0..12.
    pub fn from_index(index: u8) -> Result<Self, SajuError> {
        ALL_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or(SajuError::BranchIndexOutOfRange(index))
    }

    /// Branch for any integer cycle position, reduced mod 12.
    pub fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    pub fn hangul(self) -> &'static str {
        BRANCH_HANGUL[self.index() as usize]
    }

    /// Zodiac animal (띠) in Korean.
    pub fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    /// 辰戌丑未 are the earth branches; the others follow their season.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::In | Self::Myo => FiveElement::Wood,
            Self::Sa | Self::O => FiveElement::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => FiveElement::Earth,
            Self::Sin | Self::Yu => FiveElement::Metal,
            Self::Hae | Self::Ja => FiveElement::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for EarthlyBranch {
    type Err = SajuError;

    /// Accepts the hanja (`子`) or hangul (`자`) form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BRANCH_HANJA
            .iter()
            .position(|h| *h == s)
            .or_else(|| BRANCH_HANGUL.iter().position(|h| *h == s))
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| SajuError::UnknownBranch(s.to_string()))
    }
}

impl Serialize for EarthlyBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(EarthlyBranch::from_index(i as u8), Ok(*b));
        }
        assert_eq!(
            EarthlyBranch::from_index(12),
            Err(SajuError::BranchIndexOutOfRange(12))
        );
    }

    #[test]
    fn element_table() {
        let expected = [
            FiveElement::Water,
            FiveElement::Earth,
            FiveElement::Wood,
            FiveElement::Wood,
            FiveElement::Earth,
            FiveElement::Fire,
            FiveElement::Fire,
            FiveElement::Earth,
            FiveElement::Metal,
            FiveElement::Metal,
            FiveElement::Earth,
            FiveElement::Water,
        ];
        for (b, e) in ALL_BRANCHES.iter().zip(expected) {
            assert_eq!(b.element(), e, "{b}");
        }
    }

    #[test]
    fn parse_forms() {
        assert_eq!("午".parse::<EarthlyBranch>(), Ok(EarthlyBranch::O));
        assert_eq!("해".parse::<EarthlyBranch>(), Ok(EarthlyBranch::Hae));
        assert!(matches!(
            "甲".parse::<EarthlyBranch>(),
            Err(SajuError::UnknownBranch(_))
        ));
    }

    #[test]
    fn animals() {
        assert_eq!(EarthlyBranch::Ja.animal(), "쥐");
        assert_eq!(EarthlyBranch::O.animal(), "말");
    }
}
