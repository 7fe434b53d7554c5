//! Heavenly stems (천간).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::{FiveElement, Polarity};
use crate::error::SajuError;

/// The 10 heavenly stems, 甲 through 癸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

impl HeavenlyStem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at `index`, rejecting values outside 0..10.
    pub fn from_index(index: u8) -> Result<Self, SajuError> {
        ALL_STEMS
            .get(index as usize)
            .copied()
            .ok_or(SajuError::StemIndexOutOfRange(index))
    }

    /// Stem for any integer cycle position, reduced mod 10.
    pub fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    pub fn hangul(self) -> &'static str {
        STEM_HANGUL[self.index() as usize]
    }

    /// Stems pair up by element: 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Gap | Self::Eul => FiveElement::Wood,
            Self::Byeong | Self::Jeong => FiveElement::Fire,
            Self::Mu | Self::Gi => FiveElement::Earth,
            Self::Gyeong | Self::Sin => FiveElement::Metal,
            Self::Im | Self::Gye => FiveElement::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for HeavenlyStem {
    type Err = SajuError;

    /// Accepts the hanja (`甲`) or hangul (`갑`) form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        STEM_HANJA
            .iter()
            .position(|h| *h == s)
            .or_else(|| STEM_HANGUL.iter().position(|h| *h == s))
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| SajuError::UnknownStem(s.to_string()))
    }
}

impl Serialize for HeavenlyStem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}
