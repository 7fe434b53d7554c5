//! Five Elements (오행), yin-yang polarity, and the element cycles.
//!
//! Generation: wood → fire → earth → metal → water → wood.
//! Overcoming: wood → earth → water → fire → metal → wood.
//!
//! With elements numbered in generation order, "a generates b" is
//! `b = a + 1 (mod 5)` and "a overcomes b" is `b = a + 2 (mod 5)`, so every
//! ordered pair falls into exactly one [`ElementRelation`].

use serde::Serialize;

/// The five element categories, in generation-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in canonical order 木火土金水.
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_ELEMENTS.get(index as usize).copied()
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// The element this one generates (상생).
    pub fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes (상극).
    pub fn overcomes(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

/// Yin-yang polarity (음양).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even cycle indices are yang, odd are yin.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}

/// Directed relation from one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// Same element (비화).
    Same,
    /// `from` generates `to`.
    Generates,
    /// `from` overcomes `to`.
    Overcomes,
    /// `to` overcomes `from`.
    OvercomeBy,
    /// `to` generates `from`.
    GeneratedBy,
}

/// Relation by forward distance in the generation cycle.
const RELATION_BY_OFFSET: [ElementRelation; 5] = [
    ElementRelation::Same,
    ElementRelation::Generates,
    ElementRelation::Overcomes,
    ElementRelation::OvercomeBy,
    ElementRelation::GeneratedBy,
];

impl ElementRelation {
    /// Relation of `from` toward `to`. Total over all 25 ordered pairs.
    pub fn between(from: FiveElement, to: FiveElement) -> Self {
        let offset = (to.index() + 5 - from.index()) % 5;
        RELATION_BY_OFFSET[offset as usize]
    }

    /// The same relation seen from the other side.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Same => Self::Same,
            Self::Generates => Self::GeneratedBy,
            Self::Overcomes => Self::OvercomeBy,
            Self::OvercomeBy => Self::Overcomes,
            Self::GeneratedBy => Self::Generates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(FiveElement::from_index(i as u8), Some(*e));
        }
        assert_eq!(FiveElement::from_index(5), None);
    }

    #[test]
    fn generation_cycle() {
        assert_eq!(FiveElement::Wood.generates(), FiveElement::Fire);
        assert_eq!(FiveElement::Fire.generates(), FiveElement::Earth);
        assert_eq!(FiveElement::Earth.generates(), FiveElement::Metal);
        assert_eq!(FiveElement::Metal.generates(), FiveElement::Water);
        assert_eq!(FiveElement::Water.generates(), FiveElement::Wood);
    }

    #[test]
    fn overcoming_cycle() {
        assert_eq!(FiveElement::Wood.overcomes(), FiveElement::Earth);
        assert_eq!(FiveElement::Earth.overcomes(), FiveElement::Water);
        assert_eq!(FiveElement::Water.overcomes(), FiveElement::Fire);
        assert_eq!(FiveElement::Fire.overcomes(), FiveElement::Metal);
        assert_eq!(FiveElement::Metal.overcomes(), FiveElement::Wood);
    }

    #[test]
    fn relation_total_and_consistent() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let r = ElementRelation::between(a, b);
                assert_eq!(ElementRelation::between(b, a), r.reversed());
                match r {
                    ElementRelation::Same => assert_eq!(a, b),
                    ElementRelation::Generates => assert_eq!(a.generates(), b),
                    ElementRelation::Overcomes => assert_eq!(a.overcomes(), b),
                    ElementRelation::OvercomeBy => assert_eq!(b.overcomes(), a),
                    ElementRelation::GeneratedBy => assert_eq!(b.generates(), a),
                }
            }
        }
    }

    #[test]
    fn polarity_parity() {
        assert_eq!(Polarity::from_parity(0), Polarity::Yang);
        assert_eq!(Polarity::from_parity(7), Polarity::Yin);
    }
}
