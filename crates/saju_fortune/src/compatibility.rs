//! Compatibility between two charts (궁합).
//!
//! Three views:
//! - [`pairwise_compatibility`]: the quick day-stem score used across the app
//! - [`detailed_compatibility`]: couple reading with love/wealth/family scores
//! - [`day_stem_relation`]: relation label plus heavenly-stem combination

use saju_base::{ElementBalance, ElementRelation, FiveElement, HeavenlyStem, SajuChart};
use serde::Serialize;

use crate::lifetime::element_plain_name;

/// Starting point of [`pairwise_compatibility`].
pub const PAIRWISE_BASE: i32 = 60;

/// Directional compatibility score of `a` toward `b`, clamped to 0..=100.
///
/// Day-stem elements: +15 same, +20 when either generates the other, -10
/// when either overcomes the other. +10 when the day stems differ in
/// polarity. +10 when `a`'s weakest element is `b`'s strongest. The last
/// term makes the score asymmetric.
pub fn pairwise_compatibility(a: &SajuChart, b: &SajuChart) -> u8 {
    let sa = a.day_master();
    let sb = b.day_master();
    let (ea, eb) = (sa.element(), sb.element());

    let mut score = PAIRWISE_BASE;
    if ea == eb {
        score += 15;
    }
    if ea.generates() == eb || eb.generates() == ea {
        score += 20;
    }
    if ea.overcomes() == eb || eb.overcomes() == ea {
        score -= 10;
    }
    if sa.polarity() != sb.polarity() {
        score += 10;
    }
    if a.element_balance().weakest() == b.element_balance().strongest() {
        score += 10;
    }
    score.clamp(0, 100) as u8
}

/// Day-stem element affinity, `[a][b]` in 木火土金水 order.
pub const ELEMENT_AFFINITY: [[u8; 5]; 5] = [
    [75, 90, 40, 30, 85],
    [90, 70, 85, 35, 25],
    [40, 85, 75, 88, 35],
    [30, 35, 88, 70, 90],
    [85, 25, 35, 90, 75],
];

/// Full couple reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoupleCompatibility {
    pub total: u8,
    pub grade: &'static str,
    pub element_score: u8,
    pub yin_yang_score: u8,
    pub complement_score: u8,
    pub love: u8,
    pub wealth: u8,
    pub family: u8,
}

/// How well two balances fill each other's gaps, 50..=95.
pub fn complement_score(a: &ElementBalance, b: &ElementBalance) -> u8 {
    let mut sum: u32 = 0;
    for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
        sum += if (x <= 1 && y >= 3) || (y <= 1 && x >= 3) {
            20
        } else if x.abs_diff(y) <= 1 {
            10
        } else {
            5
        };
    }
    (50 + sum).min(95) as u8
}

/// Score label: 최상, 상, 중상, 중, 중하, 하.
pub fn grade_label(score: u8) -> &'static str {
    match score {
        90.. => "최상",
        80..=89 => "상",
        70..=79 => "중상",
        60..=69 => "중",
        50..=59 => "중하",
        _ => "하",
    }
}

fn first_utf16(s: &str) -> u32 {
    s.encode_utf16().next().map(u32::from).unwrap_or(0)
}

fn round_clamp(x: f64) -> u8 {
    x.round().clamp(35.0, 98.0) as u8
}

/// Couple reading from both charts.
pub fn detailed_compatibility(a: &SajuChart, b: &SajuChart) -> CoupleCompatibility {
    let sa = a.day_master();
    let sb = b.day_master();
    let el = ELEMENT_AFFINITY[sa.element().index() as usize][sb.element().index() as usize];
    let yy: u8 = if sa.polarity() != sb.polarity() { 90 } else { 65 };
    let comp = complement_score(&a.element_balance(), &b.element_balance());
    let seed = (first_utf16(sa.hanja()) + first_utf16(sb.hanja())) % 20;

    let (el_f, yy_f, comp_f) = (el as f64, yy as f64, comp as f64);
    let jitter = |shift: u32| ((seed + shift) % 10) as f64 - 5.0;
    let love = round_clamp(el_f * 0.5 + yy_f * 0.3 + comp_f * 0.2 + jitter(0));
    let wealth = round_clamp(comp_f * 0.5 + el_f * 0.3 + yy_f * 0.2 + jitter(3));
    let family = round_clamp(yy_f * 0.4 + el_f * 0.3 + comp_f * 0.3 + jitter(7));
    let total = (el_f * 0.35
        + yy_f * 0.2
        + comp_f * 0.2
        + love as f64 * 0.1
        + wealth as f64 * 0.05
        + family as f64 * 0.1)
        .round() as u8;

    CoupleCompatibility {
        total,
        grade: grade_label(total),
        element_score: el,
        yin_yang_score: yy,
        complement_score: comp,
        love,
        wealth,
        family,
    }
}

/// A heavenly-stem combination (천간합).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StemCombination {
    pub name: &'static str,
    /// Element the pair transforms into.
    pub transforms_to: FiveElement,
}

const STEM_COMBINATIONS: [StemCombination; 5] = [
    StemCombination {
        name: "갑기합(甲己合)",
        transforms_to: FiveElement::Earth,
    },
    StemCombination {
        name: "을경합(乙庚合)",
        transforms_to: FiveElement::Metal,
    },
    StemCombination {
        name: "병신합(丙辛合)",
        transforms_to: FiveElement::Water,
    },
    StemCombination {
        name: "정임합(丁壬合)",
        transforms_to: FiveElement::Wood,
    },
    StemCombination {
        name: "무계합(戊癸合)",
        transforms_to: FiveElement::Fire,
    },
];

/// Combination formed by two stems, if any. Stems five apart combine
/// (甲己, 乙庚, 丙辛, 丁壬, 戊癸), in either order.
pub fn stem_combination(a: HeavenlyStem, b: HeavenlyStem) -> Option<StemCombination> {
    let (lo, hi) = if a.index() <= b.index() {
        (a.index(), b.index())
    } else {
        (b.index(), a.index())
    };
    (hi - lo == 5).then(|| STEM_COMBINATIONS[lo as usize])
}

/// Day-stem relation between two people, `a` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStemRelation {
    /// Relation of `a`'s element toward `b`'s.
    pub relation: ElementRelation,
    /// e.g. `상생(相生) - 목생화(木生火)`.
    pub label: String,
    pub description: String,
    /// 60..=95 after any combination bonus.
    pub score: u8,
    pub combination: Option<StemCombination>,
}

const COMBINATION_BONUS: u8 = 15;
const COMBINATION_CAP: u8 = 95;

fn generating_image(e: FiveElement) -> &'static str {
    match e {
        FiveElement::Wood => "나무가 타면서 불을 만들어내듯",
        FiveElement::Fire => "불이 타고 난 재가 흙이 되듯",
        FiveElement::Earth => "흙 속에서 금속이 만들어지듯",
        FiveElement::Metal => "차가운 금속 표면에 이슬이 맺히듯",
        FiveElement::Water => "물이 나무를 키우듯",
    }
}

fn overcoming_image(e: FiveElement) -> &'static str {
    match e {
        FiveElement::Wood => "나무 뿌리가 흙을 잡아주듯",
        FiveElement::Fire => "불이 쇠를 녹여 유용한 도구를 만들듯",
        FiveElement::Earth => "둑이 물의 흐름을 조절하듯",
        FiveElement::Metal => "도끼가 나무를 다듬어 가구를 만들듯",
        FiveElement::Water => "물이 불을 조절하듯",
    }
}

/// Relation, score, and combination between two day stems.
///
/// Base scores: 비화 72, `a` generates `b` 88, `b` generates `a` 85,
/// `a` overcomes `b` 62, `b` overcomes `a` 60. A stem combination adds 15,
/// capped at 95.
pub fn day_stem_relation(a: HeavenlyStem, b: HeavenlyStem) -> DayStemRelation {
    let (ea, eb) = (a.element(), b.element());
    let (na, nb) = (element_plain_name(ea), element_plain_name(eb));
    let relation = ElementRelation::between(ea, eb);

    let (label, description, base) = match relation {
        ElementRelation::Same => (
            "비화(比和)".to_string(),
            format!(
                "두 분 모두 {na}({})의 기운을 타고났어요. 같은 기운끼리 만나면 서로를 깊이 이해할 수 있지만, 비슷한 부분에서 부딪힐 수도 있어요.",
                ea.hanja()
            ),
            72,
        ),
        ElementRelation::Generates => (
            format!(
                "상생(相生) - {}생{}({}生{})",
                ea.korean(),
                eb.korean(),
                ea.hanja(),
                eb.hanja()
            ),
            format!(
                "{na}({})이 {nb}({})를 살려주는 상생 관계예요. {}, 자연스럽게 상대를 성장시켜주는 관계예요.",
                ea.hanja(),
                eb.hanja(),
                generating_image(ea)
            ),
            88,
        ),
        ElementRelation::GeneratedBy => (
            format!(
                "상생(相生) - {}생{}({}生{})",
                eb.korean(),
                ea.korean(),
                eb.hanja(),
                ea.hanja()
            ),
            format!(
                "{nb}({})가 {na}({})을 살려주는 상생 관계예요. {}, 자연스럽게 상대를 성장시켜주는 관계예요.",
                eb.hanja(),
                ea.hanja(),
                generating_image(eb)
            ),
            85,
        ),
        ElementRelation::Overcomes => (
            format!(
                "상극(相剋) - {}극{}({}剋{})",
                ea.korean(),
                eb.korean(),
                ea.hanja(),
                eb.hanja()
            ),
            format!(
                "{na}({})이 {nb}({})를 제어하는 상극 관계예요. {}, 적절한 제어는 오히려 서로를 더 빛나게 만들어요.",
                ea.hanja(),
                eb.hanja(),
                overcoming_image(ea)
            ),
            62,
        ),
        ElementRelation::OvercomeBy => (
            format!(
                "상극(相剋) - {}극{}({}剋{})",
                eb.korean(),
                ea.korean(),
                eb.hanja(),
                ea.hanja()
            ),
            format!(
                "{nb}({})가 {na}({})을 제어하는 상극 관계예요. {}, 적절한 긴장감이 오히려 관계를 성장시키는 원동력이 돼요.",
                eb.hanja(),
                ea.hanja(),
                overcoming_image(eb)
            ),
            60,
        ),
    };

    let combination = stem_combination(a, b);
    let score = match combination {
        Some(_) => (base + COMBINATION_BONUS).min(COMBINATION_CAP),
        None => base,
    };

    DayStemRelation {
        relation,
        label,
        description,
        score,
        combination,
    }
}
