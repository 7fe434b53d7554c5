//! Lifetime reading (평생 사주 풀이) keyed by the chart's element balance.

use saju_base::{FiveElement, SajuChart};
use serde::Serialize;

use crate::lucky::{LuckyProfile, lucky_profile};
use crate::seed::chart_seed;

/// Four life-area scores, each with one decimal of resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FortuneScores {
    /// 70.0..=94.9
    pub wealth: f64,
    /// 65.0..=94.9
    pub health: f64,
    /// 60.0..=94.9
    pub love: f64,
    /// 75.0..=94.9
    pub career: f64,
}

/// Narrative and scores derived from a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FortuneDetails {
    pub summary: &'static str,
    pub main_element: FiveElement,
    /// Plain-word name of the main element (나무, 불, 흙, 쇠, 물).
    pub main_element_name: &'static str,
    pub advice: &'static str,
    pub scores: FortuneScores,
    pub lucky: &'static LuckyProfile,
}

const SUMMARIES: [[&str; 3]; 5] = [
    [
        "성장과 발전의 기운이 강합니다.",
        "창의적인 아이디어가 샘솟는 시기입니다.",
        "새로운 시작을 하기에 최적의 조건입니다.",
    ],
    [
        "열정과 에너지가 넘치는 구성입니다.",
        "자신의 능력을 널리 알릴 기회가 많습니다.",
        "화려하고 역동적인 삶의 태도를 가집니다.",
    ],
    [
        "안정감과 신뢰가 바탕이 되는 사주입니다.",
        "중재자로서의 능력이 탁월합니다.",
        "결실을 맺고 저장하는 능력이 좋습니다.",
    ],
    [
        "결단력과 정의감이 돋보이는 구성입니다.",
        "군더더기 없는 깔끔한 처세가 강점입니다.",
        "단단한 의지로 목표를 달성하는 힘이 있습니다.",
    ],
    [
        "지혜롭고 유연한 사고방식을 가졌습니다.",
        "통찰력이 깊어 본질을 꿰뚫어 봅니다.",
        "주변과 잘 융화되면서도 자신의 흐름을 유지합니다.",
    ],
];

/// Advice keyed by the weakest element.
const ADVICE: [&str; 5] = [
    "지나친 의욕보다는 내실을 다지는 것이 중요합니다.",
    "감정 조절에 유의하며 차분함을 유지하세요.",
    "변화를 두려워하지 말고 유연하게 대처하세요.",
    "주변 사람들에게 조금 더 따뜻한 포용력을 보여주세요.",
    "생각만 하기보다는 실행에 옮기는 용기가 필요합니다.",
];

const ELEMENT_PLAIN_NAMES: [&str; 5] = ["나무", "불", "흙", "쇠", "물"];

/// Plain-word Korean name of an element (나무, 불, 흙, 쇠, 물).
pub fn element_plain_name(element: FiveElement) -> &'static str {
    ELEMENT_PLAIN_NAMES[element.index() as usize]
}

fn tenths(base: u32, seed: u32, modulus: u32) -> f64 {
    base as f64 + (seed % modulus) as f64 / 10.0
}

/// Lifetime reading for `chart`.
pub fn lifetime_fortune(chart: &SajuChart) -> FortuneDetails {
    let seed = chart_seed(chart);
    let balance = chart.element_balance();
    let strongest = balance.strongest();
    let weakest = balance.weakest();

    FortuneDetails {
        summary: SUMMARIES[strongest.index() as usize][(seed % 3) as usize],
        main_element: strongest,
        main_element_name: element_plain_name(strongest),
        advice: ADVICE[weakest.index() as usize],
        scores: FortuneScores {
            wealth: tenths(70, seed, 250),
            health: tenths(65, seed >> 2, 300),
            love: tenths(60, seed >> 4, 350),
            career: tenths(75, seed >> 6, 200),
        },
        lucky: lucky_profile(strongest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_base::compute_chart;
    use saju_time::Gender;

    fn chart(y: i32, m: u32, d: u32, h: u32) -> SajuChart {
        let birth = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        compute_chart(birth, Gender::Male)
    }

    #[test]
    fn main_element_is_strongest() {
        // 1990-05-15 08:xx is metal-heavy and has no wood.
        let f = lifetime_fortune(&chart(1990, 5, 15, 8));
        assert_eq!(f.main_element, FiveElement::Metal);
        assert_eq!(f.main_element_name, "쇠");
        assert_eq!(f.advice, ADVICE[FiveElement::Wood.index() as usize]);
        assert_eq!(f.lucky.element, FiveElement::Metal);
        assert!(SUMMARIES[3].contains(&f.summary));
    }

    #[test]
    fn scores_within_bands() {
        let mut d = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        for _ in 0..400 {
            let f = lifetime_fortune(&compute_chart(d.and_hms_opt(10, 0, 0).unwrap(), Gender::Female));
            assert!((70.0..95.0).contains(&f.scores.wealth));
            assert!((65.0..95.0).contains(&f.scores.health));
            assert!((60.0..95.0).contains(&f.scores.love));
            assert!((75.0..95.0).contains(&f.scores.career));
            d = d + chrono::Duration::days(37);
        }
    }

    #[test]
    fn gender_does_not_change_reading() {
        let birth = NaiveDate::from_ymd_opt(1988, 8, 8)
            .unwrap()
            .and_hms_opt(8, 8, 0)
            .unwrap();
        let m = lifetime_fortune(&compute_chart(birth, Gender::Male));
        let f = lifetime_fortune(&compute_chart(birth, Gender::Female));
        assert_eq!(m, f);
    }
}
