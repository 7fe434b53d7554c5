//! Daily fortune (오늘의 운세).
//!
//! The day's stem is classified against the natal day stem; the seed over
//! `YYYY-MM-DD` + natal day-stem hanja + gender selects the detail line,
//! score, and lucky picks.

use chrono::NaiveDate;
use saju_base::{SajuChart, TenGod, day_ganji, ten_god};
use serde::Serialize;

use crate::lucky::{DIRECTIONS, LUCKY_COLORS, LUCKY_FOODS, LUCKY_ITEMS, pick};
use crate::seed::fortune_seed;

/// Lowest daily score; scores span `BASE..=BASE + 30`.
pub const DAILY_SCORE_BASE: u8 = 70;

/// A day's fortune for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFortune {
    pub date: NaiveDate,
    pub ten_god: TenGod,
    pub score: u8,
    pub summary: &'static str,
    pub detail: &'static str,
    /// Which of the three detail lines was chosen.
    pub detail_slot: u8,
    pub lucky_color: &'static str,
    pub lucky_food: &'static str,
    pub lucky_item: &'static str,
    pub direction: &'static str,
}

struct DailyMessages {
    summary: &'static str,
    details: [&'static str; 3],
}

/// Messages indexed by [`TenGod::index`].
const DAILY_MESSAGES: [DailyMessages; 10] = [
    DailyMessages {
        summary: "나의 주관이 뚜렷해지고 에너지가 넘치는 날입니다.",
        details: [
            "자신감이 상승하여 계획했던 일을 추진하기 좋습니다. 다만 독단적인 결정은 피하세요.",
            "동료나 친구와의 유대감이 깊어지는 날입니다. 함께 식사하며 대화를 나눠보세요.",
            "자신의 역량을 발휘할 기회가 찾아옵니다. 주저하지 말고 실력을 보여주세요.",
        ],
    },
    DailyMessages {
        summary: "경쟁심이 생기고 변화를 추구하게 되는 날입니다.",
        details: [
            "뜻밖의 지출이 생길 수 있으니 자산 관리에 유의하세요. 충동구매는 금물입니다.",
            "선의의 경쟁이 성장의 발판이 됩니다. 타인의 성공을 질투하기보다 배울 점을 찾으세요.",
            "예상치 못한 인연으로부터 자극을 받게 됩니다. 새로운 시각으로 세상을 바라보세요.",
        ],
    },
    DailyMessages {
        summary: "풍요롭고 즐거운 기운이 가득한 날입니다.",
        details: [
            "먹을 복과 즐길 거리가 풍부해지는 날입니다. 소중한 사람들과 맛있는 음식을 즐기세요.",
            "창의적인 아이디어가 샘솟는 날입니다. 예술적인 활동이나 기획 업무에 큰 성과가 있습니다.",
            "마음의 여유가 생겨 주변 사람들에게 너그러워집니다. 긍정적인 에너지를 전파하세요.",
        ],
    },
    DailyMessages {
        summary: "표현력이 좋아지고 재능을 뽐내기 좋은 날입니다.",
        details: [
            "말솜씨가 화려해져 설득력이 높아지는 날입니다. 발표나 미팅에서 유리한 고지를 점하세요.",
            "기존의 틀을 깨는 혁신적인 생각이 떠오릅니다. 변화를 두려워하지 말고 시도해 보세요.",
            "감수성이 예민해질 수 있으니 감정 조절에 유의하세요. 예술로 승화시키면 좋습니다.",
        ],
    },
    DailyMessages {
        summary: "활동 영역이 넓어지고 의외의 성과가 기대되는 날입니다.",
        details: [
            "생각지 못한 곳에서 재물운이 따릅니다. 작은 투자나 복권 구매도 나쁘지 않은 선택입니다.",
            "역동적인 활동이 운을 높여줍니다. 야외 활동이나 여행 계획을 세워보세요.",
            "과감한 결정이 필요한 순간입니다. 자신의 직관을 믿고 움직여보세요.",
        ],
    },
    DailyMessages {
        summary: "안정적인 흐름 속에 성실함이 빛을 발하는 날입니다.",
        details: [
            "차곡차곡 쌓아온 노력이 결실을 맺는 날입니다. 꼼꼼한 일 처리가 인정을 받습니다.",
            "재무 상태를 점검하고 장기적인 계획을 세우기에 최적의 날입니다.",
            "가정이나 직장에서의 안정감이 높아집니다. 평범한 일상 속의 행복을 만끽하세요.",
        ],
    },
    DailyMessages {
        summary: "강한 책임감과 리더십이 요구되는 날입니다.",
        details: [
            "어려운 과제가 주어질 수 있지만, 이를 극복하면 큰 명예가 따릅니다.",
            "긴장감을 늦추지 말고 철저히 준비하세요. 당신의 카리스마가 돋보이는 날입니다.",
            "건강 관리에 유의하며 무리한 일정은 피하는 것이 좋습니다.",
        ],
    },
    DailyMessages {
        summary: "원칙과 질서 속에서 신뢰를 쌓는 날입니다.",
        details: [
            "윗사람이나 조직으로부터 신임을 얻게 되는 날입니다. 성실한 태도를 유지하세요.",
            "공적인 업무나 행정적인 절차를 처리하기에 매우 유리한 날입니다.",
            "단정한 차림새와 예의 바른 태도가 행운을 불러옵니다.",
        ],
    },
    DailyMessages {
        summary: "직관력이 날카로워지고 전문 지식을 습득하기 좋은 날입니다.",
        details: [
            "철학적이고 심오한 분야에 관심이 생기는 날입니다. 독서나 명상을 즐겨보세요.",
            "독특한 문제 해결 방식이 빛을 발합니다. 남들이 보지 못하는 부분을 찾아내세요.",
            "혼자만의 시간이 에너지를 충전해 줍니다. 내면의 소리에 귀를 기울이세요.",
        ],
    },
    DailyMessages {
        summary: "따뜻한 도움의 손길과 배움의 기쁨이 있는 날입니다.",
        details: [
            "주변의 귀인이 당신을 돕는 날입니다. 조언을 구하면 명쾌한 답을 얻을 수 있습니다.",
            "문서운이 좋아 계약이나 자격증 취득에 유리합니다. 준비한 것을 실행에 옮기세요.",
            "어머니와 같은 따뜻한 보살핌을 받거나 베풀게 되는 포근한 날입니다.",
        ],
    },
];

/// Seed text for a chart on a given day.
pub fn daily_seed_text(chart: &SajuChart, as_of: NaiveDate) -> String {
    format!(
        "{}{}{}",
        as_of.format("%Y-%m-%d"),
        chart.day_master().hanja(),
        chart.gender.as_str()
    )
}

/// Fortune for `chart` on `as_of`.
pub fn daily_fortune(chart: &SajuChart, as_of: NaiveDate) -> DailyFortune {
    let today = day_ganji(as_of);
    let god = ten_god(today.stem, chart.day_master());
    let seed = fortune_seed(&daily_seed_text(chart, as_of));
    let messages = &DAILY_MESSAGES[god.index() as usize];
    let slot = (seed % 3) as usize;

    DailyFortune {
        date: as_of,
        ten_god: god,
        score: DAILY_SCORE_BASE + (seed % 31) as u8,
        summary: messages.summary,
        detail: messages.details[slot],
        detail_slot: slot as u8,
        lucky_color: pick(&LUCKY_COLORS, seed),
        lucky_food: pick(&LUCKY_FOODS, seed),
        lucky_item: pick(&LUCKY_ITEMS, seed),
        direction: pick(&DIRECTIONS, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{ALL_TEN_GODS, compute_chart};
    use saju_time::Gender;

    fn chart(gender: Gender) -> SajuChart {
        let birth = NaiveDate::from_ymd_opt(1990, 5, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        compute_chart(birth, gender)
    }

    #[test]
    fn seed_text_format() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(daily_seed_text(&chart(Gender::Female), d), "2026-10-19庚female");
    }

    #[test]
    fn messages_cover_every_ten_god() {
        for g in ALL_TEN_GODS {
            let m = &DAILY_MESSAGES[g.index() as usize];
            assert!(!m.summary.is_empty());
            assert!(m.details.iter().all(|d| !d.is_empty()));
        }
    }

    #[test]
    fn score_in_range_over_a_year() {
        let c = chart(Gender::Male);
        let mut d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        for _ in 0..365 {
            let f = daily_fortune(&c, d);
            assert!((70..=100).contains(&f.score));
            assert!(f.detail_slot < 3);
            d = d.succ_opt().unwrap();
        }
    }
}
