//! Yearly fortune for 2026, the 丙午 (red horse) year (신년운세).
//!
//! Readings are keyed by the natal day-stem element. Each element carries a
//! fixed table of twelve monthly themes and scores plus an overview and four
//! life-area texts written against the fire-heavy year.

use saju_base::{FiveElement, Ganji, HeavenlyStem, SajuChart, year_ganji};
use serde::Serialize;

/// Year the monthly tables and texts describe.
pub const YEARLY_FORTUNE_YEAR: i32 = 2026;

/// Coarse bucket of a monthly score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// 85 and above.
    High,
    /// 75..=84
    Good,
    /// 70..=74
    Fair,
    Low,
}

impl ScoreTier {
    pub const fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Self::High,
            75..=84 => Self::Good,
            70..=74 => Self::Fair,
            _ => Self::Low,
        }
    }
}

/// One month of the yearly reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyFortune {
    /// 1..=12
    pub month: u8,
    pub score: u8,
    pub tier: ScoreTier,
    pub theme: &'static str,
}

/// Yearly reading for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyFortune {
    pub year: i32,
    pub year_ganji: Ganji,
    pub day_element: FiveElement,
    pub months: [MonthlyFortune; 12],
    /// Overview with the day stem written as `庚(경)`.
    pub analysis: String,
    pub wealth: &'static str,
    pub career: &'static str,
    pub love: &'static str,
    pub health: &'static str,
}

struct MonthlyTable {
    themes: [&'static str; 12],
    scores: [u8; 12],
}

const MONTHLY: [MonthlyTable; 5] = [
    // 木
    MonthlyTable {
        themes: [
            "새해 첫 달, 목생화(木生火)의 기운으로 새로운 계획을 세우기 좋은 시기입니다. 올해의 큰 그림을 그려보세요.",
            "봄의 기운이 시작되며 당신의 에너지가 상승합니다. 새로운 프로젝트나 학습을 시작하기에 최적의 시기입니다.",
            "목(木)의 기운이 가장 강한 달입니다. 성장과 발전의 기회가 찾아오니 적극적으로 움직이세요.",
            "봄의 절정기로, 그동안 준비한 것들이 싹을 틔우기 시작합니다. 인간관계에서도 좋은 소식이 있을 수 있습니다.",
            "화(火)의 기운이 강해지면서 당신의 노력이 빛을 발합니다. 사회적 인정을 받을 수 있는 기회가 옵니다.",
            "상반기를 마무리하며 중간 점검이 필요한 시기입니다. 지나친 욕심은 버리고 현재에 집중하세요.",
            "하반기의 시작으로, 새로운 방향 전환이 가능한 달입니다. 건강 관리에 특히 신경 쓰세요.",
            "금(金)의 기운이 강해져 결단이 필요한 상황이 올 수 있습니다. 신중하되 과감하게 행동하세요.",
            "가을의 수확기로, 상반기의 노력이 결실을 맺기 시작합니다. 재물운이 상승하는 시기입니다.",
            "변화의 기운이 강한 달입니다. 새로운 기회가 찾아오지만, 신중한 판단이 필요합니다.",
            "수(水)의 기운이 강해지며 내면의 성찰이 필요한 시기입니다. 내년을 위한 준비를 시작하세요.",
            "한 해를 마무리하며 감사하는 마음을 가지세요. 가족과의 시간이 행운을 가져다줍니다.",
        ],
        scores: [75, 82, 90, 85, 88, 72, 78, 70, 85, 76, 73, 80],
    },
    // 火
    MonthlyTable {
        themes: [
            "새해 시작과 함께 열정이 불타오릅니다. 다만 너무 급하게 서두르지 말고 차분하게 계획을 세우세요.",
            "인간관계에서 좋은 기회가 찾아옵니다. 네트워킹에 적극적으로 참여하면 뜻밖의 행운이 있습니다.",
            "목생화(木生火)의 기운으로 당신의 매력이 빛나는 달입니다. 대인관계와 사교 활동에서 좋은 성과가 있습니다.",
            "창의적인 아이디어가 샘솟는 시기입니다. 새로운 프로젝트를 시작하거나 자기 표현에 집중하세요.",
            "화(火)의 기운이 절정에 달하는 달입니다. 명예와 인기가 상승하지만, 건강 관리에 주의하세요.",
            "에너지 소모가 큰 시기입니다. 충분한 휴식을 취하고, 무리한 일정은 피하세요.",
            "하반기 전환점으로, 새로운 목표를 설정하기 좋은 때입니다. 재물운이 서서히 상승합니다.",
            "토(土)의 기운이 당신을 안정시켜줍니다. 기반을 다지고 내실을 강화하는 데 집중하세요.",
            "가을의 기운이 당신의 열정을 차분하게 정리해줍니다. 그동안의 성과를 정리하고 다음 단계를 준비하세요.",
            "금(金)의 기운과 만나 도전적인 상황이 올 수 있습니다. 인내심을 가지고 대처하면 좋은 결과를 얻습니다.",
            "한 해의 마무리를 준비하며, 감사와 성찰의 시간을 가지세요. 가까운 사람들과의 관계가 중요합니다.",
            "따뜻한 마무리가 필요한 달입니다. 올 한 해의 성과를 축하하고, 새해를 위한 비전을 그려보세요.",
        ],
        scores: [80, 83, 88, 86, 92, 68, 78, 75, 80, 72, 76, 82],
    },
    // 土
    MonthlyTable {
        themes: [
            "안정적인 시작이 기대되는 달입니다. 기존의 계획을 점검하고 보완하는 데 집중하세요.",
            "화생토(火生土)의 기운으로 외부의 도움이 들어옵니다. 주변 사람들의 조언에 귀 기울이세요.",
            "새로운 인연이 찾아올 수 있는 달입니다. 열린 마음으로 사람들을 만나보세요.",
            "부동산이나 실물 자산에서 좋은 기회가 있을 수 있습니다. 신중하게 검토하되 기회를 놓치지 마세요.",
            "사회적 활동이 활발해지는 시기입니다. 리더십을 발휘할 기회가 찾아옵니다.",
            "토(土)의 기운이 강한 달로, 안정과 평화가 찾아옵니다. 가족과의 시간을 소중히 여기세요.",
            "하반기의 전환점입니다. 새로운 도전보다는 기존의 것을 발전시키는 데 집중하세요.",
            "재물운이 상승하는 시기입니다. 저축이나 투자에 좋은 기회가 있을 수 있습니다.",
            "가을의 수확기로, 그동안의 노력이 결실을 맺습니다. 감사하는 마음을 가지세요.",
            "변화의 기운이 있지만, 당신의 안정적인 기반이 든든하게 지켜줍니다.",
            "내면의 성찰이 필요한 시기입니다. 자신을 돌아보고 내년의 계획을 세우세요.",
            "따뜻한 마무리가 필요한 달입니다. 주변 사람들에게 감사를 표현하세요.",
        ],
        scores: [78, 82, 80, 85, 83, 88, 76, 84, 87, 79, 75, 81],
    },
    // 金
    MonthlyTable {
        themes: [
            "새해의 시작이지만 조심스러운 접근이 필요합니다. 무리한 계획보다는 실현 가능한 목표를 세우세요.",
            "인내심이 필요한 달입니다. 어려움이 있더라도 포기하지 말고 꾸준히 나아가세요.",
            "봄의 기운이 당신에게 새로운 활력을 줍니다. 건강 관리와 자기 계발에 투자하세요.",
            "인간관계에서 좋은 변화가 있을 수 있습니다. 오래된 인연을 다시 만나보세요.",
            "화극금(火克金)의 기운이 강한 달이므로 스트레스 관리에 신경 쓰세요. 무리하지 마세요.",
            "상반기를 돌아보며 전략을 수정하기 좋은 시기입니다. 유연한 대처가 필요합니다.",
            "금(金)의 기운이 회복되는 달입니다. 자신감을 되찾고 적극적으로 움직이세요.",
            "가을의 기운이 당신을 빛나게 합니다. 전문성을 발휘할 기회가 찾아옵니다.",
            "재물운이 상승하는 시기입니다. 그동안의 인내가 보상받는 달입니다.",
            "결단력이 필요한 상황이 올 수 있습니다. 당신의 판단을 믿고 과감하게 행동하세요.",
            "내면의 힘을 기르는 시기입니다. 명상이나 운동으로 심신을 단련하세요.",
            "한 해를 마무리하며 성취감을 느끼는 달입니다. 어려운 한 해를 잘 견딘 자신을 칭찬하세요.",
        ],
        scores: [72, 68, 76, 80, 65, 73, 82, 86, 88, 84, 78, 83],
    },
    // 水
    MonthlyTable {
        themes: [
            "수(水)의 기운이 강한 시작입니다. 직관을 믿고 새해의 방향을 설정하세요.",
            "지혜로운 판단이 빛을 발하는 달입니다. 주변에서 조언을 구하는 사람이 많아집니다.",
            "봄의 기운과 만나 수생목(水生木)의 조화가 이루어집니다. 새로운 시작에 유리한 시기입니다.",
            "창의적인 아이디어가 풍부한 달입니다. 학습이나 연구에 좋은 성과가 있습니다.",
            "사회적 활동이 활발해지지만, 에너지 관리가 중요합니다. 적절한 휴식을 취하세요.",
            "수극화(水克火)의 기운으로 당신의 차분함이 빛을 발합니다. 중요한 결정에서 좋은 판단을 내립니다.",
            "하반기의 전환점으로, 새로운 학습이나 여행이 행운을 가져다줍니다.",
            "금생수(金生水)의 기운으로 외부의 도움이 들어옵니다. 좋은 인연을 만날 수 있습니다.",
            "가을의 기운이 당신의 지혜를 더욱 깊게 합니다. 중요한 프로젝트에 집중하세요.",
            "재물운이 상승하는 시기입니다. 정보를 활용한 투자에서 좋은 결과를 얻을 수 있습니다.",
            "수(水)의 기운이 절정에 달하는 달입니다. 내면의 평화를 찾고 자기 성찰의 시간을 가지세요.",
            "한 해를 지혜롭게 마무리하는 달입니다. 내년을 위한 비전을 명확히 하세요.",
        ],
        scores: [85, 83, 88, 86, 78, 84, 80, 86, 85, 82, 90, 84],
    },
];

const YEAR_ANALYSIS: [(&str, &str); 5] = [
    (
        "2026년은 병오년(丙午年), 즉 붉은 말의 해예요. 올해의 주인공인 병화(丙火)와 오화(午火)는 모두 불(火)의 기운을 가지고 있어서, 열정과 활력이 넘치는 한 해가 될 거예요!\\n\\n",
        " 일간이신 당신에게 올해는 \"목생화(木生火)\"의 원리가 작용해요. 쉽게 말하면, 나무(木)가 불(火)을 키워주는 관계예요. 당신의 기운이 세상을 밝히는 빛이 되는 해라고 할 수 있답니다!\\n\\n구체적으로 말하면, 당신이 가진 재능과 능력이 세상에 알려지고 인정받는 시기예요. 그동안 묵묵히 준비해온 것들이 드디어 빛을 발하게 돼요. 특히 상반기(1~6월)에 중요한 전환점이 있을 수 있으니, 기회가 왔을 때 주저하지 마세요!\\n\\n다만 주의할 점도 있어요. 나무가 불에 타면 재가 되듯이, 지나치게 에너지를 소모하면 번아웃이 올 수 있답니다. 열정을 쏟되, 반드시 충분한 휴식을 취해주세요. 건강 관리가 올해의 핵심 과제예요.",
    ),
    (
        "2026년은 병오년(丙午年), 붉은 말의 해예요. 천간 병화(丙火)와 지지 오화(午火)가 모두 불(火)의 기운이라서, 올해는 불의 기운이 매우 강한 해랍니다.\\n\\n",
        " 일간이신 당신에게 올해는 \"비겁(比劫)\"의 해예요. 쉽게 말하면, 나와 같은 기운이 강해지는 해라는 뜻이에요. 이건 두 가지 의미를 가지고 있답니다.\\n\\n좋은 면으로는, 당신의 존재감과 영향력이 극대화돼요! 리더십을 발휘할 기회가 많아지고, 대중적 인기나 명예가 상승해요. 같은 뜻을 가진 동료들과의 협력에서 큰 시너지를 낼 수 있답니다.\\n\\n주의할 면으로는, 같은 기운이 강하다는 것은 경쟁도 치열해진다는 뜻이에요. 라이벌이 등장하거나, 재물의 유출이 있을 수 있으니 투자나 큰 지출은 신중하게 결정하세요.\\n\\n건강 면에서는 \"과열\"에 주의해야 해요. 심장, 혈압, 눈 건강에 특히 신경 쓰고, 충분한 수분 섭취와 휴식이 필요하답니다.",
    ),
    (
        "2026년은 병오년(丙午年), 붉은 말의 해예요. 올해의 기운인 병화(丙火)와 오화(午火)는 모두 불(火)의 기운이에요.\\n\\n",
        " 일간이신 당신에게 올해는 \"화생토(火生土)\"의 원리가 작용해요. 불(火)이 흙(土)을 만들어주는 관계로, 쉽게 말하면 외부에서 당신에게 기운과 도움이 들어오는 아주 좋은 해랍니다!\\n\\n주변 사람들의 지원과 격려가 당신을 더욱 강하게 만들어주고, 새로운 기회가 자연스럽게 찾아와요. 특히 부동산, 안정적인 투자, 기반 확장에 유리한 해예요.\\n\\n인간관계에서도 든든한 지원군을 얻게 돼요. 멘토나 조력자가 나타날 수 있으니, 새로운 만남에 열린 마음을 가져보세요.\\n\\n다만 화(火)의 기운이 강해서 조급해질 수 있어요. 당신의 가장 큰 장점인 신중함과 안정감을 유지하면서, 기회를 잡으세요!",
    ),
    (
        "2026년은 병오년(丙午年), 붉은 말의 해예요. 올해의 기운인 병화(丙火)와 오화(午火)는 모두 불(火)의 기운이에요.\\n\\n",
        " 일간이신 당신에게 올해는 \"화극금(火克金)\"의 원리가 작용해요. 불(火)이 쇠(金)를 녹이는 관계로, 외부의 압박이나 도전이 있을 수 있는 해랍니다.\\n\\n하지만 걱정하지 마세요! 쇠가 불에 단련되면 더 강한 강철이 되듯이, 올해의 시련은 당신을 더욱 단단하게 만들어줄 거예요. 중요한 것은 정면 돌파보다는 지혜로운 우회 전략을 사용하는 거예요.\\n\\n올해는 내실을 다지는 데 집중하세요. 화려한 성과보다는 실력을 쌓고, 인맥을 관리하며, 건강을 챙기는 것이 현명해요. 하반기(7~12월)부터는 상황이 호전되기 시작하니, 상반기를 잘 견디면 좋은 결과가 찾아올 거예요!\\n\\n건강 면에서는 호흡기, 피부, 스트레스 관리에 특히 신경 써주세요.",
    ),
    (
        "2026년은 병오년(丙午年), 붉은 말의 해예요. 올해의 기운인 병화(丙火)와 오화(午火)는 모두 불(火)의 기운이에요.\\n\\n",
        " 일간이신 당신에게 올해는 \"수극화(水克火)\"의 원리가 작용해요. 물(水)이 불(火)을 끄는 관계로, 당신이 올해의 기운을 제어하는 위치에 있답니다!\\n\\n이것은 당신의 지혜와 통찰력이 빛을 발하는 해라는 의미예요. 주변에서 당신의 판단과 조언을 구하는 사람이 많아지고, 중요한 결정에서 핵심적인 역할을 맡게 돼요.\\n\\n특히 올해는 정보와 지식을 활용한 활동에서 큰 성과를 거둘 수 있어요. 연구, 분석, 컨설팅, IT 관련 분야에서 좋은 기회가 있답니다.\\n\\n다만 불(火)의 기운과 대립하면서 에너지 소모가 클 수 있어요. 충분한 휴식과 재충전이 필요하며, 신장과 방광 건강에 주의해주세요.",
    ),
];

const WEALTH: [&str; 5] = [
    "올해 재물운은 \"식상생재(食傷生財)\"의 흐름이 있어서, 당신의 재능과 노력이 직접적으로 수입으로 연결되는 해예요!\\n\\n상반기에는 새로운 수입원이 생길 가능성이 높아요. 특히 교육, 컨설팅, 창작 활동 등 당신의 전문성을 활용한 부수입이 기대돼요. 투자보다는 실력으로 벌어들이는 소득이 유리하답니다.\\n\\n하반기에는 안정적인 재물 흐름이 이어져요. 다만 9~10월경에 예상치 못한 지출이 있을 수 있으니, 비상금을 미리 준비해두세요.\\n\\n올해 재물 관리의 핵심은 \"씨앗을 뿌리되 조급하게 수확하지 않는 것\"이에요. 장기적인 관점에서 투자하고, 단기 수익에 현혹되지 마세요!",
    "올해 재물운은 비겁(比劫)의 영향으로 들어오는 돈도 많지만 나가는 돈도 많은 해예요.\\n\\n수입 면에서는 당신의 인기와 명예가 재물로 연결돼요. 강연, 방송, SNS 활동 등 대중과 소통하는 활동에서 수입이 기대된답니다.\\n\\n지출 면에서는 사교비, 경조사비 등 인간관계 관련 지출이 늘어날 수 있어요. 또한 경쟁자의 등장으로 예상치 못한 비용이 발생할 수 있으니 주의하세요.\\n\\n올해 재물 관리의 핵심은 \"수입의 30%는 반드시 저축하기\"예요. 들어오는 대로 쓰면 남는 것이 없을 수 있으니, 계획적인 재무 관리가 필요하답니다.",
    "올해 재물운은 화생토(火生土)의 기운으로 매우 좋아요! 외부에서 재물이 들어오는 흐름이 있어서, 안정적인 수입 증가가 기대돼요.\\n\\n특히 부동산, 실물 자산, 안정적인 투자에서 좋은 결과를 얻을 수 있어요. 4~5월과 9~10월에 좋은 투자 기회가 있을 수 있으니 주목하세요!\\n\\n직장인이라면 연봉 인상이나 보너스를 기대할 수 있고, 사업자라면 매출 증가가 예상돼요.\\n\\n올해 재물 관리의 핵심은 \"안정적인 자산을 늘리는 것\"이에요. 투기성 투자보다는 실물 자산이나 안정적인 금융 상품에 집중하세요.",
    "올해 재물운은 화극금(火克金)의 영향으로 다소 도전적인 해예요. 예상치 못한 지출이나 투자 손실에 주의가 필요해요.\\n\\n상반기에는 재물의 유출이 있을 수 있어요. 큰 투자나 보증은 피하고, 현금 유동성을 확보해두세요. 충동적인 소비도 자제하는 게 좋아요.\\n\\n하반기부터는 상황이 호전돼요! 특히 8~9월에 좋은 수입 기회가 찾아올 수 있으니, 그때를 위해 실력을 갈고닦으세요.\\n\\n올해 재물 관리의 핵심은 \"지키는 것이 버는 것\"이에요. 공격적인 투자보다는 수비적인 재무 전략이 유리하답니다.",
    "올해 재물운은 수극화(水克火)의 기운으로, 당신의 지혜가 재물로 연결되는 해예요!\\n\\n정보와 지식을 활용한 수입이 유리해요. 컨설팅, 분석, 교육, IT 관련 분야에서 좋은 수입을 기대할 수 있답니다. 특히 3~4월과 8~9월에 좋은 기회가 있어요.\\n\\n투자에서는 정보력이 핵심이에요. 충분한 조사와 분석을 바탕으로 한 투자는 좋은 결과를 가져오지만, 감에 의존한 투자는 피해주세요.\\n\\n올해 재물 관리의 핵심은 \"정보가 곧 돈\"이라는 거예요. 트렌드를 읽고, 시장의 흐름을 파악하는 데 시간을 투자해보세요!",
];

const CAREER: [&str; 5] = [
    "올해 직업운은 당신의 성장과 발전이 돋보이는 해예요! 새로운 프로젝트나 역할을 맡게 될 가능성이 높고, 이를 통해 실력을 인정받게 된답니다.\\n\\n직장인이라면 승진이나 부서 이동의 기회가 있을 수 있어요. 새로운 환경에서도 빠르게 적응하여 좋은 성과를 낼 수 있으니, 변화를 두려워하지 마세요!\\n\\n사업자라면 사업 확장이나 새로운 분야 진출을 고려해볼 만해요. 다만 무리한 확장보다는 단계적인 성장이 안전하답니다.\\n\\n취업 준비생이라면 교육, 문화, 환경 관련 분야에서 좋은 기회가 있어요.",
    "올해 직업운은 당신의 카리스마와 리더십이 빛나는 해예요! 조직 내에서 중요한 역할을 맡거나, 대외적으로 주목받는 기회가 많아져요.\\n\\n직장인이라면 프레젠테이션, 협상, 대외 업무에서 뛰어난 성과를 거둘 수 있어요. 팀을 이끄는 역할이 주어질 수 있으니, 리더십을 마음껏 발휘하세요!\\n\\n사업자라면 마케팅과 브랜딩에 투자하면 좋은 결과를 얻어요. SNS나 미디어를 활용한 홍보가 효과적이랍니다.\\n\\n다만 경쟁이 치열해질 수 있으니, 실력으로 승부하세요!",
    "올해 직업운은 안정적인 성장이 기대되는 해예요. 화생토(火生土)의 기운으로 상사나 선배의 지원을 받아 순조롭게 발전한답니다.\\n\\n직장인이라면 신뢰를 바탕으로 한 꾸준한 성과가 인정받아요. 특히 관리직이나 중재자 역할에서 빛을 발해요.\\n\\n사업자라면 기존 사업의 안정화와 내실 강화에 집중하면 좋은 결과를 얻어요. 새로운 파트너십도 기대할 수 있답니다.\\n\\n부동산, 건설, 식품, 교육 관련 분야에서 특히 좋은 기회가 있어요!",
    "올해 직업운은 도전과 성장이 공존하는 해예요. 화극금(火克金)의 기운으로 외부의 압박이 있지만, 이를 통해 더욱 단련된답니다.\\n\\n직장인이라면 업무량이 늘어나거나 어려운 프로젝트를 맡게 될 수 있어요. 하지만 이를 잘 해내면 큰 인정을 받게 돼요!\\n\\n사업자라면 경쟁이 치열해질 수 있으니, 차별화 전략에 집중하세요. 품질과 전문성으로 승부하면 좋은 결과를 얻어요.\\n\\n하반기부터 상황이 호전되니, 상반기에는 실력을 쌓는 데 집중하세요!",
    "올해 직업운은 당신의 지혜와 전문성이 빛나는 해예요! 수극화(水克火)의 기운으로 복잡한 상황에서 해결사 역할을 하게 돼요.\\n\\n직장인이라면 분석, 기획, 전략 수립 등의 업무에서 뛰어난 성과를 거둬요. 상사의 신뢰를 얻어 중요한 프로젝트에 참여할 기회가 있답니다.\\n\\n사업자라면 정보와 데이터를 활용한 의사결정이 좋은 결과를 가져와요. IT, 교육, 컨설팅 분야에서 새로운 기회가 있어요.\\n\\n해외 관련 업무나 글로벌 프로젝트에서도 좋은 성과를 기대할 수 있답니다!",
];

const LOVE: [&str; 5] = [
    "올해 애정운은 새로운 만남과 성장이 기대되는 해예요! 목생화(木生火)의 기운으로 당신의 매력이 빛나며, 주변의 관심을 끌게 된답니다.\\n\\n미혼이라면 3~5월, 9~10월에 좋은 인연을 만날 가능성이 높아요. 학습 모임, 동호회, 직장 내에서 자연스러운 만남이 기대돼요.\\n\\n기혼이라면 배우자와의 관계가 더욱 깊어지는 해예요. 함께 새로운 것을 배우거나 여행을 계획하면 관계가 더욱 돈독해진답니다.\\n\\n다만 지나친 열정이 상대방을 부담스럽게 할 수 있으니, 적절한 거리감을 유지해주세요.",
    "올해 애정운은 열정적이지만 변동이 큰 해예요. 화(火)의 기운이 강해 감정의 기복이 클 수 있으니, 감정 조절에 신경 써주세요.\\n\\n미혼이라면 매력이 넘치는 해라서 만남의 기회는 많아요. 다만 여러 사람에게 관심을 받아 선택이 어려울 수 있어요. 진심으로 마음이 가는 사람에게 집중하세요!\\n\\n기혼이라면 배우자와의 소통에 더 신경 써주세요. 바쁜 일정 속에서도 함께하는 시간을 만드는 게 중요해요.\\n\\n6~7월에 감정적으로 힘든 시기가 올 수 있으니, 이때 인내심을 가져주세요.",
    "올해 애정운은 안정적이고 따뜻한 해예요. 화생토(火生土)의 기운으로 사랑이 깊어지고, 신뢰가 쌓이는 시기랍니다.\\n\\n미혼이라면 진지한 만남이 기대돼요. 특히 4~5월, 10~11월에 좋은 인연이 있을 수 있어요. 소개팅이나 중매를 통한 만남이 유리하답니다.\\n\\n기혼이라면 가정의 평화와 행복이 깊어지는 해예요. 가족 여행이나 함께하는 취미 활동이 관계를 더욱 돈독하게 해줘요.\\n\\n결혼을 고려하고 있다면 올해가 아주 좋은 시기예요!",
    "올해 애정운은 인내와 이해가 필요한 해예요. 화극금(火克金)의 기운으로 감정적인 갈등이 있을 수 있지만, 이를 통해 관계가 더 성숙해진답니다.\\n\\n미혼이라면 상반기보다는 하반기에 좋은 인연이 기대돼요. 8~10월에 운명적인 만남이 있을 수 있으니, 마음을 열어두세요!\\n\\n기혼이라면 배우자와의 의견 충돌이 있을 수 있어요. 자신의 주장만 고집하지 말고, 상대방의 입장에서 생각해보세요.\\n\\n올해 애정운의 핵심은 \"부드러움이 강함을 이긴다\"는 거예요.",
    "올해 애정운은 깊고 의미 있는 관계가 기대되는 해예요. 지적인 교감과 정서적 유대가 깊어지는 시기랍니다.\\n\\n미혼이라면 지적인 대화를 나눌 수 있는 상대를 만날 가능성이 높아요. 독서 모임, 학습 그룹, 온라인 커뮤니티에서 좋은 인연이 있을 수 있어요.\\n\\n기혼이라면 배우자와의 정서적 교감이 깊어지는 해예요. 서로의 꿈과 목표에 대해 진지하게 이야기하는 시간을 가져보세요.\\n\\n3~4월과 9~10월에 애정운이 특히 좋답니다!",
];

const HEALTH: [&str; 5] = [
    "올해 건강운에서 가장 주의해야 할 부분은 간(肝)과 눈 건강이에요. 목(木)은 간과 눈을 관장하는데, 화(火)의 기운이 강한 올해는 에너지 소모가 커서 간에 부담이 갈 수 있답니다.\\n\\n충분한 수면과 규칙적인 식사가 기본이에요. 특히 녹색 채소와 신맛 나는 과일을 많이 섭취하면 간 건강에 도움이 돼요.\\n\\n스트레스 관리도 중요해요. 산책, 요가, 명상 등 자연 속에서 하는 활동이 심신 안정에 효과적이랍니다.\\n\\n4~5월과 10~11월에 건강에 특히 주의하세요. 무리한 일정은 피하고, 정기 검진을 받는 것이 좋아요.",
    "올해 건강운에서 가장 주의해야 할 부분은 심장과 혈압이에요. 화(火)의 기운이 매우 강한 올해는 \"과열\"에 주의해야 해요.\\n\\n규칙적인 운동과 충분한 수분 섭취가 필수예요. 특히 유산소 운동보다는 요가, 수영 등 심신을 안정시키는 운동이 좋답니다.\\n\\n매운 음식이나 자극적인 음식은 줄이고, 쓴맛 나는 채소(여주, 셀러리 등)를 섭취하면 심장 건강에 도움이 돼요.\\n\\n5~7월에 건강에 특히 주의하세요. 더위에 약할 수 있으니, 여름철 건강 관리에 신경 써주세요!",
    "올해 건강운은 비교적 양호해요! 화생토(火生土)의 기운이 당신의 건강을 지원해주기 때문이에요.\\n\\n다만 소화기 건강에는 주의가 필요해요. 토(土)는 비장과 위장을 관장하므로, 규칙적인 식사와 균형 잡힌 식단이 중요하답니다.\\n\\n단맛 나는 음식(고구마, 단호박 등)을 적절히 섭취하면 비장 건강에 도움이 돼요. 과식은 피해주세요.\\n\\n규칙적인 생활 습관을 유지하면 올해 건강하게 보낼 수 있어요. 계절이 바뀌는 3월, 6월, 9월, 12월에 건강 점검을 하면 좋답니다.",
    "올해 건강운에서 가장 주의해야 할 부분은 호흡기와 피부예요. 화극금(火克金)의 기운으로 폐와 대장에 부담이 갈 수 있답니다.\\n\\n맑은 공기를 마시는 것이 중요해요. 공기청정기를 사용하고, 미세먼지가 심한 날은 외출을 자제하세요. 호흡 운동이나 명상이 폐 건강에 도움이 돼요.\\n\\n매운맛 나는 음식(무, 생강, 배)을 적절히 섭취하면 폐 건강에 좋아요. 피부 보습에도 신경 써주세요.\\n\\n5~7월에 건강에 특히 주의하세요. 스트레스가 건강에 직접적인 영향을 미치니, 적절한 해소 방법을 찾아보세요!",
    "올해 건강운에서 가장 주의해야 할 부분은 신장과 방광 건강이에요. 수(水)가 화(火)와 대립하면서 에너지 소모가 클 수 있답니다.\\n\\n충분한 수분 섭취가 가장 중요해요. 하루 8잔 이상의 물을 마시고, 카페인 섭취는 줄여주세요. 검은콩, 해조류, 견과류 등이 신장 건강에 도움이 돼요.\\n\\n보온에도 신경 써주세요. 특히 하체를 따뜻하게 유지하는 것이 중요해요. 족욕이나 반신욕이 건강에 좋답니다.\\n\\n1~2월과 11~12월에 건강에 특히 주의하세요. 충분한 휴식과 수면이 건강의 기본이에요!",
];
/// `庚(경)`: hanja with the hangul reading.
fn stem_label(stem: HeavenlyStem) -> String {
    format!("{}({})", stem.hanja(), stem.hangul())
}

/// Month-by-month scores and themes for a day element.
pub fn monthly_fortunes(element: FiveElement) -> [MonthlyFortune; 12] {
    let table = &MONTHLY[element.index() as usize];
    std::array::from_fn(|i| MonthlyFortune {
        month: i as u8 + 1,
        score: table.scores[i],
        tier: ScoreTier::from_score(table.scores[i]),
        theme: table.themes[i],
    })
}

/// 2026 reading keyed by the chart's day-stem element.
pub fn yearly_fortune(chart: &SajuChart) -> YearlyFortune {
    let stem = chart.day_master();
    let element = stem.element();
    let i = element.index() as usize;
    let (intro, rest) = YEAR_ANALYSIS[i];

    YearlyFortune {
        year: YEARLY_FORTUNE_YEAR,
        year_ganji: year_ganji(YEARLY_FORTUNE_YEAR),
        day_element: element,
        months: monthly_fortunes(element),
        analysis: format!("{intro}{}{rest}", stem_label(stem)),
        wealth: WEALTH[i],
        career: CAREER[i],
        love: LOVE[i],
        health: HEALTH[i],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_base::{ALL_ELEMENTS, Gender, compute_chart};

    fn chart(y: i32, m: u32, d: u32, h: u32, min: u32) -> SajuChart {
        let birth = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap();
        compute_chart(birth, Gender::Male)
    }

    #[test]
    fn tiers() {
        assert_eq!(ScoreTier::from_score(92), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(85), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(84), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(75), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(70), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(68), ScoreTier::Low);
    }

    #[test]
    fn months_are_numbered_in_order() {
        for element in ALL_ELEMENTS {
            let months = monthly_fortunes(element);
            for (i, m) in months.iter().enumerate() {
                assert_eq!(m.month as usize, i + 1);
                assert_eq!(m.tier, ScoreTier::from_score(m.score));
                assert!((60..=95).contains(&m.score));
                assert!(!m.theme.is_empty());
            }
        }
    }

    #[test]
    fn wood_peaks_in_march() {
        let months = monthly_fortunes(FiveElement::Wood);
        let best = months.iter().max_by_key(|m| m.score).unwrap();
        assert_eq!((best.month, best.score), (3, 90));
        assert!(best.theme.starts_with("목(木)의 기운이 가장 강한 달"));
    }

    #[test]
    fn analysis_names_the_day_stem() {
        // 庚辰 day.
        let y = yearly_fortune(&chart(1990, 5, 15, 8, 30));
        assert_eq!(y.day_element, FiveElement::Metal);
        assert_eq!(y.year_ganji.hanja(), "丙午");
        assert!(y.analysis.contains("庚(경) 일간이신"));
        assert!(y.analysis.starts_with("2026년은 병오년(丙午年)"));
        assert!(!y.analysis.contains("{"));
    }
}
