//! Family analysis (가족 사주): pair relations, the family's element spread,
//! and an overall summary.
//!
//! Pair scores reuse [`pairwise_compatibility`], so they are directional:
//! member order matters.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use saju_base::{ALL_ELEMENTS, ElementRelation, FiveElement, HeavenlyStem, SajuChart};
use serde::Serialize;
use tracing::debug;

use crate::compatibility::pairwise_compatibility;
use crate::error::FortuneError;

/// A member's place in the family, relative to the user (나).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyRole {
    Me,
    Father,
    Mother,
    Son,
    Daughter,
    Grandfather,
    Grandmother,
    Spouse,
    Other,
}

impl FamilyRole {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Me => "나",
            Self::Father => "아버지",
            Self::Mother => "어머니",
            Self::Son => "아들",
            Self::Daughter => "딸",
            Self::Grandfather => "할아버지",
            Self::Grandmother => "할머니",
            Self::Spouse => "배우자",
            Self::Other => "기타",
        }
    }

    const fn is_parent(self) -> bool {
        matches!(
            self,
            Self::Father | Self::Mother | Self::Grandfather | Self::Grandmother
        )
    }

    const fn is_child(self) -> bool {
        matches!(self, Self::Son | Self::Daughter)
    }
}

impl Display for FamilyRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean())
    }
}

impl FromStr for FamilyRole {
    type Err = FortuneError;

    /// Accepts the Korean name or an English word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = match s.trim().to_ascii_lowercase().as_str() {
            "나" | "me" | "self" => Self::Me,
            "아버지" | "father" => Self::Father,
            "어머니" | "mother" => Self::Mother,
            "아들" | "son" => Self::Son,
            "딸" | "daughter" => Self::Daughter,
            "할아버지" | "grandfather" => Self::Grandfather,
            "할머니" | "grandmother" => Self::Grandmother,
            "배우자" | "spouse" => Self::Spouse,
            "기타" | "other" => Self::Other,
            _ => return Err(FortuneError::UnknownRole(s.to_string())),
        };
        Ok(role)
    }
}

/// Kinship between two roles, first member's side first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleRelation {
    ParentChild,
    ChildParent,
    Spouses,
    Siblings,
    Family,
}

impl RoleRelation {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::ParentChild => "부모-자녀",
            Self::ChildParent => "자녀-부모",
            Self::Spouses => "부부",
            Self::Siblings => "형제자매",
            Self::Family => "가족",
        }
    }
}

/// Kinship of `a` toward `b`.
pub fn role_relation(a: FamilyRole, b: FamilyRole) -> RoleRelation {
    use FamilyRole::*;
    // Me and Spouse stand as parents to children and as children to parents.
    let parent_of_child = |p: FamilyRole, c: FamilyRole| {
        (p.is_parent() || p == Spouse || p == Me) && c.is_child()
    };
    match (a, b) {
        _ if parent_of_child(a, b) => RoleRelation::ParentChild,
        _ if parent_of_child(b, a) => RoleRelation::ChildParent,
        (Me, p) if p.is_parent() => RoleRelation::ChildParent,
        (p, Me) if p.is_parent() => RoleRelation::ParentChild,
        (Father, Mother) | (Mother, Father) => RoleRelation::Spouses,
        (Grandfather, Grandmother) | (Grandmother, Grandfather) => RoleRelation::Spouses,
        (Me, Spouse) | (Spouse, Me) => RoleRelation::Spouses,
        _ if a.is_child() && b.is_child() => RoleRelation::Siblings,
        _ => RoleRelation::Family,
    }
}

/// A named person with a computed chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyMember {
    pub name: String,
    pub role: FamilyRole,
    pub chart: SajuChart,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, role: FamilyRole, chart: SajuChart) -> Self {
        Self {
            name: name.into(),
            role,
            chart,
        }
    }

    fn element(&self) -> FiveElement {
        self.chart.day_master().element()
    }
}

/// One element's share of the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyElementCount {
    pub element: FiveElement,
    pub count: usize,
    pub members: Vec<String>,
}

/// Day-stem element spread across the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyBalance {
    pub distribution: Vec<FamilyElementCount>,
    pub strongest: FiveElement,
    pub weakest: FiveElement,
    pub advice: String,
}

const STRONG_ADVICE: [&str; 5] = [
    "가족 전체적으로 목(木)의 기운이 강합니다. 성장과 발전의 에너지가 넘치지만, 때로는 서로 자기주장이 강해 충돌할 수 있습니다. 가족 회의를 통해 서로의 의견을 존중하는 문화를 만들어보세요. 봄나들이나 숲 산책이 가족 화합에 좋습니다.",
    "가족 전체적으로 화(火)의 기운이 강합니다. 열정적이고 활기찬 가정이지만, 감정적으로 격해질 수 있으니 서로 한 템포 쉬어가는 여유가 필요합니다. 가족 캠핑이나 바베큐 파티가 유대감을 높여줍니다.",
    "가족 전체적으로 토(土)의 기운이 강합니다. 안정적이고 든든한 가정이지만, 변화를 두려워하는 경향이 있습니다. 새로운 경험을 함께 시도해보세요. 가족 여행이나 새로운 취미 활동이 좋습니다.",
    "가족 전체적으로 금(金)의 기운이 강합니다. 원칙적이고 체계적인 가정이지만, 때로는 유연성이 부족할 수 있습니다. 가족 간 감정 표현을 더 자주 하고, 함께 웃을 수 있는 시간을 만들어보세요.",
    "가족 전체적으로 수(水)의 기운이 강합니다. 지적이고 깊이 있는 가정이지만, 각자의 세계에 빠져 소통이 부족할 수 있습니다. 정기적인 가족 식사 시간을 정해 대화의 시간을 가져보세요.",
];

const WEAK_ADVICE: [&str; 5] = [
    " 부족한 목(木)의 기운을 보완하려면 집에 초록 식물을 키우거나, 함께 등산이나 산책을 즐겨보세요.",
    " 부족한 화(火)의 기운을 보완하려면 가족이 함께 요리하거나, 따뜻한 조명의 거실에서 대화하는 시간을 가져보세요.",
    " 부족한 토(土)의 기운을 보완하려면 가족이 함께 텃밭을 가꾸거나, 정기적인 가족 모임을 만들어보세요.",
    " 부족한 금(金)의 기운을 보완하려면 가족 규칙을 함께 정하거나, 악기 연주 등 예술 활동을 함께 해보세요.",
    " 부족한 수(水)의 기운을 보완하려면 가족이 함께 독서하거나, 수영장이나 바다 여행을 계획해보세요.",
];

const LUCKY_ACTIVITIES: [&str; 5] = [
    "함께 등산, 산책, 식물 가꾸기, 독서 모임",
    "가족 캠핑, 바베큐, 요리 대회, 보드게임",
    "텃밭 가꾸기, 도자기 체험, 가족 여행, 집 꾸미기",
    "악기 연주, 박물관 관람, 가족 운동, 등산",
    "수영, 낚시, 온천 여행, 가족 영화 감상",
];

/// Histogram of members' day-stem elements.
///
/// Strongest is the first maximum in 木火土金水 order; weakest is the *last*
/// minimum, so with empty buckets 水 is reported before 木.
pub fn family_element_balance(members: &[FamilyMember]) -> FamilyBalance {
    let mut distribution: Vec<FamilyElementCount> = ALL_ELEMENTS
        .into_iter()
        .map(|element| FamilyElementCount {
            element,
            count: 0,
            members: Vec::new(),
        })
        .collect();
    for m in members {
        let bucket = &mut distribution[m.element().index() as usize];
        bucket.count += 1;
        bucket.members.push(m.name.clone());
    }

    let mut strongest = FiveElement::Wood;
    let mut weakest = FiveElement::Wood;
    for b in &distribution {
        if b.count > distribution[strongest.index() as usize].count {
            strongest = b.element;
        }
        if b.count <= distribution[weakest.index() as usize].count {
            weakest = b.element;
        }
    }

    let mut advice = STRONG_ADVICE[strongest.index() as usize].to_string();
    if weakest != strongest {
        advice.push_str(WEAK_ADVICE[weakest.index() as usize]);
    }

    FamilyBalance {
        distribution,
        strongest,
        weakest,
        advice,
    }
}

/// Interpretation of one ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationInterpretation {
    pub score: u8,
    pub title: &'static str,
    pub role_relation: RoleRelation,
    pub description: String,
    pub advice: String,
}

/// Title for a pair score.
pub fn relation_title(score: u8) -> &'static str {
    match score {
        80.. => "최고의 조화",
        65..=79 => "좋은 관계",
        50..=64 => "보통의 관계",
        _ => "노력이 필요한 관계",
    }
}

fn element_label(e: FiveElement) -> String {
    format!("{}({})", e.korean(), e.hanja())
}

fn stem_label(s: HeavenlyStem) -> String {
    format!("{}({})", s.hanja(), s.hangul())
}

/// Interpret the relation of `a` toward `b`.
pub fn relation_interpretation(a: &FamilyMember, b: &FamilyMember) -> RelationInterpretation {
    let score = pairwise_compatibility(&a.chart, &b.chart);
    let (ea, eb) = (a.element(), b.element());
    let (ka, kb) = (element_label(ea), element_label(eb));
    let (sa, sb) = (stem_label(a.chart.day_master()), stem_label(b.chart.day_master()));
    let (na, nb) = (&a.name, &b.name);
    let kin = role_relation(a.role, b.role);
    let rel = kin.korean();

    let (description, advice) = match ElementRelation::between(ea, eb) {
        ElementRelation::Generates => (
            format!(
                "{na}님({sa}, {ka})의 기운이 {nb}님({sb}, {kb})에게 자연스럽게 힘을 주는 상생(相生) 관계입니다. {rel}으로서 서로에게 긍정적인 영향을 주고받으며, {na}님이 {nb}님의 성장을 돕는 역할을 합니다."
            ),
            format!(
                "이미 좋은 관계이니 현재의 소통 방식을 유지하세요. {na}님이 {nb}님에게 격려와 응원을 보내면 더욱 좋은 시너지가 생깁니다."
            ),
        ),
        ElementRelation::GeneratedBy => (
            format!(
                "{nb}님({sb}, {kb})의 기운이 {na}님({sa}, {ka})에게 자연스럽게 힘을 주는 상생(相生) 관계입니다. {rel}으로서 {nb}님이 {na}님에게 든든한 지원군이 됩니다."
            ),
            format!(
                "{nb}님의 조언과 도움을 열린 마음으로 받아들이세요. 서로에 대한 감사를 자주 표현하면 관계가 더욱 깊어집니다."
            ),
        ),
        ElementRelation::Overcomes => (
            format!(
                "{na}님({sa}, {ka})과 {nb}님({sb}, {kb})은 상극(相剋) 관계로, 의견 충돌이 있을 수 있습니다. 하지만 이는 서로를 단련시키는 관계이기도 합니다. {rel}으로서 서로의 다름을 인정하는 것이 중요합니다."
            ),
            "서로의 의견이 다를 때는 감정적으로 대응하지 말고, 차분하게 대화하세요. 제3자(다른 가족 구성원)가 중재 역할을 하면 갈등이 쉽게 해결됩니다.".to_string(),
        ),
        ElementRelation::OvercomeBy => (
            format!(
                "{nb}님({sb}, {kb})과 {na}님({sa}, {ka})은 상극(相剋) 관계로, 때때로 긴장감이 있을 수 있습니다. 그러나 이 긴장감은 서로를 성장시키는 원동력이 될 수 있습니다."
            ),
            "서로의 장점에 집중하고, 단점은 너그럽게 이해하세요. 함께 운동이나 야외 활동을 하면 관계가 부드러워집니다.".to_string(),
        ),
        ElementRelation::Same => (
            format!(
                "{na}님({sa}, {ka})과 {nb}님({sb}, {kb})은 같은 {ka}의 기운을 가진 비화(比和) 관계입니다. 서로를 잘 이해하고 공감하는 사이이며, {rel}으로서 마음이 잘 통합니다."
            ),
            "비슷한 성향이라 편안하지만, 때로는 서로 다른 관점을 제시해주는 것도 필요합니다. 함께 새로운 경험을 하면 관계에 신선함을 더할 수 있습니다.".to_string(),
        ),
    };

    RelationInterpretation {
        score,
        title: relation_title(score),
        role_relation: kin,
        description,
        advice,
    }
}

/// Whole-family reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySummary {
    /// Rounded mean of every pair score (earlier member first).
    pub overall_score: u8,
    pub harmony: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub lucky_activity: &'static str,
    pub balance: FamilyBalance,
}

/// Summarize a family of at least two members.
pub fn family_summary(members: &[FamilyMember]) -> Result<FamilySummary, FortuneError> {
    if members.len() < 2 {
        return Err(FortuneError::NotEnoughMembers {
            found: members.len(),
        });
    }

    let mut total: u32 = 0;
    let mut pairs: u32 = 0;
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            total += pairwise_compatibility(&a.chart, &b.chart) as u32;
            pairs += 1;
            match ElementRelation::between(a.element(), b.element()) {
                ElementRelation::Generates | ElementRelation::GeneratedBy => strengths.push(format!(
                    "{}님과 {}님은 상생 관계로, 서로에게 힘이 되는 사이입니다.",
                    a.name, b.name
                )),
                ElementRelation::Overcomes | ElementRelation::OvercomeBy => improvements.push(format!(
                    "{}님과 {}님은 상극 관계이므로, 서로의 의견을 경청하는 노력이 필요합니다.",
                    a.name, b.name
                )),
                ElementRelation::Same => {}
            }
        }
    }
    let overall_score = (total as f64 / pairs as f64).round() as u8;

    if strengths.is_empty() {
        strengths.push("가족 구성원들이 비슷한 기운을 가지고 있어 서로를 잘 이해합니다.".to_string());
    }
    if improvements.is_empty() {
        improvements.push(
            "전반적으로 조화로운 관계이지만, 새로운 활동을 함께 시도하면 더욱 좋아집니다.".to_string(),
        );
    }

    let balance = family_element_balance(members);
    let strong = element_label(balance.strongest);
    let harmony = match overall_score {
        80.. => format!(
            "이 가족은 전체적으로 매우 조화로운 기운을 가지고 있습니다. 가족 구성원들의 오행이 서로를 잘 보완하며, 자연스러운 상생의 흐름이 있습니다. {strong}의 기운이 가장 강하여 가족의 중심 에너지가 됩니다."
        ),
        65..=79 => format!(
            "이 가족은 대체로 좋은 조화를 이루고 있습니다. 일부 구성원 간에 약간의 긴장이 있을 수 있지만, 서로에 대한 이해와 배려로 충분히 극복할 수 있습니다. {strong}의 기운이 가족을 이끌어가는 힘이 됩니다."
        ),
        50..=64 => format!(
            "이 가족은 다양한 기운이 섞여 있어 역동적인 관계를 형성합니다. 서로 다른 성향이 때로는 갈등의 원인이 되지만, 그만큼 서로에게 배울 점도 많습니다. {strong}의 기운을 중심으로 가족의 방향성을 맞추면 좋겠습니다."
        ),
        _ => "이 가족은 서로 다른 기운이 강하게 작용하여 의견 충돌이 잦을 수 있습니다. 하지만 다양성은 곧 가족의 강점이 될 수 있습니다. 서로의 차이를 인정하고 존중하는 것이 가족 화합의 열쇠입니다.".to_string(),
    };
    debug!(members = members.len(), pairs, overall_score, "family summary");

    Ok(FamilySummary {
        overall_score,
        harmony,
        strengths,
        improvements,
        lucky_activity: LUCKY_ACTIVITIES[balance.strongest.index() as usize],
        balance,
    })
}
