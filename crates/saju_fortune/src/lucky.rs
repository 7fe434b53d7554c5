//! Lucky-item tables: per-element profiles and the daily pick lists.

use saju_base::FiveElement;
use serde::Serialize;

/// Lucky attributes associated with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckyProfile {
    pub element: FiveElement,
    pub colors: &'static [&'static str],
    pub numbers: &'static [u8],
    pub foods: &'static [&'static str],
    pub directions: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

const PROFILES: [LuckyProfile; 5] = [
    LuckyProfile {
        element: FiveElement::Wood,
        colors: &["초록색", "청색"],
        numbers: &[3, 8],
        foods: &["신맛 나는 과일", "채소", "곡물"],
        directions: &["동쪽"],
        activities: &["산책", "독서", "새로운 계획 세우기"],
        avoid: &["지나친 음주", "충동적인 결정"],
    },
    LuckyProfile {
        element: FiveElement::Fire,
        colors: &["빨간색", "주황색"],
        numbers: &[2, 7],
        foods: &["쓴맛 나는 채소", "커피", "구운 요리"],
        directions: &["남쪽"],
        activities: &["운동", "사교 모임", "발표"],
        avoid: &["조급함", "다툼"],
    },
    LuckyProfile {
        element: FiveElement::Earth,
        colors: &["노란색", "브라운"],
        numbers: &[5, 0],
        foods: &["단맛 나는 단호박", "고구마", "뿌리 채소"],
        directions: &["중앙"],
        activities: &["명상", "부동산 관련 공부", "정리정돈"],
        avoid: &["게으름", "고집"],
    },
    LuckyProfile {
        element: FiveElement::Metal,
        colors: &["흰색", "금색", "은색"],
        numbers: &[4, 9],
        foods: &["매운맛 나는 음식", "무", "생강"],
        directions: &["서쪽"],
        activities: &["정리", "결단 내리기", "금속 공예"],
        avoid: &["냉소적인 태도", "슬픔"],
    },
    LuckyProfile {
        element: FiveElement::Water,
        colors: &["검은색", "회색"],
        numbers: &[1, 6],
        foods: &["짠맛 나는 해조류", "검은콩", "물"],
        directions: &["북쪽"],
        activities: &["휴식", "지식 탐구", "목욕"],
        avoid: &["두려움", "밤샘"],
    },
];

/// Profile for `element`.
pub fn lucky_profile(element: FiveElement) -> &'static LuckyProfile {
    &PROFILES[element.index() as usize]
}

/// Daily lucky colors (indexed by `seed % 10`).
pub const LUCKY_COLORS: [&str; 10] = [
    "Gold", "Silver", "Red", "Blue", "Green", "White", "Black", "Yellow", "Purple", "Pink",
];

/// Daily lucky foods (indexed by `seed % 10`).
pub const LUCKY_FOODS: [&str; 10] = [
    "비빔밥", "스테이크", "파스타", "스시", "샐러드", "된장찌개", "커피", "과일 주스", "삼겹살", "샌드위치",
];

/// Daily lucky items (indexed by `seed % 10`).
pub const LUCKY_ITEMS: [&str; 10] = [
    "향수", "손목시계", "다이어리", "손거울", "이어폰", "책", "안경", "반지", "모자", "스카프",
];

/// Daily lucky directions (indexed by `seed % 8`).
pub const DIRECTIONS: [&str; 8] = [
    "동쪽", "서쪽", "남쪽", "북쪽", "북동쪽", "남동쪽", "북서쪽", "남서쪽",
];

/// Pick from a fixed list by seed.
pub(crate) fn pick<T: Copy>(items: &[T], seed: u32) -> T {
    items[seed as usize % items.len()]
}
