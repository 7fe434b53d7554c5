//! Golden values for seeded readings and pair scores.
//!
//! A = 1990-05-15 08:30 (庚 day, metal), B = 2000-01-01 00:00 (戊 day, earth).

use chrono::{NaiveDate, NaiveDateTime};
use saju_base::{ElementRelation, FiveElement, Gender, SajuChart, TenGod, compute_chart};
use saju_fortune::{
    FamilyMember, FamilyRole, FortuneError, RoleRelation, ScoreTier, daily_fortune,
    day_stem_relation, detailed_compatibility, family_element_balance, family_summary,
    fortune_seed, lifetime_fortune, pairwise_compatibility, relation_interpretation,
    tojeong_for_birth, yearly_fortune,
};
use serde_json::json;
use saju_time::{CalendarError, LunarMonthRecord, TableLunarCalendar};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn chart_a(gender: Gender) -> SajuChart {
    compute_chart(at(1990, 5, 15, 8, 30), gender)
}

fn chart_b() -> SajuChart {
    compute_chart(at(2000, 1, 1, 0, 0), Gender::Male)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn pairwise_is_directional() {
    let (a, b) = (chart_a(Gender::Male), chart_b());
    // B's weakest element (金) is A's strongest; not the other way round.
    assert_eq!(pairwise_compatibility(&a, &b), 80);
    assert_eq!(pairwise_compatibility(&b, &a), 90);
}

#[test]
fn detailed_couple_reading() {
    let (a, b) = (chart_a(Gender::Male), chart_b());
    let c = detailed_compatibility(&a, &b);
    assert_eq!(c.element_score, 88);
    assert_eq!(c.yin_yang_score, 65);
    assert_eq!(c.complement_score, 95);
    assert_eq!((c.love, c.wealth, c.family), (84, 91, 79));
    assert_eq!(c.total, 84);
    assert_eq!(c.grade, "상");
    assert_eq!(detailed_compatibility(&b, &a), c);
}

#[test]
fn day_stem_relation_of_pair() {
    let r = day_stem_relation(chart_a(Gender::Male).day_master(), chart_b().day_master());
    assert_eq!(r.relation, ElementRelation::GeneratedBy);
    assert_eq!(r.score, 85);
    assert!(r.combination.is_none());
}

#[test]
fn daily_fortune_fixture() {
    let as_of = day(2026, 10, 19);
    assert_eq!(fortune_seed("2026-10-19庚female"), 306_957_307);

    let f = daily_fortune(&chart_a(Gender::Female), as_of);
    assert_eq!(f.ten_god, TenGod::PyeonGwan);
    assert_eq!(f.score, 89);
    assert_eq!(f.detail_slot, 1);
    assert_eq!(
        f.detail,
        "긴장감을 늦추지 말고 철저히 준비하세요. 당신의 카리스마가 돋보이는 날입니다."
    );
    assert_eq!(f.lucky_color, "Yellow");
    assert_eq!(f.lucky_food, "과일 주스");
    assert_eq!(f.lucky_item, "반지");
    assert_eq!(f.direction, "북쪽");

    assert_eq!(daily_fortune(&chart_b(), as_of).ten_god, TenGod::PyeonIn);
}

#[test]
fn daily_fortune_depends_on_gender() {
    let as_of = day(2026, 10, 19);
    let m = daily_fortune(&chart_a(Gender::Male), as_of);
    let f = daily_fortune(&chart_a(Gender::Female), as_of);
    assert_eq!(m.ten_god, f.ten_god);
    assert_ne!(fortune_seed("2026-10-19庚male"), fortune_seed("2026-10-19庚female"));
}

fn family() -> Vec<FamilyMember> {
    vec![
        FamilyMember::new("민준", FamilyRole::Me, chart_a(Gender::Male)),
        FamilyMember::new("서연", FamilyRole::Spouse, chart_b()),
    ]
}

#[test]
fn family_pair_interpretation() {
    let members = family();
    let r = relation_interpretation(&members[0], &members[1]);
    assert_eq!(r.score, 80);
    assert_eq!(r.title, "최고의 조화");
    assert_eq!(r.role_relation, RoleRelation::Spouses);
    assert!(r.description.starts_with("서연님(戊(무), 토(土))의 기운이 민준님(庚(경), 금(金))"));
    assert!(r.advice.starts_with("서연님의 조언과 도움을"));
}

#[test]
fn family_balance_and_summary() {
    let members = family();
    let balance = family_element_balance(&members);
    // 土 and 金 tie at one member; 土 comes first.
    assert_eq!(balance.strongest, FiveElement::Earth);
    // Zero-member buckets tie; the last one wins.
    assert_eq!(balance.weakest, FiveElement::Water);
    assert_eq!(balance.distribution[3].members, ["민준"]);
    assert!(balance.advice.contains("부족한 수(水)"));

    let s = family_summary(&members).unwrap();
    assert_eq!(s.overall_score, 80);
    assert!(s.harmony.contains("토(土)의 기운이 가장 강하여"));
    assert_eq!(s.strengths, ["민준님과 서연님은 상생 관계로, 서로에게 힘이 되는 사이입니다."]);
    assert_eq!(s.improvements.len(), 1);
    assert!(s.improvements[0].starts_with("전반적으로 조화로운 관계"));
    assert_eq!(s.lucky_activity, "텃밭 가꾸기, 도자기 체험, 가족 여행, 집 꾸미기");
}

#[test]
fn family_needs_two_members() {
    let mut members = family();
    members.truncate(1);
    assert_eq!(
        family_summary(&members),
        Err(FortuneError::NotEnoughMembers { found: 1 })
    );
}

fn lunar_table() -> TableLunarCalendar {
    TableLunarCalendar::new(vec![
        LunarMonthRecord {
            year: 1999,
            month: 11,
            leap: false,
            start: day(1999, 12, 8),
            days: 30,
        },
        LunarMonthRecord {
            year: 1999,
            month: 12,
            leap: false,
            start: day(2000, 1, 7),
            days: 29,
        },
    ])
    .unwrap()
}

#[test]
fn tojeong_through_lunar_calendar() {
    // 2000-01-01 is lunar 1999-11-25.
    let h = tojeong_for_birth(&chart_b(), &lunar_table(), 2026).unwrap();
    assert_eq!(h.korean_age, 27);
    assert_eq!(h.code, "343");
}

#[test]
fn tojeong_outside_lunar_table() {
    let err = tojeong_for_birth(&chart_a(Gender::Male), &lunar_table(), 2026).unwrap_err();
    assert_eq!(
        err,
        FortuneError::Calendar(CalendarError::SolarConversion {
            year: 1990,
            month: 5,
            day: 15
        })
    );
}

#[test]
fn yearly_metal_day_scores() {
    let y = yearly_fortune(&chart_a(Gender::Male));
    assert_eq!(y.year, 2026);
    assert_eq!(y.day_element, FiveElement::Metal);
    let scores: Vec<u8> = y.months.iter().map(|m| m.score).collect();
    assert_eq!(scores, [72, 68, 76, 80, 65, 73, 82, 86, 88, 84, 78, 83]);
    assert_eq!(y.months[4].tier, ScoreTier::Low);
    assert_eq!(
        y.months[4].theme,
        "화극금(火克金)의 기운이 강한 달이므로 스트레스 관리에 신경 쓰세요. 무리하지 마세요."
    );
    assert_eq!(y.months[8].tier, ScoreTier::High);
    assert!(y.analysis.contains("庚(경) 일간이신 당신에게 올해는 \"화극금(火克金)\""));
    assert!(y.wealth.starts_with("올해 재물운은 화극금(火克金)의 영향으로"));
}

#[test]
fn yearly_earth_day_scores() {
    let y = yearly_fortune(&chart_b());
    assert_eq!(y.day_element, FiveElement::Earth);
    let scores: Vec<u8> = y.months.iter().map(|m| m.score).collect();
    assert_eq!(scores, [78, 82, 80, 85, 83, 88, 76, 84, 87, 79, 75, 81]);
    assert!(y.analysis.contains("戊(무) 일간이신"));
}

#[test]
fn lifetime_json_shape() {
    let v = serde_json::to_value(lifetime_fortune(&chart_a(Gender::Male))).unwrap();
    assert_eq!(v["main_element"], "metal");
    assert_eq!(v["main_element_name"], "쇠");
    assert_eq!(v["lucky"]["element"], "metal");
    assert_eq!(v["lucky"]["numbers"], json!([4, 9]));
    for key in ["wealth", "health", "love", "career"] {
        assert!(v["scores"][key].is_f64(), "{key}");
    }
}

#[test]
fn couple_json_shape() {
    let v = serde_json::to_value(detailed_compatibility(&chart_a(Gender::Male), &chart_b())).unwrap();
    assert_eq!(
        v,
        json!({
            "total": 84,
            "grade": "상",
            "element_score": 88,
            "yin_yang_score": 65,
            "complement_score": 95,
            "love": 84,
            "wealth": 91,
            "family": 79,
        })
    );
}

#[test]
fn tojeong_json_shape() {
    let h = tojeong_for_birth(&chart_b(), &lunar_table(), 2026).unwrap();
    assert_eq!(
        serde_json::to_value(h).unwrap(),
        json!({
            "target_year": 2026,
            "korean_age": 27,
            "upper": 3,
            "middle": 4,
            "lower": 3,
            "code": "343",
        })
    );
}

#[test]
fn yearly_json_shape() {
    let v = serde_json::to_value(yearly_fortune(&chart_b())).unwrap();
    assert_eq!(v["year_ganji"], json!({ "stem": "丙", "branch": "午" }));
    assert_eq!(v["day_element"], "earth");
    assert_eq!(v["months"].as_array().map(Vec::len), Some(12));
    assert_eq!(v["months"][5]["month"], 6);
    assert_eq!(v["months"][5]["score"], 88);
    assert_eq!(v["months"][5]["tier"], "high");
}
