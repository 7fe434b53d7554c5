//! Golden four-pillar fixtures and whole-domain invariants.
//!
//! Inputs are KST civil time; hours follow the 23:30 子-hour convention.

use chrono::{NaiveDate, NaiveDateTime};
use saju_base::{
    ALL_STEMS, ALL_TEN_GODS, ElementBalance, FiveElement, Gender, MonthPrecision, SajuChart, TenGod,
    compute_chart, ten_god,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn pillars(chart: &SajuChart) -> [String; 4] {
    chart.pillars().map(|p| p.ganji.hanja())
}

fn indices(chart: &SajuChart) -> [(u8, u8); 4] {
    chart
        .pillars()
        .map(|p| (p.ganji.stem.index(), p.ganji.branch.index()))
}

#[test]
fn epoch_day_is_mu_o() {
    let c = compute_chart(at(2000, 1, 1, 0, 0), Gender::Male);
    assert_eq!(indices(&c)[2], (4, 6));
    assert_eq!(indices(&c), [(5, 3), (2, 0), (4, 6), (8, 0)]);
    assert_eq!(pillars(&c), ["己卯", "丙子", "戊午", "壬子"]);
    let gods: Vec<TenGod> = c.pillars().iter().map(|p| p.ten_god).collect();
    assert_eq!(
        gods,
        [TenGod::GeopJae, TenGod::PyeonIn, TenGod::BiGyeon, TenGod::PyeonJae]
    );
    assert_eq!(c.element_balance().counts(), [1, 2, 2, 0, 3]);
}

#[test]
fn scenario_1990_05_15_0830() {
    let c = compute_chart(at(1990, 5, 15, 8, 30), Gender::Female);
    assert_eq!(pillars(&c), ["庚午", "辛巳", "庚辰", "庚辰"]);
    assert_eq!(indices(&c), [(6, 6), (7, 5), (6, 4), (6, 4)]);
    let gods: Vec<&str> = c.pillars().iter().map(|p| p.ten_god.korean()).collect();
    assert_eq!(gods, ["비견", "겁재", "비견", "비견"]);
    let bal = c.element_balance();
    assert_eq!(bal.counts(), [0, 2, 2, 4, 0]);
    assert_eq!(bal.strongest(), FiveElement::Metal);
    assert_eq!(bal.weakest(), FiveElement::Wood);
    assert_eq!(c.month_precision, MonthPrecision::Exact);
}

#[test]
fn ipchun_2024_boundary() {
    let before = compute_chart(at(2024, 2, 3, 12, 0), Gender::Male);
    let after = compute_chart(at(2024, 2, 5, 12, 0), Gender::Male);
    assert_eq!(pillars(&before), ["癸卯", "乙丑", "丁酉", "丙午"]);
    assert_eq!(pillars(&after), ["甲辰", "丙寅", "己亥", "庚午"]);
    assert_eq!(before.year.ganji, after.year.ganji.offset(-1));
}

#[test]
fn ipchun_day_itself_opens_new_year() {
    let c = compute_chart(at(2024, 2, 4, 0, 0), Gender::Male);
    assert_eq!(c.year.ganji.hanja(), "甲辰");
    assert_eq!(c.month.ganji.hanja(), "丙寅");
}

#[test]
fn january_uses_previous_years_sohan() {
    // 2024 Sohan (from the 2023 row) is Jan 6.
    let c = compute_chart(at(2024, 1, 3, 12, 0), Gender::Male);
    assert_eq!(pillars(&c), ["癸卯", "甲子", "丙寅", "甲午"]);
    let c = compute_chart(at(2024, 1, 10, 12, 0), Gender::Male);
    assert_eq!(pillars(&c), ["癸卯", "乙丑", "癸酉", "戊午"]);
}

#[test]
fn late_night_ja_hour() {
    let c = compute_chart(at(1985, 3, 20, 23, 45), Gender::Male);
    assert_eq!(pillars(&c), ["乙丑", "己卯", "戊午", "壬子"]);
}

#[test]
fn today_fixture() {
    let c = compute_chart(at(2026, 10, 19, 0, 0), Gender::Female);
    assert_eq!(pillars(&c), ["丙午", "戊戌", "丙寅", "戊子"]);
}

#[test]
fn deterministic() {
    let t = at(1977, 8, 21, 14, 5);
    let a = compute_chart(t, Gender::Male);
    let b = compute_chart(t, Gender::Male);
    assert_eq!(a, b);
}

#[test]
fn ten_god_grid_is_exhaustive() {
    let mut hits = [0u32; 10];
    for day in ALL_STEMS {
        for target in ALL_STEMS {
            let g = ten_god(target, day);
            assert!(ALL_TEN_GODS.contains(&g));
            hits[g.index() as usize] += 1;
        }
    }
    // Every category occurs once per day stem.
    assert_eq!(hits, [10; 10]);
}

#[test]
fn balance_sums_to_eight_every_hour_of_a_year() {
    let mut day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    while day < end {
        for hour in [0, 5, 11, 23] {
            let c = compute_chart(day.and_hms_opt(hour, 40, 0).unwrap(), Gender::Male);
            let bal: ElementBalance = c.element_balance();
            assert_eq!(bal.total(), 8, "{day} {hour}");
        }
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn year_pillar_changes_once_per_year() {
    let mut prev = compute_chart(at(2000, 1, 1, 12, 0), Gender::Male).year.ganji;
    let mut changes = 0;
    let mut day = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap();
    let end = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    while day < end {
        let y = compute_chart(day.and_hms_opt(12, 0, 0).unwrap(), Gender::Male).year.ganji;
        if y != prev {
            assert_eq!(y, prev.offset(1), "{day}");
            changes += 1;
            prev = y;
        }
        day = day.succ_opt().unwrap();
    }
    assert_eq!(changes, 10);
}

#[test]
fn chart_serializes_with_hanja() {
    let c = compute_chart(at(1990, 5, 15, 8, 30), Gender::Female);
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["year"]["stem"], "庚");
    assert_eq!(v["year"]["branch"], "午");
    assert_eq!(v["month"]["ten_god"], "겁재");
    assert_eq!(v["gender"], "female");
    assert_eq!(v["month_precision"], "exact");
}
