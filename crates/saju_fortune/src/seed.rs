//! Deterministic seeds for template selection.
//!
//! The same text always yields the same seed, so a fortune for a given chart
//! and date is stable across runs without any stored random state.

use std::fmt::Write;

use saju_base::SajuChart;

/// 32-bit rolling hash `h = h * 31 + unit` over UTF-16 code units, with
/// wrapping `i32` arithmetic, returned as the absolute value.
pub fn fortune_seed(text: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in text.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(unit as i32);
    }
    h.unsigned_abs()
}

/// Canonical text form of a chart's four pillars, the input to [`chart_seed`].
///
/// Each pillar contributes `stem branch stem-element branch-element ten-god`;
/// birth time and gender are excluded.
pub fn chart_seed_text(chart: &SajuChart) -> String {
    let mut s = String::with_capacity(64);
    for p in chart.pillars() {
        let _ = write!(
            s,
            "{}{}{}{}{};",
            p.ganji.stem.hanja(),
            p.ganji.branch.hanja(),
            p.stem_element.hanja(),
            p.branch_element.hanja(),
            p.ten_god.korean()
        );
    }
    s
}

/// Seed derived from the four pillars alone.
pub fn chart_seed(chart: &SajuChart) -> u32 {
    fortune_seed(&chart_seed_text(chart))
}
