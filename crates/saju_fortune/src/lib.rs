//! Derived readings over a computed [`SajuChart`](saju_base::SajuChart).
//!
//! Everything here is deterministic: the same chart and date always give the
//! same result. Variation comes from [`fortune_seed`], a 32-bit string hash.

pub mod compatibility;
pub mod daily;
pub mod error;
pub mod family;
pub mod lifetime;
pub mod lucky;
pub mod seed;
pub mod tojeong;
pub mod yearly;

pub use compatibility::{
    CoupleCompatibility, DayStemRelation, ELEMENT_AFFINITY, PAIRWISE_BASE, StemCombination,
    complement_score, day_stem_relation, detailed_compatibility, grade_label,
    pairwise_compatibility, stem_combination,
};
pub use daily::{DAILY_SCORE_BASE, DailyFortune, daily_fortune, daily_seed_text};
pub use error::FortuneError;
pub use family::{
    FamilyBalance, FamilyElementCount, FamilyMember, FamilyRole, FamilySummary,
    RelationInterpretation, RoleRelation, family_element_balance, family_summary,
    relation_interpretation, relation_title, role_relation,
};
pub use lifetime::{FortuneDetails, FortuneScores, element_plain_name, lifetime_fortune};
pub use lucky::{LuckyProfile, lucky_profile};
pub use seed::{chart_seed, chart_seed_text, fortune_seed};
pub use tojeong::{TojeongHexagram, ganji_number, tojeong, tojeong_for_birth};
pub use yearly::{
    MonthlyFortune, ScoreTier, YEARLY_FORTUNE_YEAR, YearlyFortune, monthly_fortunes, yearly_fortune,
};
