//! Five-element balance (오행 분포) of a chart.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::chart::SajuChart;
use crate::element::{ALL_ELEMENTS, FiveElement};

/// Count of each element over the 8 stems and branches of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementBalance {
    counts: [u8; 5],
}

impl ElementBalance {
    /// Build from raw counts in 木火土金水 order.
    pub const fn from_counts(counts: [u8; 5]) -> Self {
        Self { counts }
    }

    pub fn from_chart(chart: &SajuChart) -> Self {
        let mut counts = [0u8; 5];
        for p in chart.pillars() {
            counts[p.stem_element.index() as usize] += 1;
            counts[p.branch_element.index() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, element: FiveElement) -> u8 {
        self.counts[element.index() as usize]
    }

    pub fn counts(&self) -> [u8; 5] {
        self.counts
    }

    /// Sum of all buckets; 8 for any chart.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Element with the highest count; ties go to the earliest in 木火土金水.
    pub fn strongest(&self) -> FiveElement {
        let mut best = FiveElement::Wood;
        for e in ALL_ELEMENTS {
            if self.count(e) > self.count(best) {
                best = e;
            }
        }
        best
    }

    /// Element with the lowest count; ties go to the earliest in 木火土金水.
    pub fn weakest(&self) -> FiveElement {
        let mut worst = FiveElement::Wood;
        for e in ALL_ELEMENTS {
            if self.count(e) < self.count(worst) {
                worst = e;
            }
        }
        worst
    }

    /// Elements with a zero count.
    pub fn missing(&self) -> Vec<FiveElement> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|e| self.count(*e) == 0)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FiveElement, u8)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.count(e)))
    }
}

impl Serialize for ElementBalance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (e, n) in self.iter() {
            map.serialize_entry(e.name(), &n)?;
        }
        map.end()
    }
}
