//! StatSection - Percentage bonuses contributed by one build panel

mod layout;

pub use layout::{fields_for, DEMON_FIELDS, SUPPORT_FIELDS};

use crate::types::StatField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage bonuses from a single panel (weapon, demon, allies, passive)
///
/// Panels interact only through identically named fields: every total is
/// the sum of one field across all panels. A field that was never set
/// reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatSection {
    values: BTreeMap<StatField, f64>,
}

impl StatSection {
    /// Create an empty section
    pub fn new() -> Self {
        StatSection::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: StatField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Value of a field, 0 when absent
    pub fn get(&self, field: StatField) -> f64 {
        self.values.get(&field).copied().unwrap_or(0.0)
    }

    /// Set a field
    pub fn set(&mut self, field: StatField, value: f64) {
        self.values.insert(field, value);
    }

    /// Add to a field
    pub fn add(&mut self, field: StatField, value: f64) {
        *self.values.entry(field).or_insert(0.0) += value;
    }

    /// Whether every field reads as 0
    pub fn is_zero(&self) -> bool {
        self.values.values().all(|v| *v == 0.0)
    }
}

impl FromIterator<(StatField, f64)> for StatSection {
    fn from_iter<I: IntoIterator<Item = (StatField, f64)>>(iter: I) -> Self {
        let mut section = StatSection::new();
        for (field, value) in iter {
            section.set(field, value);
        }
        section
    }
}

/// Sum one field across all sections, in section order
///
/// This is the only aggregation primitive; absent fields count as 0.
pub fn sum_by_key(sections: &[&StatSection], field: StatField) -> f64 {
    sections.iter().fold(0.0, |sum, section| sum + section.get(field))
}
