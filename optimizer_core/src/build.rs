//! Build - the four stat panels of one loadout

use crate::section::StatSection;
use crate::types::SectionKind;
use serde::{Deserialize, Serialize};

/// One loadout: weapon buffs, demon wedge, ally buffs and passive buffs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default)]
    pub weapon: StatSection,
    #[serde(default)]
    pub demon: StatSection,
    #[serde(default)]
    pub allies: StatSection,
    #[serde(default)]
    pub passive: StatSection,
}

impl Build {
    pub fn new() -> Self {
        Build::default()
    }

    /// All panels in aggregation order
    pub fn sections(&self) -> [&StatSection; 4] {
        [&self.weapon, &self.demon, &self.allies, &self.passive]
    }

    pub fn section(&self, kind: SectionKind) -> &StatSection {
        match kind {
            SectionKind::Weapon => &self.weapon,
            SectionKind::Demon => &self.demon,
            SectionKind::Allies => &self.allies,
            SectionKind::Passive => &self.passive,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut StatSection {
        match kind {
            SectionKind::Weapon => &mut self.weapon,
            SectionKind::Demon => &mut self.demon,
            SectionKind::Allies => &mut self.allies,
            SectionKind::Passive => &mut self.passive,
        }
    }
}

/// Which of the two compared builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::A => "Build A",
            Side::B => "Build B",
        }
    }
}
