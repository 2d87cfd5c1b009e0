//! Closed vocabularies shared by every part of the calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage stat that a build panel can contribute
///
/// Serialized with the camelCase keys used by build files
/// (`atkPercent`, `critDmg`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatField {
    AtkPercent,
    ElementAtk,
    HpPercent,
    DefPercent,
    Morale,
    Resolve,
    SkillDmg,
    DmgBoost,
    SkillDmgBoost,
    WeaponDmgBoost,
    AdditionalDmgBoost,
    CritChance,
    CritDmg,
}

impl StatField {
    /// Get all stat fields
    pub fn all() -> &'static [StatField] {
        &[
            StatField::AtkPercent,
            StatField::ElementAtk,
            StatField::HpPercent,
            StatField::DefPercent,
            StatField::Morale,
            StatField::Resolve,
            StatField::SkillDmg,
            StatField::DmgBoost,
            StatField::SkillDmgBoost,
            StatField::WeaponDmgBoost,
            StatField::AdditionalDmgBoost,
            StatField::CritChance,
            StatField::CritDmg,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            StatField::AtkPercent => "ATK %",
            StatField::ElementAtk => "Element ATK %",
            StatField::HpPercent => "HP %",
            StatField::DefPercent => "DEF %",
            StatField::Morale => "Morale %",
            StatField::Resolve => "Resolve %",
            StatField::SkillDmg => "Skill DMG %",
            StatField::DmgBoost => "DMG Boost %",
            StatField::SkillDmgBoost => "Skill DMG Boost %",
            StatField::WeaponDmgBoost => "Weapon DMG Boost %",
            StatField::AdditionalDmgBoost => "Additional DMG Boost %",
            StatField::CritChance => "CRIT Chance %",
            StatField::CritDmg => "CRIT DMG %",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of hit being evaluated
///
/// Decides which boost and crit fields take part in the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DamageType {
    #[default]
    Weapon,
    Skill,
    #[serde(rename = "Consonance Weapon", alias = "ConsonanceWeapon")]
    ConsonanceWeapon,
}

impl DamageType {
    pub fn all() -> &'static [DamageType] {
        &[DamageType::Weapon, DamageType::Skill, DamageType::ConsonanceWeapon]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Weapon => "Weapon",
            DamageType::Skill => "Skill",
            DamageType::ConsonanceWeapon => "Consonance Weapon",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base stat the hit scales from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScalingType {
    #[default]
    Atk,
    Hp,
    Def,
}

impl ScalingType {
    pub fn all() -> &'static [ScalingType] {
        &[ScalingType::Atk, ScalingType::Hp, ScalingType::Def]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScalingType::Atk => "ATK",
            ScalingType::Hp => "HP",
            ScalingType::Def => "DEF",
        }
    }
}

impl fmt::Display for ScalingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stat named by a trial rank bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrialStat {
    Shield,
    #[serde(rename = "DEF")]
    Def,
    #[serde(rename = "HP")]
    Hp,
    #[serde(rename = "ATK")]
    Atk,
}

impl TrialStat {
    /// Label as written in the trial rank table
    pub fn label(&self) -> &'static str {
        match self {
            TrialStat::Shield => "Shield",
            TrialStat::Def => "DEF",
            TrialStat::Hp => "HP",
            TrialStat::Atk => "ATK",
        }
    }
}

/// One of the four panels that make up a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Weapon buffs
    Weapon,
    /// Character demon wedge (personal stats)
    Demon,
    /// Buffs from allies
    Allies,
    /// Passive buffs
    Passive,
}

impl SectionKind {
    /// Get all sections in aggregation order
    pub fn all() -> &'static [SectionKind] {
        &[
            SectionKind::Weapon,
            SectionKind::Demon,
            SectionKind::Allies,
            SectionKind::Passive,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Weapon => "Weapon Buffs",
            SectionKind::Demon => "Character Demon Wedge",
            SectionKind::Allies => "Allies Buffs",
            SectionKind::Passive => "Passive Buffs",
        }
    }
}
