//! Which fields each build panel offers for editing
//!
//! Layouts only decide what is shown. Values in fields outside the layout
//! are still aggregated.

use crate::types::{DamageType, SectionKind, StatField};

const WEAPON_FIELDS_WEAPON: &[StatField] = &[
    StatField::AtkPercent,
    StatField::DmgBoost,
    StatField::CritDmg,
    StatField::CritChance,
    StatField::WeaponDmgBoost,
    StatField::AdditionalDmgBoost,
];

const WEAPON_FIELDS_SKILL: &[StatField] = &[
    StatField::AtkPercent,
    StatField::SkillDmg,
    StatField::DmgBoost,
    StatField::SkillDmgBoost,
    StatField::AdditionalDmgBoost,
];

const WEAPON_FIELDS_CONSONANCE: &[StatField] = &[
    StatField::AtkPercent,
    StatField::SkillDmg,
    StatField::DmgBoost,
    StatField::CritDmg,
    StatField::CritChance,
    StatField::WeaponDmgBoost,
    StatField::AdditionalDmgBoost,
];

/// Personal stats from the character's demon wedge
pub const DEMON_FIELDS: &[StatField] = &[
    StatField::ElementAtk,
    StatField::AtkPercent,
    StatField::HpPercent,
    StatField::DefPercent,
    StatField::Morale,
    StatField::Resolve,
    StatField::SkillDmg,
];

/// Ally and passive buffs: demon fields plus the damage boosts
pub const SUPPORT_FIELDS: &[StatField] = &[
    StatField::ElementAtk,
    StatField::AtkPercent,
    StatField::HpPercent,
    StatField::DefPercent,
    StatField::Morale,
    StatField::Resolve,
    StatField::SkillDmg,
    StatField::DmgBoost,
    StatField::SkillDmgBoost,
    StatField::WeaponDmgBoost,
    StatField::AdditionalDmgBoost,
];

/// Editable fields for a panel under the selected damage type
pub fn fields_for(kind: SectionKind, damage_type: DamageType) -> &'static [StatField] {
    match kind {
        SectionKind::Weapon => match damage_type {
            DamageType::Weapon => WEAPON_FIELDS_WEAPON,
            DamageType::Skill => WEAPON_FIELDS_SKILL,
            DamageType::ConsonanceWeapon => WEAPON_FIELDS_CONSONANCE,
        },
        SectionKind::Demon => DEMON_FIELDS,
        SectionKind::Allies | SectionKind::Passive => SUPPORT_FIELDS,
    }
}
