//! Enemy defense - level-clamped defense mitigation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base value of the defense formula
pub const DEFENSE_BASE: i32 = 300;

/// Largest level disadvantage that still lowers the multiplier
pub const MAX_LEVEL_PENALTY: i32 = 20;

/// Level and defense of the target, shared by both builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyContext {
    pub character_level: i32,
    pub enemy_level: i32,
    pub enemy_defense: i32,
}

impl Default for EnemyContext {
    fn default() -> Self {
        EnemyContext {
            character_level: 70,
            enemy_level: 70,
            enemy_defense: 300,
        }
    }
}

impl EnemyContext {
    pub fn multiplier(&self) -> f64 {
        calculate_enemy_def_multiplier(self.character_level, self.enemy_level, self.enemy_defense)
    }
}

/// Fraction of damage that gets through enemy defense
///
/// `Multiplier = (300 + LevelΔ) / (300 + LevelΔ + DEF)`
///
/// Only a level disadvantage counts and it is capped at 20 levels.
/// Negative defense is treated as 0. A non-positive denominator gives 1.
pub fn calculate_enemy_def_multiplier(character_level: i32, enemy_level: i32, enemy_defense: i32) -> f64 {
    let level_diff = character_level
        .saturating_sub(enemy_level)
        .clamp(-MAX_LEVEL_PENALTY, 0);
    let numerator = (DEFENSE_BASE + level_diff) as f64;
    let denominator = numerator + enemy_defense.max(0) as f64;

    if denominator <= 0.0 {
        return 1.0;
    }

    numerator / denominator
}

/// How much of a hit survives enemy defense, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Penetration {
    Full,
    Minor,
    Heavy,
    BarelyScratches,
}

impl Penetration {
    pub fn label(&self) -> &'static str {
        match self {
            Penetration::Full => "Full penetration",
            Penetration::Minor => "Minor reduction",
            Penetration::Heavy => "Heavily reduced",
            Penetration::BarelyScratches => "Barely scratches",
        }
    }
}

impl fmt::Display for Penetration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an enemy defense multiplier
pub fn describe_penetration(multiplier: f64) -> Penetration {
    if multiplier >= 0.75 {
        Penetration::Full
    } else if multiplier >= 0.6 {
        Penetration::Minor
    } else if multiplier >= 0.4 {
        Penetration::Heavy
    } else {
        Penetration::BarelyScratches
    }
}
