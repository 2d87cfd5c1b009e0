//! Scenario - shared settings plus both builds, loadable from TOML or JSON

use super::{BuildPreset, ConfigError};
use crate::build::{Build, Side};
use crate::calc::{compare_builds, Comparison, EnemyContext, EvaluationContext};
use crate::trial_rank::TrialRank;
use crate::types::{DamageType, ScalingType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything needed to compare two builds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub trial_rank: TrialRank,
    pub damage_type: DamageType,
    pub scaling_type: ScalingType,
    /// Current HP percentage (0-100)
    pub current_hp_percent: f64,
    pub character_level: i32,
    pub enemy_level: i32,
    pub enemy_defense: i32,
    pub build_a: Build,
    pub build_b: Build,
}

impl Default for Scenario {
    fn default() -> Self {
        let enemy = EnemyContext::default();
        Scenario {
            trial_rank: TrialRank::default(),
            damage_type: DamageType::default(),
            scaling_type: ScalingType::default(),
            current_hp_percent: 100.0,
            character_level: enemy.character_level,
            enemy_level: enemy.enemy_level,
            enemy_defense: enemy.enemy_defense,
            build_a: Build::default(),
            build_b: Build::default(),
        }
    }
}

impl Scenario {
    pub fn new() -> Self {
        Scenario::default()
    }

    /// Restore default settings and zero both builds
    pub fn reset(&mut self) {
        *self = Scenario::default();
    }

    pub fn build(&self, side: Side) -> &Build {
        match side {
            Side::A => &self.build_a,
            Side::B => &self.build_b,
        }
    }

    pub fn build_mut(&mut self, side: Side) -> &mut Build {
        match side {
            Side::A => &mut self.build_a,
            Side::B => &mut self.build_b,
        }
    }

    pub fn swap_builds(&mut self) {
        std::mem::swap(&mut self.build_a, &mut self.build_b);
    }

    /// Replace one build with a preset's values
    pub fn apply_preset(&mut self, preset: &BuildPreset, side: Side) {
        tracing::debug!(preset = %preset.id, side = side.name(), "applying preset");
        *self.build_mut(side) = preset.to_build();
    }

    /// Set current HP, clamped to 0-100
    pub fn set_current_hp(&mut self, percent: f64) {
        self.current_hp_percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
    }

    /// Set enemy defense, never below 0
    pub fn set_enemy_defense(&mut self, defense: i32) {
        self.enemy_defense = defense.max(0);
    }

    pub fn evaluation_context(&self) -> EvaluationContext {
        EvaluationContext::new(self.damage_type, self.scaling_type)
            .with_trial_rank(self.trial_rank)
            .with_current_hp(self.current_hp_percent)
    }

    pub fn enemy_context(&self) -> EnemyContext {
        EnemyContext {
            character_level: self.character_level,
            enemy_level: self.enemy_level,
            enemy_defense: self.enemy_defense.max(0),
        }
    }

    pub fn compare(&self) -> Comparison {
        compare_builds(
            &self.build_a,
            &self.build_b,
            &self.evaluation_context(),
            &self.enemy_context(),
        )
    }
}

/// Load a scenario, choosing the format by file extension
///
/// `.json` files are read as JSON, everything else as TOML.
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let scenario: Scenario = if is_json {
        super::load_json(path)?
    } else {
        super::load_toml(path)?
    };

    tracing::debug!(path = %path.display(), "loaded scenario");
    Ok(scenario)
}

/// Write a scenario as TOML
pub fn save_scenario(scenario: &Scenario, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(scenario)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved scenario");
    Ok(())
}
