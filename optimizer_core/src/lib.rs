//! optimizer_core - Build comparison damage multiplier calculator
//!
//! This library provides:
//! - StatSection: Percentage bonuses from one build panel, summed across panels
//! - Trial rank table: Flat ATK/HP/DEF/Shield bonuses injected into every build
//! - Multiplier calculation: A build's own gear/buff multiplier
//! - Enemy defense: Level-clamped defense mitigation
//! - Comparison: Effective multipliers for two builds and their relative difference

pub mod build;
pub mod calc;
pub mod config;
pub mod prelude;
pub mod section;
pub mod trial_rank;
pub mod types;

// Re-export core types for convenience
pub use build::{Build, Side};
pub use calc::{
    breakdown_multiplier, calculate_enemy_def_multiplier, calculate_multiplier, compare_builds,
    crit_multiplier, describe_penetration, BuildResult, Comparison, EnemyContext,
    EvaluationContext, MultiplierBreakdown, Penetration,
};
pub use config::{default_presets, BuildPreset, ConfigError, Scenario};
pub use section::{sum_by_key, StatSection};
pub use trial_rank::{trial_bonus_map, TrialBonusMap, TrialRank};
pub use types::{DamageType, ScalingType, SectionKind, StatField, TrialStat};
