//! Prelude module for convenient imports
//!
//! ```rust
//! use optimizer_core::prelude::*;
//! ```

// Data
pub use crate::build::{Build, Side};
pub use crate::section::StatSection;
pub use crate::trial_rank::{TrialBonusMap, TrialRank};
pub use crate::types::{DamageType, ScalingType, SectionKind, StatField, TrialStat};

// Calculation
pub use crate::calc::{
    calculate_enemy_def_multiplier, calculate_multiplier, compare_builds, Comparison,
    EnemyContext, EvaluationContext,
};

// Config
pub use crate::config::{default_presets, BuildPreset, Scenario};
