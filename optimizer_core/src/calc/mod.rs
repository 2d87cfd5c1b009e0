//! Damage multiplier calculation - build terms, enemy defense, comparison

mod compare;
mod crit;
mod enemy;
mod multiplier;

pub use compare::{compare_builds, BuildResult, Comparison};
pub use crit::crit_multiplier;
pub use enemy::{calculate_enemy_def_multiplier, describe_penetration, EnemyContext, Penetration};
pub use multiplier::{breakdown_multiplier, calculate_multiplier, EvaluationContext, MultiplierBreakdown};

/// Convert a percentage bonus into a multiplicative term
pub(crate) fn percent_multiplier(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// Bonus percentage shown for a multiplier (1.25 -> 25%)
pub fn bonus_percent(multiplier: f64) -> f64 {
    (multiplier - 1.0) * 100.0
}
