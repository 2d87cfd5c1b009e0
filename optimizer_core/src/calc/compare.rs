//! Build comparison - effective multipliers for two builds against one enemy

use super::{bonus_percent, breakdown_multiplier, describe_penetration};
use super::{EnemyContext, EvaluationContext, MultiplierBreakdown, Penetration};
use crate::build::Build;
use serde::{Deserialize, Serialize};

/// Result for a single build
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Gear and buff multiplier
    pub multiplier: f64,
    /// Multiplier after enemy defense
    pub effective_multiplier: f64,
    pub breakdown: MultiplierBreakdown,
}

impl BuildResult {
    pub fn bonus_percent(&self) -> f64 {
        bonus_percent(self.multiplier)
    }

    pub fn effective_bonus_percent(&self) -> f64 {
        bonus_percent(self.effective_multiplier)
    }
}

/// Side-by-side result of two builds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub build_a: BuildResult,
    pub build_b: BuildResult,
    pub enemy_def_multiplier: f64,
    pub penetration: Penetration,
    /// How much more (or less) damage build B deals than build A
    pub difference_percent: f64,
}

/// Evaluate both builds under the same settings and enemy
pub fn compare_builds(
    build_a: &Build,
    build_b: &Build,
    ctx: &EvaluationContext,
    enemy: &EnemyContext,
) -> Comparison {
    let enemy_def_multiplier = enemy.multiplier();

    let evaluate = |build: &Build| {
        let breakdown = breakdown_multiplier(&build.sections(), ctx);
        let multiplier = breakdown.total();
        BuildResult {
            multiplier,
            effective_multiplier: multiplier * enemy_def_multiplier,
            breakdown,
        }
    };

    let a = evaluate(build_a);
    let b = evaluate(build_b);

    let difference_percent = if a.effective_multiplier == 0.0 {
        0.0
    } else {
        (b.effective_multiplier - a.effective_multiplier) / a.effective_multiplier * 100.0
    };

    tracing::debug!(
        build_a = a.multiplier,
        build_b = b.multiplier,
        enemy = enemy_def_multiplier,
        difference_percent,
        "compared builds"
    );

    Comparison {
        build_a: a,
        build_b: b,
        enemy_def_multiplier,
        penetration: describe_penetration(enemy_def_multiplier),
        difference_percent,
    }
}
