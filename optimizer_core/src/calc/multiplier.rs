//! Build multiplier - folds aggregated section totals into one damage multiplier

use super::{crit_multiplier, percent_multiplier};
use crate::section::{sum_by_key, StatSection};
use crate::trial_rank::{TrialBonusMap, TrialRank};
use crate::types::{DamageType, ScalingType, StatField, TrialStat};
use serde::{Deserialize, Serialize};

/// Lowest HP ratio used by the resolve and morale formulas
pub const MIN_HP_RATIO: f64 = 0.25;

/// Shared settings for evaluating a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    pub damage_type: DamageType,
    pub scaling_type: ScalingType,
    /// Flat trial rank bonuses added to the ATK/HP/DEF buckets
    pub trial_bonuses: TrialBonusMap,
    /// Current HP as a percentage of max (0-100)
    pub current_hp_percent: f64,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        EvaluationContext {
            damage_type: DamageType::default(),
            scaling_type: ScalingType::default(),
            trial_bonuses: TrialBonusMap::default(),
            current_hp_percent: 100.0,
        }
    }
}

impl EvaluationContext {
    pub fn new(damage_type: DamageType, scaling_type: ScalingType) -> Self {
        EvaluationContext {
            damage_type,
            scaling_type,
            ..Default::default()
        }
    }

    /// Use the bonuses of a trial rank
    pub fn with_trial_rank(mut self, rank: TrialRank) -> Self {
        self.trial_bonuses = rank.bonus_map();
        self
    }

    pub fn with_current_hp(mut self, percent: f64) -> Self {
        self.current_hp_percent = percent;
        self
    }
}

/// Every multiplicative term of a build's multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierBreakdown {
    /// ATK/HP/DEF total selected by the scaling type, trial bonus included
    pub scaling_percent: f64,
    pub scaling: f64,
    pub skill: f64,
    pub skill_boost: f64,
    pub general_boost: f64,
    pub weapon_boost: f64,
    pub additional_boost: f64,
    pub resolve: f64,
    pub morale: f64,
    pub crit: f64,
    /// HP ratio after the floor is applied
    pub hp_ratio: f64,
}

impl MultiplierBreakdown {
    /// Product of all terms, or 1 if it is not finite
    pub fn total(&self) -> f64 {
        let total = self.scaling
            * self.skill
            * self.skill_boost
            * self.general_boost
            * self.weapon_boost
            * self.additional_boost
            * self.resolve
            * self.morale
            * self.crit;

        if total.is_finite() {
            total
        } else {
            tracing::warn!(breakdown = ?self, "non-finite build multiplier, falling back to 1");
            1.0
        }
    }
}

/// Compute each term of a build's multiplier
///
/// Damage type decides which fields are read: Skill hits ignore weapon
/// boost and crit, Weapon hits ignore skill damage, and only Skill hits
/// read skill damage boost.
pub fn breakdown_multiplier(
    sections: &[&StatSection],
    ctx: &EvaluationContext,
) -> MultiplierBreakdown {
    let sum = |field| sum_by_key(sections, field);
    let trial = |stat| ctx.trial_bonuses.stat(stat);

    let total_atk_percent =
        sum(StatField::AtkPercent) + sum(StatField::ElementAtk) + trial(TrialStat::Atk);
    let total_hp_percent = sum(StatField::HpPercent) + trial(TrialStat::Hp);
    let total_def_percent = sum(StatField::DefPercent) + trial(TrialStat::Def);

    let scaling_percent = match ctx.scaling_type {
        ScalingType::Atk => total_atk_percent,
        ScalingType::Hp => total_hp_percent,
        ScalingType::Def => total_def_percent,
    };

    let general_damage_boost = sum(StatField::DmgBoost);
    let additional_damage_boost = sum(StatField::AdditionalDmgBoost);
    let resolve_percent = sum(StatField::Resolve);
    let morale_percent = sum(StatField::Morale);

    let is_skill = ctx.damage_type == DamageType::Skill;
    let weapon_damage_boost = if is_skill { 0.0 } else { sum(StatField::WeaponDmgBoost) };
    let skill_damage = if ctx.damage_type == DamageType::Weapon {
        0.0
    } else {
        sum(StatField::SkillDmg)
    };
    let skill_damage_boost = if is_skill { sum(StatField::SkillDmgBoost) } else { 0.0 };
    let crit_chance = if is_skill { 0.0 } else { sum(StatField::CritChance) };
    let crit_dmg = if is_skill { 0.0 } else { sum(StatField::CritDmg) };

    let hp_ratio = (ctx.current_hp_percent / 100.0).clamp(MIN_HP_RATIO, 1.0);
    let missing = 1.0 - hp_ratio;

    MultiplierBreakdown {
        scaling_percent,
        scaling: percent_multiplier(scaling_percent),
        skill: percent_multiplier(skill_damage),
        skill_boost: percent_multiplier(skill_damage_boost),
        general_boost: percent_multiplier(general_damage_boost),
        weapon_boost: percent_multiplier(weapon_damage_boost),
        additional_boost: percent_multiplier(additional_damage_boost),
        resolve: 1.0 + (resolve_percent / 100.0) * 2.0 * (missing * 2.0 + 1.0) * missing,
        morale: 1.0 + (morale_percent / 100.0) * hp_ratio,
        crit: crit_multiplier(crit_chance, crit_dmg),
        hp_ratio,
    }
}

/// A build's own damage multiplier (gear and buffs only), always finite
pub fn calculate_multiplier(sections: &[&StatSection], ctx: &EvaluationContext) -> f64 {
    breakdown_multiplier(sections, ctx).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn section(values: &[(StatField, f64)]) -> StatSection {
        values.iter().copied().collect()
    }

    #[test]
    fn test_neutral_for_every_setting() {
        for damage_type in DamageType::all() {
            for scaling_type in ScalingType::all() {
                let ctx = EvaluationContext::new(*damage_type, *scaling_type);
                assert_eq!(calculate_multiplier(&[], &ctx), 1.0);
            }
        }
    }

    #[test]
    fn test_scaling_bucket_selection() {
        let s = section(&[
            (StatField::AtkPercent, 50.0),
            (StatField::ElementAtk, 30.0),
            (StatField::HpPercent, 20.0),
            (StatField::DefPercent, 10.0),
        ]);
        let atk = EvaluationContext::new(DamageType::Weapon, ScalingType::Atk);
        let hp = EvaluationContext::new(DamageType::Weapon, ScalingType::Hp);
        let def = EvaluationContext::new(DamageType::Weapon, ScalingType::Def);

        assert!((calculate_multiplier(&[&s], &atk) - 1.8).abs() < 1e-12);
        assert!((calculate_multiplier(&[&s], &hp) - 1.2).abs() < 1e-12);
        assert!((calculate_multiplier(&[&s], &def) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_trial_bonus_only_hits_matching_bucket() {
        // Lv. 35–39 grants DEF/HP 30 but no ATK
        let s = StatSection::new();
        let atk = EvaluationContext::new(DamageType::Weapon, ScalingType::Atk)
            .with_trial_rank(TrialRank::Lv35To39);
        let hp = EvaluationContext::new(DamageType::Weapon, ScalingType::Hp)
            .with_trial_rank(TrialRank::Lv35To39);

        assert_eq!(calculate_multiplier(&[&s], &atk), 1.0);
        assert!((calculate_multiplier(&[&s], &hp) - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_damage_type_field_gates() {
        let s = section(&[
            (StatField::SkillDmg, 100.0),
            (StatField::SkillDmgBoost, 50.0),
            (StatField::WeaponDmgBoost, 25.0),
        ]);

        let weapon = breakdown_multiplier(&[&s], &EvaluationContext::new(DamageType::Weapon, ScalingType::Atk));
        assert_eq!(weapon.skill, 1.0);
        assert_eq!(weapon.skill_boost, 1.0);
        assert!((weapon.weapon_boost - 1.25).abs() < 1e-12);

        let skill = breakdown_multiplier(&[&s], &EvaluationContext::new(DamageType::Skill, ScalingType::Atk));
        assert!((skill.skill - 2.0).abs() < 1e-12);
        assert!((skill.skill_boost - 1.5).abs() < 1e-12);
        assert_eq!(skill.weapon_boost, 1.0);

        let consonance = breakdown_multiplier(
            &[&s],
            &EvaluationContext::new(DamageType::ConsonanceWeapon, ScalingType::Atk),
        );
        assert!((consonance.skill - 2.0).abs() < 1e-12);
        assert_eq!(consonance.skill_boost, 1.0);
        assert!((consonance.weapon_boost - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_at_hp_floor() {
        let s = section(&[(StatField::Resolve, 10.0)]);
        for hp in [25.0, 10.0, 0.0] {
            let ctx = EvaluationContext::default().with_current_hp(hp);
            let terms = breakdown_multiplier(&[&s], &ctx);
            assert!((terms.hp_ratio - 0.25).abs() < f64::EPSILON);
            assert!((terms.resolve - 1.375).abs() < 1e-12);
        }
    }

    #[test]
    fn test_resolve_case_study() {
        let s = section(&[(StatField::Resolve, 10.0)]);
        let full = breakdown_multiplier(&[&s], &EvaluationContext::default());
        let half = breakdown_multiplier(&[&s], &EvaluationContext::default().with_current_hp(50.0));
        assert_eq!(full.resolve, 1.0);
        assert!((half.resolve - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_morale_case_study() {
        let s = section(&[(StatField::Morale, 10.0)]);
        let full = breakdown_multiplier(&[&s], &EvaluationContext::default());
        let half = breakdown_multiplier(&[&s], &EvaluationContext::default().with_current_hp(50.0));
        assert!((full.morale - 1.1).abs() < 1e-12);
        assert!((half.morale - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_hp_above_max_is_capped() {
        let s = section(&[(StatField::Morale, 10.0), (StatField::Resolve, 10.0)]);
        let over = breakdown_multiplier(&[&s], &EvaluationContext::default().with_current_hp(250.0));
        assert_eq!(over.hp_ratio, 1.0);
        assert_eq!(over.resolve, 1.0);
    }

    #[test]
    fn test_non_finite_falls_back_to_one() {
        let s = section(&[(StatField::AtkPercent, f64::INFINITY)]);
        assert_eq!(calculate_multiplier(&[&s], &EvaluationContext::default()), 1.0);

        let nan = section(&[(StatField::DmgBoost, f64::NAN)]);
        assert_eq!(calculate_multiplier(&[&nan], &EvaluationContext::default()), 1.0);
    }

    #[test]
    fn test_term_driven_to_zero() {
        let s = section(&[(StatField::DmgBoost, -100.0), (StatField::AtkPercent, 200.0)]);
        assert_eq!(calculate_multiplier(&[&s], &EvaluationContext::default()), 0.0);
    }

    fn arb_section() -> impl Strategy<Value = StatSection> {
        prop::collection::vec((0..StatField::all().len(), -200.0f64..500.0), 0..13).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .map(|(idx, value)| (StatField::all()[idx], value))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_skill_ignores_crit(
            base in arb_section(),
            chance in 0.0f64..400.0,
            dmg in 0.0f64..400.0,
            hp in 0.0f64..100.0,
        ) {
            let ctx = EvaluationContext::new(DamageType::Skill, ScalingType::Atk).with_current_hp(hp);

            let mut zeroed = base.clone();
            zeroed.set(StatField::CritChance, 0.0);
            zeroed.set(StatField::CritDmg, 0.0);

            let mut with_crit = base;
            with_crit.set(StatField::CritChance, chance);
            with_crit.set(StatField::CritDmg, dmg);

            prop_assert_eq!(
                calculate_multiplier(&[&with_crit], &ctx).to_bits(),
                calculate_multiplier(&[&zeroed], &ctx).to_bits()
            );
        }

        #[test]
        fn prop_idempotent_and_finite(
            a in arb_section(),
            b in arb_section(),
            hp in -50.0f64..150.0,
            type_idx in 0usize..3,
            scaling_idx in 0usize..3,
        ) {
            let ctx = EvaluationContext::new(DamageType::all()[type_idx], ScalingType::all()[scaling_idx])
                .with_trial_rank(TrialRank::Lv50To54)
                .with_current_hp(hp);

            let first = calculate_multiplier(&[&a, &b], &ctx);
            let second = calculate_multiplier(&[&a, &b], &ctx);
            prop_assert_eq!(first.to_bits(), second.to_bits());
            prop_assert!(first.is_finite());
        }
    }
}
