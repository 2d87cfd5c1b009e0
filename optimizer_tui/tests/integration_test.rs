//! Integration test: Load scenario -> Apply presets -> Compare -> Save and reload
//!
//! Drives the same core flow the TUI does, without a terminal.

use optimizer_core::config::{load_scenario, parse_toml, save_scenario};
use optimizer_core::prelude::*;
use optimizer_core::Penetration;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn preset(id: &str) -> BuildPreset {
    default_presets()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("missing preset {}", id))
}

#[test]
fn test_burst_vs_empty_build() {
    let mut scenario = Scenario::new();
    scenario.apply_preset(&preset("burst"), Side::A);

    let cmp = scenario.compare();
    assert!((cmp.build_a.multiplier - 45.683_983_8).abs() < 1e-6);
    assert_eq!(cmp.build_b.multiplier, 1.0);
    assert!(approx(cmp.enemy_def_multiplier, 0.5));
    assert_eq!(cmp.penetration, Penetration::Heavy);
    assert!(approx(
        cmp.build_a.effective_multiplier,
        cmp.build_a.multiplier * 0.5
    ));

    let expected = (0.5 - cmp.build_a.effective_multiplier) / cmp.build_a.effective_multiplier * 100.0;
    assert!(approx(cmp.difference_percent, expected));
    assert!(cmp.difference_percent < 0.0);
}

#[test]
fn test_swap_negates_direction() {
    let mut scenario = Scenario::new();
    scenario.apply_preset(&preset("burst"), Side::A);
    scenario.apply_preset(&preset("sustain"), Side::B);

    let before = scenario.compare();
    scenario.swap_builds();
    let after = scenario.compare();

    assert_eq!(before.build_a.multiplier, after.build_b.multiplier);
    assert_eq!(before.build_b.multiplier, after.build_a.multiplier);
    assert!(before.difference_percent < 0.0);
    assert!(after.difference_percent > 0.0);
}

#[test]
fn test_sustain_weapon_hit() {
    let mut scenario = Scenario::new();
    scenario.apply_preset(&preset("sustain"), Side::A);

    // ATK 145% x DMG 18% x Additional 10%, skill fields ignored, full HP
    let cmp = scenario.compare();
    assert!(approx(cmp.build_a.multiplier, 2.45 * 1.18 * 1.1));
    assert_eq!(cmp.build_a.breakdown.resolve, 1.0);
    assert_eq!(cmp.build_a.breakdown.skill, 1.0);
}

#[test]
fn test_sustain_resolve_grows_at_low_hp() {
    let mut scenario = Scenario::new();
    scenario.apply_preset(&preset("sustain"), Side::A);

    scenario.set_current_hp(100.0);
    let full = scenario.compare().build_a.multiplier;
    scenario.set_current_hp(50.0);
    let half = scenario.compare().build_a.multiplier;
    scenario.set_current_hp(10.0);
    let low = scenario.compare().build_a;

    assert!(half > full);
    assert!(low.multiplier > half);
    // HP below 25% is floored
    assert_eq!(low.breakdown.hp_ratio, 0.25);
    // Resolve 30%: 1 + 0.3 x 2 x 2.5 x 0.75
    assert!(approx(low.breakdown.resolve, 2.125));
}

#[test]
fn test_breaker_skill_hit() {
    let mut scenario = Scenario::new();
    scenario.damage_type = DamageType::Skill;
    scenario.apply_preset(&preset("breaker"), Side::B);

    let cmp = scenario.compare();
    // ATK 115% x Skill 155% x Skill Boost 75% x DMG 15% x Additional 50%
    assert!(approx(cmp.build_b.multiplier, 2.15 * 2.55 * 1.75 * 1.15 * 1.5));
    assert_eq!(cmp.build_b.breakdown.crit, 1.0);
    assert_eq!(cmp.build_b.breakdown.weapon_boost, 1.0);
}

#[test]
fn test_trial_rank_and_scaling_from_file() {
    let toml = r#"
trial_rank = "Lv. 62–63"
scaling_type = "DEF"
character_level = 60
enemy_level = 90
enemy_defense = 600

[build_a.weapon]
defPercent = 100
"#;
    let scenario: Scenario = parse_toml(toml).expect("scenario parses");
    let cmp = scenario.compare();

    // DEF 100% + trial 200%
    assert!(approx(cmp.build_a.multiplier, 4.0));
    assert!(approx(cmp.build_b.multiplier, 3.0));
    // Level penalty capped at 20: 280 / 880
    assert!(approx(cmp.enemy_def_multiplier, 280.0 / 880.0));
    assert_eq!(cmp.penetration, Penetration::BarelyScratches);
    assert!(approx(cmp.difference_percent, -25.0));
}

#[test]
fn test_unknown_stat_key_rejected() {
    let toml = r#"
[build_a.weapon]
atkPercent = 10
critRate = 50
"#;
    let result: Result<Scenario, _> = parse_toml(toml);
    assert!(result.is_err());
}

#[test]
fn test_save_and_reload() {
    let mut scenario = Scenario::new();
    scenario.trial_rank = TrialRank::Lv50To54;
    scenario.damage_type = DamageType::ConsonanceWeapon;
    scenario.set_current_hp(35.0);
    scenario.apply_preset(&preset("burst"), Side::A);
    scenario
        .build_mut(Side::B)
        .section_mut(SectionKind::Allies)
        .set(StatField::SkillDmg, 42.5);

    let path = std::env::temp_dir().join(format!("optimizer_scenario_{}.toml", std::process::id()));
    save_scenario(&scenario, &path).expect("save");
    let loaded = load_scenario(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, scenario);
    assert_eq!(loaded.compare(), scenario.compare());
}

#[test]
fn test_stat_order_does_not_matter() {
    let mut a = Build::new();
    a.weapon.set(StatField::AtkPercent, 50.0);
    a.allies.set(StatField::CritDmg, 80.0);
    a.passive.set(StatField::CritChance, 40.0);

    let mut b = Build::new();
    b.passive.set(StatField::AtkPercent, 50.0);
    b.weapon.set(StatField::CritDmg, 80.0);
    b.demon.set(StatField::CritChance, 40.0);

    let ctx = EvaluationContext::default();
    assert_eq!(
        calculate_multiplier(&a.sections(), &ctx),
        calculate_multiplier(&b.sections(), &ctx)
    );
}
