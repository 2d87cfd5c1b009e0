//! Critical strike - expected multiplier from crit chance and crit damage

/// Expected crit multiplier
///
/// Chance above 100% keeps adding crit levels linearly instead of
/// saturating, so 150% chance counts as 1.5 levels of crit damage.
/// Either input at or below 0 disables crit entirely.
pub fn crit_multiplier(crit_chance: f64, crit_dmg: f64) -> f64 {
    if crit_chance <= 0.0 || crit_dmg <= 0.0 {
        return 1.0;
    }

    let capped_chance = crit_chance.clamp(0.0, 100.0);
    let overflow_chance = (crit_chance - 100.0).max(0.0);
    let crit_level = capped_chance / 100.0 + overflow_chance / 100.0;

    1.0 + crit_level * (crit_dmg / 100.0)
}
