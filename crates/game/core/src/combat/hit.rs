//! Hit chance calculations.

use rand::Rng;

use crate::config::CombatParams;

/// Probability that an attack against a target with `defence` lands.
///
/// # Formula
///
/// ```text
/// hit_chance = max(minimum_hit_chance, 1 / (1 + hit_defence_scale × defence))
/// ```
///
/// Negative defence counts as zero, so the result always lies in
/// `[minimum_hit_chance, 1]` and never increases with defence.
pub fn calculate_hit_chance(defence: f32, params: &CombatParams) -> f32 {
    let defence = defence.max(0.0);
    let chance = 1.0 / (1.0 + params.hit_defence_scale.max(0.0) * defence);
    chance.max(params.minimum_hit_chance).clamp(0.0, 1.0)
}

/// Roll against a hit chance.
///
/// # Returns
///
/// `true` if the attack hits, `false` if it misses.
pub fn check_hit<R: Rng + ?Sized>(chance: f32, rng: &mut R) -> bool {
    if chance >= 1.0 {
        return true;
    }
    rng.gen_range(0.0..1.0) < chance
}
