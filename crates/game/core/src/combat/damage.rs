//! Damage calculation and application.

use crate::config::CombatParams;

/// Fraction of incoming damage that survives `defence`.
///
/// # Formula
///
/// ```text
/// factor = damage_reduction_scale / (damage_reduction_scale + max(0, defence))
/// ```
///
/// An infinite scale disables reduction entirely.
pub fn reduction_factor(defence: f32, params: &CombatParams) -> f32 {
    let defence = defence.max(0.0);
    let scale = params.damage_reduction_scale;
    if !scale.is_finite() || defence == 0.0 {
        return 1.0;
    }
    if scale <= 0.0 {
        return 0.0;
    }
    scale / (scale + defence)
}

/// Calculate damage after defence.
///
/// Non-positive amounts yield zero.
pub fn calculate_damage(amount: f32, defence: f32, params: &CombatParams) -> f32 {
    if amount <= 0.0 {
        return 0.0;
    }
    amount * reduction_factor(defence, params)
}

/// Apply damage to current health.
///
/// # Returns
///
/// New health, clamped to `[0, max_health]`.
pub fn apply_damage(current: f32, damage: f32, max_health: f32) -> f32 {
    (current - damage).clamp(0.0, max_health.max(0.0))
}

/// What a single `take_damage` call did to its target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTaken {
    /// Health actually removed.
    pub dealt: f32,
    /// Set only on the call that brought health to zero.
    pub killed: bool,
}

impl DamageTaken {
    pub const NONE: Self = Self {
        dealt: 0.0,
        killed: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_shrinks_with_defence() {
        let params = CombatParams::default();
        assert_eq!(reduction_factor(0.0, &params), 1.0);
        assert_eq!(reduction_factor(100.0, &params), 0.5);
        assert!(reduction_factor(300.0, &params) < reduction_factor(100.0, &params));
    }

    #[test]
    fn infinite_scale_disables_reduction() {
        let params = CombatParams::always_hit_no_reduction();
        assert_eq!(calculate_damage(12.0, 500.0, &params), 12.0);
    }

    #[test]
    fn non_positive_amount_is_zero() {
        let params = CombatParams::default();
        assert_eq!(calculate_damage(0.0, 0.0, &params), 0.0);
        assert_eq!(calculate_damage(-4.0, 0.0, &params), 0.0);
    }

    #[test]
    fn apply_damage_clamps() {
        assert_eq!(apply_damage(10.0, 25.0, 100.0), 0.0);
        assert_eq!(apply_damage(90.0, -50.0, 100.0), 100.0);
        assert_eq!(apply_damage(50.0, 5.0, 100.0), 45.0);
    }
}
