//! Combat result types and attack resolution.

use rand::Rng;
use tracing::debug;

use crate::actor::Actor;
use crate::common::{ActorId, Vector2};
use crate::config::CombatParams;
use crate::item::Weapon;

use super::hit::check_hit;

/// Outcome of one weapon striking one target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit {
        /// Health removed after defence.
        damage: f32,
        /// This hit brought the target to zero health.
        killed: bool,
    },
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    pub fn killed(&self) -> bool {
        matches!(self, Self::Hit { killed: true, .. })
    }
}

/// Result of a combat resolution against a single target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub attacker: ActorId,
    pub target: ActorId,
    /// Index of the weapon in the attacker's equipment.
    pub weapon: usize,
    pub outcome: AttackOutcome,
}

/// Who is swinging and from where.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Striker {
    pub id: ActorId,
    pub position: Vector2,
}

/// Resolve a complete strike (hit check + damage roll + defence).
///
/// The hit roll uses the target's [`Actor::chance_to_take_damage`]. On a hit
/// the weapon's damage is rolled (with enchantment applied for the target's
/// class) and handed to [`Actor::take_damage`], which applies defence and
/// clamps health.
pub fn resolve_attack<R: Rng + ?Sized>(
    striker: Striker,
    weapon: &Weapon,
    target: &mut Actor,
    params: &CombatParams,
    rng: &mut R,
) -> AttackOutcome {
    let chance = target.chance_to_take_damage(params);
    if !check_hit(chance, rng) {
        debug!(attacker = %striker.id, target = %target.id, chance, "miss");
        return AttackOutcome::Miss;
    }

    let rolled = weapon.get_damage(target.actor_class, rng);
    let taken = target.take_damage(rolled, Some(striker.position), params, rng);
    debug!(
        attacker = %striker.id,
        target = %target.id,
        rolled,
        damage = taken.dealt,
        health = target.health(),
        "hit"
    );

    AttackOutcome::Hit {
        damage: taken.dealt,
        killed: taken.killed,
    }
}
