//! Potions.

use crate::actor::Actor;
use crate::stats::CharacteristicsModifier;

/// Consumable that permanently alters the drinker's base characteristics.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Potion {
    pub modifier: CharacteristicsModifier,
}

impl Potion {
    pub fn new(modifier: CharacteristicsModifier) -> Self {
        Self { modifier }
    }

    /// Bake the modifier into `target`'s base characteristics.
    ///
    /// Removing the potion from whatever inventory held it is the caller's
    /// job; see [`Actor::use_item`].
    pub fn apply(&self, target: &mut Actor) {
        target.bake_in(&self.modifier);
    }
}
