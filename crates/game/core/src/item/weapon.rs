//! Weapons and enchantments.

use rand::Rng;

use super::{ItemError, RangeOfValues};
use crate::common::ActorClass;
use crate::spatial::SpatialDistribution;
use crate::stats::CharacteristicsModifier;

/// Conditional damage bonus against one actor class.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enchantment {
    pub target_actor_class: ActorClass,
    pub damage_multiplier: f32,
}

impl Enchantment {
    pub fn new(target_actor_class: ActorClass, damage_multiplier: f32) -> Result<Self, ItemError> {
        if !damage_multiplier.is_finite() || damage_multiplier < 0.0 {
            return Err(ItemError::InvalidMultiplier(damage_multiplier));
        }
        Ok(Self {
            target_actor_class,
            damage_multiplier,
        })
    }

    /// Multiplier for a target of class `target`: the bonus or 1.0.
    pub fn multiplier_for(&self, target: ActorClass) -> f32 {
        if target == self.target_actor_class {
            self.damage_multiplier
        } else {
            1.0
        }
    }

    pub fn apply(&self, value: f32, target: ActorClass) -> f32 {
        value * self.multiplier_for(target)
    }
}

/// Weapon payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub damage_range: RangeOfValues,
    /// Attack footprint in the wielder's local frame.
    pub distribution: SpatialDistribution,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enchantment: Option<Enchantment>,
    /// Passive bonus applied to the wielder while equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artefact: Option<CharacteristicsModifier>,
    /// Minimum ticks between two attacks that reached something.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown_ticks: u32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    cooldown_remaining: u32,
}

impl Weapon {
    pub fn new(damage_range: RangeOfValues, distribution: SpatialDistribution) -> Self {
        Self {
            damage_range,
            distribution,
            enchantment: None,
            artefact: None,
            cooldown_ticks: 0,
            cooldown_remaining: 0,
        }
    }

    pub fn with_enchantment(mut self, enchantment: Enchantment) -> Self {
        self.enchantment = Some(enchantment);
        self
    }

    pub fn with_artefact(mut self, artefact: CharacteristicsModifier) -> Self {
        self.artefact = Some(artefact);
        self
    }

    pub fn with_cooldown(mut self, ticks: u32) -> Self {
        self.cooldown_ticks = ticks;
        self
    }

    /// Roll base damage and apply the enchantment for a target of class `target`.
    pub fn get_damage<R: Rng + ?Sized>(&self, target: ActorClass, rng: &mut R) -> f32 {
        let rolled = self.damage_range.get_random(rng);
        match &self.enchantment {
            Some(enchantment) => enchantment.apply(rolled, target),
            None => rolled,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    /// Start the rest period after a successful swing.
    pub fn ensure_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_ticks;
    }

    /// Advance the rest period by one tick.
    pub fn tick_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }
}
