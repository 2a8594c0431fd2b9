//! Items and their typed payloads.
//!
//! Every item shares a name and an icon; what it *does* lives in the
//! [`ItemKind`] payload and is dispatched by exhaustive matching.

mod lock_picks;
mod potion;
mod range;
mod weapon;
mod wearable;

pub use lock_picks::LockPicks;
pub use potion::Potion;
pub use range::RangeOfValues;
pub use weapon::{Enchantment, Weapon};
pub use wearable::{Wearable, WearableKind};

use crate::common::IconHandle;
use crate::error::{ErrorSeverity, GameError};
use crate::stats::CharacteristicsModifier;

/// Typed payload of an item.
#[derive(Clone, Debug, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(ItemCategory))]
#[strum_discriminants(derive(Hash, strum::Display))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Potion(Potion),
    Weapon(Weapon),
    Wearable(Wearable),
    LockPicks(LockPicks),
}

impl From<Potion> for ItemKind {
    fn from(value: Potion) -> Self {
        ItemKind::Potion(value)
    }
}

impl From<Weapon> for ItemKind {
    fn from(value: Weapon) -> Self {
        ItemKind::Weapon(value)
    }
}

impl From<Wearable> for ItemKind {
    fn from(value: Wearable) -> Self {
        ItemKind::Wearable(value)
    }
}

impl From<LockPicks> for ItemKind {
    fn from(value: LockPicks) -> Self {
        ItemKind::LockPicks(value)
    }
}

/// An item: shared identity plus a typed payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: IconHandle,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: impl Into<ItemKind>) -> Self {
        Self {
            name: name.into(),
            icon: IconHandle::default(),
            kind: kind.into(),
        }
    }

    pub fn category(&self) -> ItemCategory {
        ItemCategory::from(&self.kind)
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_wearable(&self) -> Option<&Wearable> {
        match &self.kind {
            ItemKind::Wearable(wearable) => Some(wearable),
            _ => None,
        }
    }

    pub fn as_lock_picks(&self) -> Option<&LockPicks> {
        match &self.kind {
            ItemKind::LockPicks(picks) => Some(picks),
            _ => None,
        }
    }

    pub fn as_lock_picks_mut(&mut self) -> Option<&mut LockPicks> {
        match &mut self.kind {
            ItemKind::LockPicks(picks) => Some(picks),
            _ => None,
        }
    }

    /// Passive modifier granted while this item is equipped.
    pub fn artefact(&self) -> Option<&CharacteristicsModifier> {
        match &self.kind {
            ItemKind::Weapon(weapon) => weapon.artefact.as_ref(),
            ItemKind::Wearable(wearable) => wearable.artefact.as_ref(),
            ItemKind::Potion(_) | ItemKind::LockPicks(_) => None,
        }
    }
}

/// Invalid item configuration, detected when the item is built.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ItemError {
    #[error("invalid range [{min}, {max}]: min must not exceed max")]
    InvalidRange { min: f32, max: f32 },

    #[error("invalid range [{min}, {max}]: bounds must not be negative")]
    NegativeBound { min: f32, max: f32 },

    #[error("invalid damage multiplier {0}")]
    InvalidMultiplier(f32),
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "ITEM_INVALID_RANGE",
            Self::NegativeBound { .. } => "ITEM_NEGATIVE_BOUND",
            Self::InvalidMultiplier(_) => "ITEM_INVALID_MULTIPLIER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::SpatialDistribution;
    use crate::stats::ValueModifier;

    #[test]
    fn category_tracks_payload() {
        let picks = Item::new("lock pick", LockPicks::new(3));
        assert_eq!(picks.category(), ItemCategory::LockPicks);
        assert_eq!(picks.as_lock_picks().map(|p| p.count), Some(3));
        assert!(picks.as_weapon().is_none());
    }

    #[test]
    fn artefact_comes_from_gear_only() {
        let bonus = CharacteristicsModifier::new().speed(ValueModifier::AddToValue(3.0));
        let shield = Item::new(
            "golden shield",
            Wearable::new(WearableKind::Shield).with_artefact(bonus.clone()),
        );
        assert_eq!(shield.artefact(), Some(&bonus));

        let potion = Item::new("swiftness", Potion::new(bonus));
        assert_eq!(potion.artefact(), None);

        let club = Item::new(
            "club",
            Weapon::new(
                RangeOfValues::new(1.0, 2.0).unwrap(),
                SpatialDistribution::Circle { radius: 1.0 },
            ),
        );
        assert_eq!(club.artefact(), None);
    }
}
