//! Equipment slots for actors.
//!
//! Wearables live in a fixed array indexed by [`WearableKind`], so every slot
//! always exists (possibly empty). Weapons are an ordered list: any number may
//! be carried and all of them can swing.

use strum::{EnumCount, IntoEnumIterator};

use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemCategory, ItemKind, WearableKind};
use crate::stats::CharacteristicsModifier;

/// Equipped gear of an actor.
///
/// Effective characteristics are never cached here; they are folded from
/// [`Equipment::modifiers`] whenever they are read.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    wearable: [Option<Item>; WearableKind::COUNT],
    weapons: Vec<Item>,
}

impl Equipment {
    /// Creates empty equipment (no weapons, every slot vacant).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Equips a weapon or wearable.
    ///
    /// A wearable replaces the occupant of its slot, which is handed back to
    /// the caller. A weapon is appended and nothing is displaced.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, EquipError> {
        match &item.kind {
            ItemKind::Wearable(wearable) => {
                let slot = wearable.kind;
                Ok(self.wearable[slot.index()].replace(item))
            }
            ItemKind::Weapon(_) => {
                self.weapons.push(item);
                Ok(None)
            }
            ItemKind::Potion(_) | ItemKind::LockPicks(_) => Err(EquipError::NotEquippable {
                category: item.category(),
                item: Box::new(item),
            }),
        }
    }

    /// Equips a wearable into an explicitly chosen slot.
    ///
    /// Rejects items whose kind does not match `slot`.
    pub fn equip_into(
        &mut self,
        slot: WearableKind,
        item: Item,
    ) -> Result<Option<Item>, EquipError> {
        match item.as_wearable().map(|w| w.kind) {
            Some(kind) if kind == slot => self.equip(item),
            Some(kind) => Err(EquipError::SlotMismatch {
                slot,
                kind,
                item: Box::new(item),
            }),
            None => Err(EquipError::NotEquippable {
                category: item.category(),
                item: Box::new(item),
            }),
        }
    }

    /// Empties a wearable slot, returning its occupant if any.
    pub fn unequip_wearable(&mut self, slot: WearableKind) -> Option<Item> {
        self.wearable[slot.index()].take()
    }

    /// Removes the weapon at `index`, preserving the order of the rest.
    pub fn unequip_weapon(&mut self, index: usize) -> Option<Item> {
        (index < self.weapons.len()).then(|| self.weapons.remove(index))
    }

    pub fn wearable(&self, slot: WearableKind) -> Option<&Item> {
        self.wearable[slot.index()].as_ref()
    }

    /// Every slot in enumeration order, including empty ones.
    pub fn wearables(&self) -> impl Iterator<Item = (WearableKind, Option<&Item>)> {
        WearableKind::iter().map(|slot| (slot, self.wearable(slot)))
    }

    pub fn weapons(&self) -> &[Item] {
        &self.weapons
    }

    pub(crate) fn weapons_mut(&mut self) -> &mut [Item] {
        &mut self.weapons
    }

    /// Modifier sources in fold order: weapons first, then wearable slots.
    pub fn modifiers(&self) -> impl Iterator<Item = &CharacteristicsModifier> {
        self.weapons
            .iter()
            .chain(self.wearable.iter().flatten())
            .filter_map(Item::artefact)
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    items: Vec<Item>,
}

impl EquipmentBuilder {
    /// Queues an item to be equipped in order.
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Builds the equipment. Later wearables replace earlier ones in the same slot.
    pub fn build(self) -> Result<Equipment, EquipError> {
        let mut equipment = Equipment::empty();
        for item in self.items {
            equipment.equip(item)?;
        }
        Ok(equipment)
    }
}

/// Rejected equip attempts. The offending item is handed back.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EquipError {
    #[error("{} ({category}) cannot be equipped", .item.name)]
    NotEquippable {
        category: ItemCategory,
        item: Box<Item>,
    },

    #[error("{} is a {kind:?} and does not fit the {slot:?} slot", .item.name)]
    SlotMismatch {
        slot: WearableKind,
        kind: WearableKind,
        item: Box<Item>,
    },
}

impl EquipError {
    /// Recover the rejected item.
    pub fn into_item(self) -> Item {
        match self {
            Self::NotEquippable { item, .. } | Self::SlotMismatch { item, .. } => *item,
        }
    }
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEquippable { .. } => "EQUIP_NOT_EQUIPPABLE",
            Self::SlotMismatch { .. } => "EQUIP_SLOT_MISMATCH",
        }
    }
}
