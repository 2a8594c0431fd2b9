//! Bounded item storage shared by players and chests.

use arrayvec::ArrayVec;

use super::EquipError;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemCategory, ItemKind};

/// Ordered, fixed-capacity list of items.
///
/// Lock picks of equal quality merge into existing stacks up to
/// `stack_limit`; everything else occupies a slot of its own.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>,
    stack_limit: u32,
}

impl Inventory {
    pub const CAPACITY: usize = GameConfig::MAX_INVENTORY_SLOTS;

    pub fn new(stack_limit: u32) -> Self {
        Self {
            items: ArrayVec::new(),
            stack_limit: stack_limit.max(1),
        }
    }

    /// Builds an inventory pre-filled with `items`. Overflow is returned as an error.
    pub fn with_items(
        stack_limit: u32,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<Self, InventoryError> {
        let mut inventory = Self::new(stack_limit);
        for item in items {
            inventory.add_item(item)?;
        }
        Ok(inventory)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn stack_limit(&self) -> u32 {
        self.stack_limit
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Stores an item.
    ///
    /// Lock picks are poured into existing stacks first; whatever does not
    /// fit spills into new stacks. When no slot is left the unplaced
    /// remainder comes back in [`InventoryError::Full`].
    pub fn add_item(&mut self, mut item: Item) -> Result<(), InventoryError> {
        if let ItemKind::LockPicks(incoming) = &mut item.kind {
            for stack in self.items.iter_mut().filter_map(Item::as_lock_picks_mut) {
                if incoming.count == 0 {
                    break;
                }
                if stack.quality == incoming.quality {
                    stack.absorb(incoming, self.stack_limit);
                }
            }
            while incoming.count > self.stack_limit {
                if self.items.is_full() {
                    return Err(InventoryError::Full(Box::new(item)));
                }
                let mut split = *incoming;
                split.count = self.stack_limit;
                incoming.count -= self.stack_limit;
                self.items.push(Item {
                    name: item.name.clone(),
                    icon: item.icon,
                    kind: split.into(),
                });
            }
            if incoming.count == 0 {
                return Ok(());
            }
        }

        self.items
            .try_push(item)
            .map_err(|err| InventoryError::Full(Box::new(err.element())))
    }

    /// Removes the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> Result<Item, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::InvalidSlot {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Index of the first item of the given category.
    pub fn position(&self, category: ItemCategory) -> Option<usize> {
        self.items.iter().position(|item| item.category() == category)
    }

    /// Drops lock pick stacks that have run out.
    pub fn discard_exhausted(&mut self) {
        self.items
            .retain(|item| item.as_lock_picks().is_none_or(|picks| !picks.is_exhausted()));
    }

    /// Moves every item out.
    pub fn drain(&mut self) -> impl Iterator<Item = Item> + '_ {
        self.items.drain(..)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_LOCK_PICK_STACK_LIMIT)
    }
}

/// Errors raised by inventory operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full; {} was not stored", .0.name)]
    Full(Box<Item>),

    #[error("no item in slot {index} (inventory holds {len})")]
    InvalidSlot { index: usize, len: usize },

    #[error("{category} cannot be used without a target")]
    RequiresTarget { category: ItemCategory },

    #[error("actor has no inventory")]
    NoInventory,

    #[error(transparent)]
    Equip(#[from] EquipError),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full(_) => "INVENTORY_FULL",
            Self::InvalidSlot { .. } => "INVENTORY_INVALID_SLOT",
            Self::RequiresTarget { .. } => "INVENTORY_REQUIRES_TARGET",
            Self::NoInventory => "INVENTORY_MISSING",
            Self::Equip(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{LockPicks, Potion};

    fn potion(name: &str) -> Item {
        Item::new(name, Potion::default())
    }

    fn picks(count: u32) -> Item {
        Item::new("lock picks", LockPicks::new(count))
    }

    #[test]
    fn full_inventory_hands_item_back() {
        let mut inventory = Inventory::default();
        for i in 0..Inventory::CAPACITY {
            inventory.add_item(potion(&format!("p{i}"))).unwrap();
        }
        let err = inventory.add_item(potion("extra")).unwrap_err();
        assert_eq!(err, InventoryError::Full(Box::new(potion("extra"))));
        assert_eq!(inventory.len(), Inventory::CAPACITY);
    }

    #[test]
    fn lock_picks_merge_up_to_limit() {
        let mut inventory = Inventory::new(16);
        inventory.add_item(picks(10)).unwrap();
        inventory.add_item(picks(10)).unwrap();

        let counts: Vec<u32> = inventory
            .iter()
            .filter_map(|item| item.as_lock_picks().map(|p| p.count))
            .collect();
        assert_eq!(counts, vec![16, 4]);
    }

    #[test]
    fn oversized_pick_bundle_splits() {
        let mut inventory = Inventory::new(4);
        inventory.add_item(picks(10)).unwrap();
        assert_eq!(inventory.len(), 3);
        let total: u32 = inventory
            .iter()
            .filter_map(|item| item.as_lock_picks().map(|p| p.count))
            .sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn different_quality_does_not_merge() {
        let mut inventory = Inventory::new(16);
        inventory.add_item(picks(2)).unwrap();
        inventory
            .add_item(Item::new("fine picks", LockPicks::new(2).with_quality(2.0)))
            .unwrap();
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn remove_out_of_range() {
        let mut inventory = Inventory::default();
        assert_eq!(
            inventory.remove(0),
            Err(InventoryError::InvalidSlot { index: 0, len: 0 })
        );
    }

    #[test]
    fn discard_exhausted_keeps_other_items() {
        let mut inventory = Inventory::default();
        inventory.add_item(potion("a")).unwrap();
        inventory.add_item(picks(1)).unwrap();
        inventory
            .get_mut(1)
            .and_then(Item::as_lock_picks_mut)
            .unwrap()
            .break_one();
        inventory.discard_exhausted();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.position(ItemCategory::LockPicks), None);
    }
}
