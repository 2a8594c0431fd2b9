//! Buildings: fixtures placed on tiles.
//!
//! The only building today is the [`Chest`], a locked container opened with
//! lock picks.

use rand::Rng;
use tracing::debug;

use crate::actor::{Inventory, InventoryError};
use crate::config::{GameConfig, LockPickingParams};
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, LockPicks};

/// A level fixture an actor can interact with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Building {
    Chest(Chest),
}

/// Result of [`Building::interact`].
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    /// The building refused; a chest that is still locked.
    Locked,
    /// The building gave up its contents and is spent.
    Emptied(Vec<Item>),
}

impl Building {
    /// Per-tick upkeep. Chests are inert.
    pub fn update(&mut self) {
        match self {
            Building::Chest(_) => {}
        }
    }

    /// Invoked by the input layer when an actor acts on the building.
    pub fn interact(&mut self) -> Interaction {
        match self {
            Building::Chest(chest) => match chest.take_contents() {
                Some(items) => Interaction::Emptied(items),
                None => Interaction::Locked,
            },
        }
    }

    pub fn as_chest(&self) -> Option<&Chest> {
        match self {
            Building::Chest(chest) => Some(chest),
        }
    }

    pub fn as_chest_mut(&mut self) -> Option<&mut Chest> {
        match self {
            Building::Chest(chest) => Some(chest),
        }
    }
}

impl From<Chest> for Building {
    fn from(chest: Chest) -> Self {
        Building::Chest(chest)
    }
}

/// Outcome of one lock picking attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockPickingResult {
    pub lock_picked: bool,
    pub pick_broken: bool,
}

/// A locked container with a difficulty `level`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chest {
    inventory: Inventory,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default = "Chest::starts_locked"))]
    locked: bool,
}

impl Chest {
    pub fn new(level: u32) -> Self {
        Self {
            inventory: Inventory::new(GameConfig::DEFAULT_LOCK_PICK_STACK_LIMIT),
            level,
            locked: true,
        }
    }

    pub fn with_items(
        mut self,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<Self, InventoryError> {
        for item in items {
            self.inventory.add_item(item)?;
        }
        Ok(self)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Contents, visible once the lock is open.
    pub fn contents(&self) -> Option<&Inventory> {
        (!self.locked).then_some(&self.inventory)
    }

    /// Moves the contents out of an unlocked chest.
    pub fn take_contents(&mut self) -> Option<Vec<Item>> {
        (!self.locked).then(|| self.inventory.drain().collect())
    }

    /// Probability that `skill` opens this chest.
    pub fn success_chance(&self, skill: f32, params: &LockPickingParams) -> f32 {
        if skill <= 0.0 {
            return 0.0;
        }
        (params.success_scale * skill / (1.0 + self.level as f32)).clamp(0.0, 1.0)
    }

    /// Probability that a failed attempt with `skill` snaps the pick.
    pub fn break_chance(&self, skill: f32, params: &LockPickingParams) -> f32 {
        if skill <= 0.0 {
            return 1.0;
        }
        ((params.break_base + params.break_per_level * self.level as f32) / skill).clamp(0.0, 1.0)
    }

    /// Attempts to open the lock with `picks`.
    ///
    /// The picker's skill is `luck × picks.quality`. A successful attempt
    /// unlocks the chest and never breaks a pick; a failed one may break
    /// exactly one. With no picks, or an already open chest, nothing is
    /// touched and an error is returned instead.
    pub fn try_to_pick<R: Rng + ?Sized>(
        &mut self,
        picks: &mut LockPicks,
        luck: f32,
        params: &LockPickingParams,
        rng: &mut R,
    ) -> Result<LockPickingResult, LockPickError> {
        if picks.is_exhausted() {
            return Err(LockPickError::NoPicks);
        }
        if !self.locked {
            return Err(LockPickError::AlreadyOpen);
        }

        let skill = luck * picks.quality;
        let lock_picked = rng.gen_range(0.0..1.0) < self.success_chance(skill, params);
        let pick_broken =
            !lock_picked && rng.gen_range(0.0..1.0) < self.break_chance(skill, params);

        if lock_picked {
            self.locked = false;
        }
        if pick_broken {
            picks.break_one();
        }
        debug!(
            level = self.level,
            skill,
            lock_picked,
            pick_broken,
            remaining = picks.count,
            "lock picking"
        );

        Ok(LockPickingResult {
            lock_picked,
            pick_broken,
        })
    }

    #[cfg(feature = "serde")]
    fn starts_locked() -> bool {
        true
    }
}

/// Attempts that never happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LockPickError {
    #[error("no lock picks left")]
    NoPicks,

    #[error("chest is already open")]
    AlreadyOpen,
}

impl GameError for LockPickError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPicks => "LOCK_PICK_NO_PICKS",
            Self::AlreadyOpen => "LOCK_PICK_ALREADY_OPEN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Potion;
    use crate::rng::PcgRng;

    /// Never succeeds, always breaks.
    fn hopeless() -> LockPickingParams {
        LockPickingParams::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn empty_picks_touch_nothing() {
        let mut chest = Chest::new(3);
        let mut picks = LockPicks::new(0);
        let mut rng = PcgRng::new(1);

        let before = chest.clone();
        assert_eq!(
            chest.try_to_pick(&mut picks, 1.0, &LockPickingParams::default(), &mut rng),
            Err(LockPickError::NoPicks)
        );
        assert_eq!(chest, before);
        assert_eq!(picks.count, 0);
    }

    #[test]
    fn broken_pick_is_consumed() {
        let mut chest = Chest::new(1);
        let mut picks = LockPicks::new(1);
        let mut rng = PcgRng::new(1);

        let result = chest.try_to_pick(&mut picks, 1.0, &hopeless(), &mut rng).unwrap();
        assert_eq!(
            result,
            LockPickingResult {
                lock_picked: false,
                pick_broken: true
            }
        );
        assert_eq!(picks.count, 0);
        assert_eq!(
            chest.try_to_pick(&mut picks, 1.0, &hopeless(), &mut rng),
            Err(LockPickError::NoPicks)
        );
    }

    #[test]
    fn success_unlocks_and_keeps_pick() {
        let mut chest = Chest::new(0)
            .with_items([Item::new("elixir", Potion::default())])
            .unwrap();
        let mut picks = LockPicks::new(2);
        let mut rng = PcgRng::new(1);
        let certain = LockPickingParams::new(10.0, 1.0, 0.0);

        assert!(chest.contents().is_none());
        let result = chest.try_to_pick(&mut picks, 1.0, &certain, &mut rng).unwrap();
        assert!(result.lock_picked);
        assert!(!result.pick_broken);
        assert_eq!(picks.count, 2);
        assert_eq!(chest.contents().map(Inventory::len), Some(1));
        assert_eq!(
            chest.try_to_pick(&mut picks, 1.0, &certain, &mut rng),
            Err(LockPickError::AlreadyOpen)
        );
    }

    #[test]
    fn harder_locks_are_less_likely_and_more_fragile() {
        let params = LockPickingParams::default();
        let easy = Chest::new(0);
        let hard = Chest::new(5);
        assert!(hard.success_chance(1.0, &params) < easy.success_chance(1.0, &params));
        assert!(hard.break_chance(1.0, &params) > easy.break_chance(1.0, &params));
    }

    #[test]
    fn luck_improves_odds() {
        let params = LockPickingParams::default();
        let chest = Chest::new(3);
        assert!(chest.success_chance(2.0, &params) > chest.success_chance(1.0, &params));
        assert!(chest.break_chance(2.0, &params) < chest.break_chance(1.0, &params));
    }

    #[test]
    fn interact_only_empties_open_chests() {
        let mut building = Building::from(
            Chest::new(0)
                .with_items([Item::new("elixir", Potion::default())])
                .unwrap(),
        );
        assert_eq!(building.interact(), Interaction::Locked);

        let chest = building.as_chest_mut().unwrap();
        chest.try_to_pick(
            &mut LockPicks::new(1),
            1.0,
            &LockPickingParams::new(10.0, 0.0, 0.0),
            &mut PcgRng::new(4),
        )
        .unwrap();

        match building.interact() {
            Interaction::Emptied(items) => assert_eq!(items.len(), 1),
            other => panic!("unexpected {other:?}"),
        }
    }
}
