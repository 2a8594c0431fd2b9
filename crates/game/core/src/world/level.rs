//! A single dungeon level: the tile grid and every actor standing on it.
//!
//! The level is the only place actors are moved, removed or handed their
//! loot. Deaths during a pass are marked and compacted once the pass is over,
//! so iteration never skips or revisits an actor.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::actor::{Actor, InventoryError, ItemUse};
use crate::combat::{self, AttackResult, Striker};
use crate::common::{ActorId, Vector2};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemCategory};
use crate::spatial::Placement;

use super::building::{Building, Chest, Interaction, LockPickError, LockPickingResult};
use super::grid::{GridDimensions, TileGrid, TilePosition};
use super::report::{Death, TickReport};
use super::tile::{Tile, TileKind};

/// What [`DungeonLevel::use_item`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemUseOutcome {
    /// A potion, weapon or wearable was used by the actor itself.
    Used(ItemUse),
    /// Lock picks were tried on the chest at `chest`.
    Picked {
        chest: TilePosition,
        result: LockPickingResult,
    },
}

/// What [`DungeonLevel::interact`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    DoorToggled(TileKind),
    ChestLocked,
    /// The chest dropped `items` items on its tile and is gone.
    ChestEmptied { items: usize },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonLevel {
    tiles: TileGrid,
    actors: Vec<Actor>,
    /// Where actors arriving from another level are placed.
    pub entry_position: Vector2,
    tile_size: f32,
    /// Actors killed during the current pass, removed by `compact`.
    #[cfg_attr(feature = "serde", serde(skip))]
    dead: Vec<ActorId>,
    /// Attacks and deaths caused between ticks, opening the next report.
    #[cfg_attr(feature = "serde", serde(skip))]
    pending: TickReport,
}

impl DungeonLevel {
    /// Creates an empty level of floor tiles.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_grid(TileGrid::new(width, height))
    }

    pub fn from_grid(tiles: TileGrid) -> Self {
        Self {
            tiles,
            actors: Vec::new(),
            entry_position: Vector2::ZERO,
            tile_size: GameConfig::DEFAULT_TILE_SIZE,
            dead: Vec::new(),
            pending: TickReport::default(),
        }
    }

    pub fn with_entry_position(mut self, position: Vector2) -> Self {
        self.entry_position = position;
        self
    }

    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    // ========================================================================
    // Tiles
    // ========================================================================

    pub fn dimensions(&self) -> GridDimensions {
        self.tiles.dimensions()
    }

    /// Resizes the grid, keeping in-bounds tiles and filling new cells with floor.
    pub fn resize_tiles(&mut self, width: u32, height: u32) {
        self.tiles.resize(width, height);
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn tile(&self, position: TilePosition) -> Option<&Tile> {
        self.tiles.get(position)
    }

    pub fn tile_mut(&mut self, position: TilePosition) -> Option<&mut Tile> {
        self.tiles.get_mut(position)
    }

    /// Tile containing a world position, or `None` off the grid.
    pub fn get_tile_coordinates(&self, position: Vector2) -> Option<TilePosition> {
        if self.tile_size <= 0.0 || !position.x.is_finite() || !position.y.is_finite() {
            return None;
        }
        let column = (position.x / self.tile_size).floor();
        let row = (position.y / self.tile_size).floor();
        if column < 0.0 || row < 0.0 || column > u32::MAX as f32 || row > u32::MAX as f32 {
            return None;
        }
        let tile = TilePosition::new(column as u32, row as u32);
        self.dimensions().contains(tile).then_some(tile)
    }

    /// World position of a tile's center.
    pub fn tile_center(&self, tile: TilePosition) -> Vector2 {
        Vector2::new(
            (tile.column as f32 + 0.5) * self.tile_size,
            (tile.row as f32 + 0.5) * self.tile_size,
        )
    }

    pub fn get_tile_of_an_actor(&self, actor: &Actor) -> Option<&Tile> {
        self.get_tile_coordinates(actor.position)
            .and_then(|tile| self.tiles.get(tile))
    }

    fn is_walkable(&self, position: Vector2) -> bool {
        self.get_tile_coordinates(position)
            .and_then(|tile| self.tiles.get(tile))
            .is_some_and(Tile::is_passable)
    }

    // ========================================================================
    // Actors
    // ========================================================================

    pub fn spawn(&mut self, actor: Actor) -> Result<(), LevelError> {
        if self.actors.iter().any(|existing| existing.id == actor.id) {
            return Err(LevelError::DuplicateActor(actor.id));
        }
        debug!(actor = %actor.id, position = %actor.position, "spawned");
        self.actors.push(actor);
        Ok(())
    }

    /// Every actor on the level, in update order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    /// Takes an actor off the level without killing it.
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|actor| actor.id == id)?;
        Some(self.actors.remove(index))
    }

    fn index_of(&self, id: ActorId) -> Result<usize, LevelError> {
        self.actors
            .iter()
            .position(|actor| actor.id == id)
            .ok_or(LevelError::UnknownActor(id))
    }

    fn living_index(&self, id: ActorId) -> Result<usize, LevelError> {
        let index = self.index_of(id)?;
        if !self.actors[index].is_alive() {
            return Err(LevelError::DeadActor(id));
        }
        Ok(index)
    }

    fn tile_of(&self, index: usize) -> Result<TilePosition, LevelError> {
        let actor = &self.actors[index];
        self.get_tile_coordinates(actor.position)
            .ok_or(LevelError::OffGrid(actor.id))
    }

    /// Moves an actor to `destination` and turns it to face the motion.
    pub fn move_actor(&mut self, id: ActorId, destination: Vector2) -> Result<(), LevelError> {
        let index = self.living_index(id)?;
        let tile = self
            .get_tile_coordinates(destination)
            .ok_or(LevelError::Blocked { tile: None })?;
        if !self.tiles.get(tile).is_some_and(Tile::is_passable) {
            return Err(LevelError::Blocked { tile: Some(tile) });
        }

        let actor = &mut self.actors[index];
        if let Some(facing) = (destination - actor.position).normalized() {
            actor.facing = facing;
        }
        actor.position = destination;
        Ok(())
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// Advances every actor and building once, in list order.
    ///
    /// Enemies turn toward the nearest hostile, close in and swing every
    /// ready weapon. Actors that die during the pass are skipped for the rest
    /// of it and removed before this returns.
    ///
    /// The report opens with whatever player actions caused since the last
    /// tick.
    pub fn update<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) -> TickReport {
        let mut report = std::mem::take(&mut self.pending);

        // Length is fixed for the pass: deaths only mark.
        for index in 0..self.actors.len() {
            if self.dead.contains(&self.actors[index].id) {
                continue;
            }
            self.actors[index].update();

            if !self.actors[index].is_alive() {
                self.kill(index, None, &mut report.deaths);
                continue;
            }
            if !self.actors[index].is_player() {
                self.enemy_turn(index, config, rng, &mut report);
            }
        }

        for tile in self.tiles.iter_mut() {
            if let Some(building) = tile.building.as_mut() {
                building.update();
            }
        }

        self.compact();
        report
    }

    fn nearest_hostile(&self, index: usize) -> Option<Vector2> {
        let actor = &self.actors[index];
        self.actors
            .iter()
            .filter(|other| {
                actor.is_hostile_to(other) && other.is_alive() && !self.dead.contains(&other.id)
            })
            .map(|other| other.position)
            .min_by(|a, b| {
                a.distance_squared(actor.position)
                    .total_cmp(&b.distance_squared(actor.position))
            })
    }

    fn enemy_turn<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        config: &GameConfig,
        rng: &mut R,
        report: &mut TickReport,
    ) {
        let Some(target) = self.nearest_hostile(index) else {
            return;
        };

        let actor = &self.actors[index];
        let offset = target - actor.position;
        let facing = offset.normalized().unwrap_or(actor.facing);
        let placement = Placement::new(actor.position, facing);
        let in_reach = actor
            .equipment()
            .weapons()
            .iter()
            .filter_map(Item::as_weapon)
            .any(|weapon| weapon.distribution.affects_world(&placement, target));
        let step = actor.effective_characteristics().speed.max(0.0) * config.tick_seconds;

        if !in_reach && step > 0.0 {
            let destination = actor.position + facing * step.min(offset.length());
            if self.is_walkable(destination) {
                trace!(actor = %self.actors[index].id, to = %destination, "step");
                self.actors[index].position = destination;
            }
        }
        self.actors[index].facing = facing;

        let results = self.strike(index, config, rng, &mut report.deaths);
        report.attacks.extend(results);
    }

    // ========================================================================
    // Combat
    // ========================================================================

    /// Attacks with every ready weapon of `attacker`.
    ///
    /// Each weapon's footprint is placed at the attacker and every living
    /// hostile actor inside it is struck. Weapons that reached anything go on
    /// cooldown. Killed actors are removed before this returns; the attacks
    /// and deaths also appear in the next [`TickReport`].
    pub fn attack<R: Rng + ?Sized>(
        &mut self,
        attacker: ActorId,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Vec<AttackResult>, LevelError> {
        let index = self.living_index(attacker)?;
        let mut deaths = Vec::new();
        let results = self.strike(index, config, rng, &mut deaths);
        self.compact();

        self.pending.attacks.extend_from_slice(&results);
        self.pending.deaths.append(&mut deaths);
        Ok(results)
    }

    fn strike<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        config: &GameConfig,
        rng: &mut R,
        deaths: &mut Vec<Death>,
    ) -> Vec<AttackResult> {
        let striker = Striker {
            id: self.actors[index].id,
            position: self.actors[index].position,
        };
        let placement = self.actors[index].placement();
        let weapon_count = self.actors[index].equipment().weapons().len();
        let mut results = Vec::new();

        for slot in 0..weapon_count {
            let Some(weapon) = self.actors[index].equipment().weapons()[slot]
                .as_weapon()
                .filter(|weapon| weapon.is_ready())
                .cloned()
            else {
                continue;
            };

            let attacker = &self.actors[index];
            let targets: Vec<usize> = self
                .actors
                .iter()
                .enumerate()
                .filter(|(_, target)| {
                    attacker.is_hostile_to(target)
                        && target.is_alive()
                        && !self.dead.contains(&target.id)
                        && weapon.distribution.affects_world(&placement, target.position)
                })
                .map(|(target, _)| target)
                .collect();
            if targets.is_empty() {
                continue;
            }

            for target in targets {
                let outcome = combat::resolve_attack(
                    striker,
                    &weapon,
                    &mut self.actors[target],
                    &config.combat,
                    rng,
                );
                results.push(AttackResult {
                    attacker: striker.id,
                    target: self.actors[target].id,
                    weapon: slot,
                    outcome,
                });
                if outcome.killed() {
                    self.kill(target, Some(striker.id), deaths);
                }
            }

            if let Some(weapon) = self.actors[index].weapons_mut()[slot].as_weapon_mut() {
                weapon.ensure_cooldown();
            }
        }
        results
    }

    /// Removes an actor from play. `reason` is the killer, if any.
    ///
    /// The actor's inventory or loot is left on its tile and the killer is awarded
    /// experience. A second call for the same actor fails with
    /// [`LevelError::UnknownActor`] because the actor is already gone.
    pub fn die(&mut self, actor: ActorId, reason: Option<ActorId>) -> Result<Death, LevelError> {
        let index = self.index_of(actor)?;
        let mut deaths = Vec::new();
        self.kill(index, reason, &mut deaths);
        self.compact();
        deaths.pop().ok_or(LevelError::UnknownActor(actor))
    }

    fn kill(&mut self, index: usize, killer: Option<ActorId>, deaths: &mut Vec<Death>) {
        let id = self.actors[index].id;
        if self.dead.contains(&id) {
            return;
        }
        self.dead.push(id);

        let victim = &mut self.actors[index];
        victim.set_dead();
        let position = victim.position;
        let victim_level = victim.level();
        let dropped = victim.take_remains();

        if !dropped.is_empty() {
            match self
                .get_tile_coordinates(position)
                .and_then(|tile| self.tiles.get_mut(tile))
            {
                Some(tile) => tile.laying_items.extend(dropped),
                None => warn!(actor = %id, lost = dropped.len(), "died off the grid, loot lost"),
            }
        }

        if let Some(winner) = killer.and_then(|k| self.actors.iter_mut().find(|a| a.id == k)) {
            let gained = winner.reward_kill(victim_level);
            if gained > 0 {
                debug!(actor = %winner.id, level = winner.level(), "level up");
            }
        }

        debug!(actor = %id, killer = ?killer, "died");
        deaths.push(Death {
            victim: id,
            killer,
            position,
        });
    }

    fn compact(&mut self) {
        if self.dead.is_empty() {
            return;
        }
        let dead = std::mem::take(&mut self.dead);
        self.actors.retain(|actor| !dead.contains(&actor.id));
    }

    /// Kills every actor left at zero health outside combat, such as by a
    /// potion or by shedding gear.
    fn reap(&mut self) {
        for index in 0..self.actors.len() {
            if !self.actors[index].is_alive() {
                let mut deaths = Vec::new();
                self.kill(index, None, &mut deaths);
                self.pending.deaths.append(&mut deaths);
            }
        }
        self.compact();
    }

    /// Takes the attacks and deaths recorded since the last tick, reaping any
    /// actor whose health dropped to zero in the meantime.
    pub fn flush(&mut self) -> TickReport {
        self.reap();
        std::mem::take(&mut self.pending)
    }

    /// Carries events recorded elsewhere into this level's next report.
    pub fn defer(&mut self, mut report: TickReport) {
        self.pending.attacks.append(&mut report.attacks);
        self.pending.deaths.append(&mut report.deaths);
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Moves item `item_index` lying on `tile` into the actor's inventory.
    ///
    /// The actor's own tile is always in reach; any other tile's center must
    /// be within `pick_up_range` tiles. A full inventory leaves whatever did
    /// not fit on the tile.
    pub fn pick_up_item(
        &mut self,
        actor: ActorId,
        tile: TilePosition,
        item_index: usize,
        config: &GameConfig,
    ) -> Result<(), LevelError> {
        let index = self.living_index(actor)?;
        let reach = config.pick_up_range * self.tile_size;
        let center = self.tile_center(tile);
        let own_tile = self.tile_of(index).ok() == Some(tile);
        if !own_tile && center.distance_squared(self.actors[index].position) > reach.powi(2) {
            return Err(LevelError::OutOfReach { tile });
        }

        let floor = self.tiles.get_mut(tile).ok_or(LevelError::OutOfBounds { tile })?;
        let inventory = self.actors[index]
            .inventory_mut()
            .ok_or(InventoryError::NoInventory)?;
        if item_index >= floor.laying_items.len() {
            return Err(LevelError::ItemNotOnTile {
                tile,
                index: item_index,
            });
        }

        let item = floor.laying_items.remove(item_index);
        let name = item.name.clone();
        match inventory.add_item(item) {
            Ok(()) => {
                debug!(actor = %actor, item = %name, "picked up");
                Ok(())
            }
            Err(InventoryError::Full(rest)) => {
                floor.laying_items.insert(item_index, *rest);
                Err(LevelError::InventoryFull { tile })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Moves inventory item `index` onto the actor's tile.
    pub fn drop_item(&mut self, actor: ActorId, index: usize) -> Result<(), LevelError> {
        let actor_index = self.living_index(actor)?;
        let tile = self.tile_of(actor_index)?;
        let floor = self.tiles.get_mut(tile).ok_or(LevelError::OutOfBounds { tile })?;
        let inventory = self.actors[actor_index]
            .inventory_mut()
            .ok_or(InventoryError::NoInventory)?;

        let item = inventory.remove(index)?;
        debug!(actor = %actor, item = %item.name, %tile, "dropped");
        floor.laying_items.push(item);
        Ok(())
    }

    /// Uses inventory item `index`.
    ///
    /// Lock picks go to work on the nearest locked chest within
    /// `picking_range` tiles; a picked chest spills its contents onto its
    /// tile and disappears. Spent picks are discarded. Everything else is
    /// handled by [`Actor::use_item`]; an actor that does not survive its own
    /// potion or gear change dies at once.
    pub fn use_item<R: Rng + ?Sized>(
        &mut self,
        actor: ActorId,
        index: usize,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<ItemUseOutcome, LevelError> {
        let actor_index = self.living_index(actor)?;
        let category = self.actors[actor_index]
            .inventory()
            .and_then(|inventory| inventory.get(index))
            .map(Item::category);

        if category != Some(ItemCategory::LockPicks) {
            let used = self.actors[actor_index].use_item(index)?;
            self.reap();
            return Ok(ItemUseOutcome::Used(used));
        }

        let chest = self.nearest_locked_chest(actor_index, config.picking_range)?;
        let luck = self.actors[actor_index].effective_characteristics().luck;

        let inventory = self.actors[actor_index]
            .inventory_mut()
            .ok_or(InventoryError::NoInventory)?;
        let picks = inventory
            .get_mut(index)
            .and_then(Item::as_lock_picks_mut)
            .ok_or(LockPickError::NoPicks)?;
        let target = self
            .tiles
            .get_mut(chest)
            .and_then(|tile| tile.building.as_mut())
            .and_then(Building::as_chest_mut)
            .ok_or(LevelError::NoChestInRange)?;

        let result = target.try_to_pick(picks, luck, &config.lock_picking, rng)?;
        inventory.discard_exhausted();

        if result.lock_picked {
            self.open_building(chest);
        }
        Ok(ItemUseOutcome::Picked { chest, result })
    }

    fn nearest_locked_chest(&self, index: usize, range: f32) -> Result<TilePosition, LevelError> {
        let origin = self.tile_of(index)?;
        let distance = |tile: TilePosition| {
            let dc = tile.column as f32 - origin.column as f32;
            let dr = tile.row as f32 - origin.row as f32;
            (dc * dc + dr * dr).sqrt()
        };

        self.tiles
            .iter()
            .filter(|(_, tile)| {
                tile.building
                    .as_ref()
                    .and_then(Building::as_chest)
                    .is_some_and(Chest::is_locked)
            })
            .map(|(position, _)| position)
            .filter(|position| distance(*position) <= range)
            .min_by(|a, b| distance(*a).total_cmp(&distance(*b)))
            .ok_or(LevelError::NoChestInRange)
    }

    fn open_building(&mut self, position: TilePosition) -> Option<InteractionOutcome> {
        let tile = self.tiles.get_mut(position)?;
        match tile.building.as_mut()?.interact() {
            Interaction::Locked => Some(InteractionOutcome::ChestLocked),
            Interaction::Emptied(items) => {
                let count = items.len();
                tile.laying_items.extend(items);
                tile.building = None;
                debug!(tile = %position, items = count, "chest emptied");
                Some(InteractionOutcome::ChestEmptied { items: count })
            }
        }
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Acts on the tile at `target`, which must be the actor's own tile or a neighbour.
    ///
    /// A building on the tile takes precedence; otherwise a door is opened or
    /// closed. Doors cannot be closed on an actor.
    pub fn interact(
        &mut self,
        actor: ActorId,
        target: TilePosition,
    ) -> Result<InteractionOutcome, LevelError> {
        let index = self.living_index(actor)?;
        let origin = self.tile_of(index)?;
        if origin.chebyshev(target) > 1 {
            return Err(LevelError::NotAdjacent { tile: target });
        }

        let occupied = self
            .actors
            .iter()
            .any(|other| self.get_tile_coordinates(other.position) == Some(target));
        let tile = self
            .tiles
            .get(target)
            .ok_or(LevelError::OutOfBounds { tile: target })?;

        if tile.building.is_some() {
            return self
                .open_building(target)
                .ok_or(LevelError::NothingToInteract { tile: target });
        }

        let toggled = tile
            .kind
            .toggled()
            .ok_or(LevelError::NothingToInteract { tile: target })?;
        if toggled == TileKind::ClosedDoor && occupied {
            return Err(LevelError::DoorBlocked { tile: target });
        }
        if let Some(tile) = self.tiles.get_mut(target) {
            tile.kind = toggled;
        }
        debug!(actor = %actor, tile = %target, kind = ?toggled, "door");
        Ok(InteractionOutcome::DoorToggled(toggled))
    }
}

/// Errors raised by level operations. None of them stop the simulation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LevelError {
    #[error("actor {0} is not on this level")]
    UnknownActor(ActorId),

    #[error("actor {0} is already on this level")]
    DuplicateActor(ActorId),

    #[error("actor {0} is dead")]
    DeadActor(ActorId),

    #[error("actor {0} stands outside the tile grid")]
    OffGrid(ActorId),

    #[error("tile {tile} is outside the level")]
    OutOfBounds { tile: TilePosition },

    #[error("destination is not walkable ({tile:?})")]
    Blocked { tile: Option<TilePosition> },

    #[error("tile {tile} is out of reach")]
    OutOfReach { tile: TilePosition },

    #[error("tile {tile} is not adjacent")]
    NotAdjacent { tile: TilePosition },

    #[error("nothing to interact with at {tile}")]
    NothingToInteract { tile: TilePosition },

    #[error("door at {tile} is blocked")]
    DoorBlocked { tile: TilePosition },

    #[error("no item {index} on tile {tile}")]
    ItemNotOnTile { tile: TilePosition, index: usize },

    #[error("inventory is full; item left on tile {tile}")]
    InventoryFull { tile: TilePosition },

    #[error("no locked chest within reach")]
    NoChestInRange,

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    LockPick(#[from] LockPickError),
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownActor(_) | Self::DuplicateActor(_) | Self::DeadActor(_) => {
                ErrorSeverity::Validation
            }
            Self::Inventory(err) => err.severity(),
            Self::LockPick(err) => err.severity(),
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "LEVEL_UNKNOWN_ACTOR",
            Self::DuplicateActor(_) => "LEVEL_DUPLICATE_ACTOR",
            Self::DeadActor(_) => "LEVEL_DEAD_ACTOR",
            Self::OffGrid(_) => "LEVEL_OFF_GRID",
            Self::OutOfBounds { .. } => "LEVEL_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "LEVEL_BLOCKED",
            Self::OutOfReach { .. } => "LEVEL_OUT_OF_REACH",
            Self::NotAdjacent { .. } => "LEVEL_NOT_ADJACENT",
            Self::NothingToInteract { .. } => "LEVEL_NOTHING_TO_INTERACT",
            Self::DoorBlocked { .. } => "LEVEL_DOOR_BLOCKED",
            Self::ItemNotOnTile { .. } => "LEVEL_ITEM_NOT_ON_TILE",
            Self::InventoryFull { .. } => "LEVEL_INVENTORY_FULL",
            Self::NoChestInRange => "LEVEL_NO_CHEST_IN_RANGE",
            Self::Inventory(err) => err.error_code(),
            Self::LockPick(err) => err.error_code(),
        }
    }
}
