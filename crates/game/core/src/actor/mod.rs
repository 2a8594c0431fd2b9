//! Actors: players and enemies.
//!
//! Shared state (position, health, base characteristics, equipment) lives on
//! [`Actor`]; what differs between the player and enemies is carried in
//! [`ActorKind`].
//!
//! # Invariants
//!
//! - `0 <= health <= effective max_health` after every mutation made through
//!   this type (damage, potions, equip, unequip)
//! - Effective characteristics are derived from the base value and the
//!   current equipment on every read, never cached

pub mod equipment;
pub mod inventory;

pub use equipment::{EquipError, Equipment, EquipmentBuilder};
pub use inventory::{Inventory, InventoryError};

use rand::Rng;
use tracing::debug;

use crate::combat::{self, DamageTaken};
use crate::common::{ActorClass, ActorId, Vector2};
use crate::config::CombatParams;
use crate::item::{Item, ItemCategory, ItemKind, WearableKind};
use crate::spatial::Placement;
use crate::stats::{self, Characteristics, CharacteristicsModifier, Experience};

/// State only the player carries.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub inventory: Inventory,
    pub experience: Experience,
}

/// State only enemies carry.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    /// Determines the experience granted on death.
    pub level: u32,
    /// Left on the death tile.
    pub loot: Vec<Item>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player(PlayerState),
    Enemy(EnemyState),
}

/// What happened when an inventory item was used.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemUse {
    /// A potion was drunk and is gone.
    Consumed,
    /// Gear was equipped. A displaced wearable went back to the inventory.
    Equipped { displaced: Option<String> },
}

/// A combatant placed in a dungeon level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub actor_class: ActorClass,
    /// Continuous world position. Only the owning level moves actors.
    pub position: Vector2,
    /// Unit vector the actor looks along.
    pub facing: Vector2,

    // === SSOT: base stats and current health ===
    health: f32,
    characteristics: Characteristics,

    // === State affecting effective stats ===
    equipment: Equipment,

    pub kind: ActorKind,
}

impl Actor {
    /// Creates the player at full health with an empty inventory.
    pub fn player(id: ActorId, characteristics: Characteristics) -> Self {
        Self::new(
            id,
            ActorClass::PLAYER,
            characteristics,
            ActorKind::Player(PlayerState::default()),
        )
    }

    /// Creates an enemy at full health.
    pub fn enemy(
        id: ActorId,
        actor_class: ActorClass,
        level: u32,
        characteristics: Characteristics,
    ) -> Self {
        Self::new(
            id,
            actor_class,
            characteristics,
            ActorKind::Enemy(EnemyState {
                level,
                loot: Vec::new(),
            }),
        )
    }

    fn new(
        id: ActorId,
        actor_class: ActorClass,
        characteristics: Characteristics,
        kind: ActorKind,
    ) -> Self {
        Self {
            id,
            actor_class,
            position: Vector2::ZERO,
            facing: Vector2::RIGHT,
            health: characteristics.max_health.max(0.0),
            characteristics,
            equipment: Equipment::empty(),
            kind,
        }
    }

    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    pub fn with_facing(mut self, facing: Vector2) -> Self {
        self.facing = facing.normalized().unwrap_or(Vector2::RIGHT);
        self
    }

    /// Replaces the equipment and refills health to the new effective maximum.
    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self.health = self.effective_characteristics().max_health.max(0.0);
        self
    }

    /// Replaces the player's inventory. Enemies carry none, so this is a no-op for them.
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        if let ActorKind::Player(player) = &mut self.kind {
            player.inventory = inventory;
        }
        self
    }

    /// Sets what an enemy drops when it dies. Ignored for the player.
    pub fn with_loot(mut self, loot: impl IntoIterator<Item = Item>) -> Self {
        if let ActorKind::Enemy(enemy) = &mut self.kind {
            enemy.loot = loot.into_iter().collect();
        }
        self
    }

    pub fn with_experience(mut self, experience: Experience) -> Self {
        if let ActorKind::Player(player) = &mut self.kind {
            player.experience = experience;
        }
        self
    }

    // ========================================================================
    // Identity
    // ========================================================================

    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player(_))
    }

    /// Players and enemies fight each other; neither side harms its own.
    pub fn is_hostile_to(&self, other: &Actor) -> bool {
        self.id != other.id && self.is_player() != other.is_player()
    }

    /// Experience level for the player, difficulty level for enemies.
    pub fn level(&self) -> u32 {
        match &self.kind {
            ActorKind::Player(player) => player.experience.level,
            ActorKind::Enemy(enemy) => enemy.level,
        }
    }

    pub fn experience(&self) -> Option<&Experience> {
        match &self.kind {
            ActorKind::Player(player) => Some(&player.experience),
            ActorKind::Enemy(_) => None,
        }
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        match &self.kind {
            ActorKind::Player(player) => Some(&player.inventory),
            ActorKind::Enemy(_) => None,
        }
    }

    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match &mut self.kind {
            ActorKind::Player(player) => Some(&mut player.inventory),
            ActorKind::Enemy(_) => None,
        }
    }

    /// Takes everything the actor leaves behind on death: the player's
    /// inventory or an enemy's loot.
    pub(crate) fn take_remains(&mut self) -> Vec<Item> {
        match &mut self.kind {
            ActorKind::Player(player) => player.inventory.drain().collect(),
            ActorKind::Enemy(enemy) => std::mem::take(&mut enemy.loot),
        }
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.position, self.facing)
    }

    // ========================================================================
    // Stats
    // ========================================================================

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn base_characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    /// Base characteristics with every equipped modifier folded in.
    pub fn effective_characteristics(&self) -> Characteristics {
        stats::effective(&self.characteristics, self.equipment.modifiers())
    }

    /// Permanently applies `modifier` to the base characteristics.
    ///
    /// Raising the effective maximum heals a living actor by the same amount;
    /// lowering it clamps current health.
    pub fn bake_in(&mut self, modifier: &CharacteristicsModifier) {
        let before = self.effective_characteristics().max_health;
        modifier.apply(&mut self.characteristics);
        let after = self.effective_characteristics().max_health;
        if after > before && self.is_alive() {
            self.health += after - before;
        }
        self.clamp_health();
    }

    /// Restores up to `amount` health. Dead actors stay dead.
    pub fn heal(&mut self, amount: f32) {
        if self.is_alive() && amount > 0.0 {
            self.health += amount;
            self.clamp_health();
        }
    }

    /// Drops health to zero regardless of defence.
    pub(crate) fn set_dead(&mut self) {
        self.health = 0.0;
    }

    fn clamp_health(&mut self) {
        let max = self.effective_characteristics().max_health.max(0.0);
        self.health = self.health.clamp(0.0, max);
    }

    /// Awards experience for killing an actor of `victim_level`.
    ///
    /// Returns the number of levels gained; enemies never gain levels.
    pub fn reward_kill(&mut self, victim_level: u32) -> u32 {
        match &mut self.kind {
            ActorKind::Player(player) => player
                .experience
                .gain(Experience::value_after_death(victim_level)),
            ActorKind::Enemy(_) => 0,
        }
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub(crate) fn weapons_mut(&mut self) -> &mut [Item] {
        self.equipment.weapons_mut()
    }

    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, EquipError> {
        let name = item.name.clone();
        let displaced = self.equipment.equip(item)?;
        self.clamp_health();
        debug!(actor = %self.id, item = %name, "equipped");
        Ok(displaced)
    }

    pub fn equip_into(
        &mut self,
        slot: WearableKind,
        item: Item,
    ) -> Result<Option<Item>, EquipError> {
        let displaced = self.equipment.equip_into(slot, item)?;
        self.clamp_health();
        Ok(displaced)
    }

    pub fn unequip_wearable(&mut self, slot: WearableKind) -> Option<Item> {
        let item = self.equipment.unequip_wearable(slot);
        self.clamp_health();
        item
    }

    pub fn unequip_weapon(&mut self, index: usize) -> Option<Item> {
        let item = self.equipment.unequip_weapon(index);
        self.clamp_health();
        item
    }

    /// Uses the inventory item at `index`.
    ///
    /// Potions are drunk and removed. Weapons and wearables are equipped; a
    /// wearable pushed out of its slot takes the freed inventory slot. Lock
    /// picks need a chest and are rejected here.
    pub fn use_item(&mut self, index: usize) -> Result<ItemUse, InventoryError> {
        let inventory = self.inventory_mut().ok_or(InventoryError::NoInventory)?;
        let category = inventory
            .get(index)
            .map(Item::category)
            .ok_or(InventoryError::InvalidSlot {
                index,
                len: inventory.len(),
            })?;
        if category == ItemCategory::LockPicks {
            return Err(InventoryError::RequiresTarget { category });
        }
        let item = inventory.remove(index)?;

        if let ItemKind::Potion(potion) = &item.kind {
            potion.apply(self);
            debug!(actor = %self.id, item = %item.name, "potion consumed");
            return Ok(ItemUse::Consumed);
        }

        let displaced = self.equip(item)?;
        let displaced_name = displaced.as_ref().map(|item| item.name.clone());
        if let (Some(item), Some(inventory)) = (displaced, self.inventory_mut()) {
            inventory.add_item(item)?;
        }
        Ok(ItemUse::Equipped {
            displaced: displaced_name,
        })
    }

    // ========================================================================
    // Combat
    // ========================================================================

    /// Probability that an incoming attack lands, from effective defence.
    pub fn chance_to_take_damage(&self, params: &CombatParams) -> f32 {
        combat::calculate_hit_chance(self.effective_characteristics().defence, params)
    }

    /// Applies `amount` of raw damage coming from `source`.
    ///
    /// Effective defence, plus whatever worn armour rolls against an attacker
    /// at `source`, reduces the damage before it is subtracted. Non-positive
    /// amounts and already-dead actors are left untouched, so `killed` is
    /// reported exactly once per actor.
    pub fn take_damage<R: Rng + ?Sized>(
        &mut self,
        amount: f32,
        source: Option<Vector2>,
        params: &CombatParams,
        rng: &mut R,
    ) -> DamageTaken {
        if !self.is_alive() || amount.is_nan() || amount <= 0.0 {
            return DamageTaken::NONE;
        }

        let effective = self.effective_characteristics();
        let rolled = source.map_or(0.0, |from| self.roll_armour(from, rng));
        let damage = combat::calculate_damage(amount, effective.defence + rolled, params);

        let before = self.health;
        self.health = combat::apply_damage(self.health, damage, effective.max_health);

        DamageTaken {
            dealt: (before - self.health).max(0.0),
            killed: !self.is_alive(),
        }
    }

    fn roll_armour<R: Rng + ?Sized>(&self, attacker: Vector2, rng: &mut R) -> f32 {
        let placement = self.placement();
        self.equipment
            .wearables()
            .filter_map(|(_, item)| item.and_then(Item::as_wearable))
            .map(|wearable| wearable.generate_defence(&placement, attacker, rng))
            .sum()
    }

    /// Per-tick upkeep: weapon cooldowns count down.
    pub fn update(&mut self) {
        for weapon in self.weapons_mut().iter_mut().filter_map(Item::as_weapon_mut) {
            weapon.tick_cooldown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Potion, RangeOfValues, Weapon, Wearable};
    use crate::rng::PcgRng;
    use crate::spatial::SpatialDistribution;
    use crate::stats::ValueModifier;

    fn hero() -> Actor {
        Actor::player(ActorId::PLAYER, Characteristics::new(100.0, 5.0))
    }

    fn ring_of_vigour(amount: f32) -> Item {
        Item::new(
            "ring",
            Wearable::new(WearableKind::Amulet).with_artefact(
                CharacteristicsModifier::new().max_health(ValueModifier::AddToValue(amount)),
            ),
        )
    }

    fn sword(cooldown: u32) -> Item {
        Item::new(
            "sword",
            Weapon::new(
                RangeOfValues::new(10.0, 20.0).unwrap(),
                SpatialDistribution::Circle { radius: 1.5 },
            )
            .with_cooldown(cooldown),
        )
    }

    #[test]
    fn equip_then_unequip_restores_baseline() {
        let mut actor = hero();
        let baseline = actor.effective_characteristics();

        actor
            .equip(Item::new(
                "helm",
                Wearable::new(WearableKind::Helmet).with_artefact(
                    CharacteristicsModifier::new().defence(ValueModifier::AddToValue(3.0)),
                ),
            ))
            .unwrap();
        assert_eq!(actor.effective_characteristics().defence, 8.0);

        actor.unequip_wearable(WearableKind::Helmet);
        assert_eq!(actor.effective_characteristics(), baseline);
    }

    #[test]
    fn unequipping_max_health_clamps() {
        let mut actor = hero().with_equipment(
            Equipment::builder().item(ring_of_vigour(50.0)).build().unwrap(),
        );
        assert_eq!(actor.health(), 150.0);
        actor.unequip_wearable(WearableKind::Amulet);
        assert_eq!(actor.health(), 100.0);
    }

    #[test]
    fn potion_bakes_into_base_and_heals_delta() {
        let mut actor = hero();
        let mut rng = PcgRng::new(1);
        actor.take_damage(30.0, None, &CombatParams::always_hit_no_reduction(), &mut rng);
        assert_eq!(actor.health(), 70.0);

        Potion::new(CharacteristicsModifier::new().max_health(ValueModifier::AddToValue(20.0)))
            .apply(&mut actor);
        assert_eq!(actor.base_characteristics().max_health, 120.0);
        assert_eq!(actor.health(), 90.0);
    }

    #[test]
    fn draining_potion_clamps_health() {
        let mut actor = hero();
        Potion::new(
            CharacteristicsModifier::new().max_health(ValueModifier::SetAbsoluteValue(40.0)),
        )
        .apply(&mut actor);
        assert_eq!(actor.health(), 40.0);
    }

    #[test]
    fn take_damage_ignores_non_positive_amounts() {
        let mut actor = hero();
        let mut rng = PcgRng::new(1);
        let params = CombatParams::default();
        assert_eq!(actor.take_damage(0.0, None, &params, &mut rng), DamageTaken::NONE);
        assert_eq!(actor.take_damage(-3.0, None, &params, &mut rng), DamageTaken::NONE);
        assert_eq!(actor.health(), 100.0);
    }

    #[test]
    fn killed_is_reported_once() {
        let mut actor = hero();
        let mut rng = PcgRng::new(1);
        let params = CombatParams::always_hit_no_reduction();

        let first = actor.take_damage(500.0, None, &params, &mut rng);
        assert!(first.killed);
        assert_eq!(first.dealt, 100.0);
        assert_eq!(actor.health(), 0.0);

        let second = actor.take_damage(500.0, None, &params, &mut rng);
        assert_eq!(second, DamageTaken::NONE);
    }

    #[test]
    fn shield_only_rolls_against_frontal_attacks() {
        let shield = Item::new(
            "shield",
            Wearable::new(WearableKind::Shield)
                .with_defence_range(RangeOfValues::fixed(100.0).unwrap())
                .with_distribution(SpatialDistribution::Sector {
                    radius: 10.0,
                    half_angle: core::f32::consts::FRAC_PI_4,
                }),
        );
        let params = CombatParams::default();
        let mut rng = PcgRng::new(9);

        let mut front = Actor::player(ActorId::PLAYER, Characteristics::new(100.0, 0.0))
            .with_equipment(Equipment::builder().item(shield).build().unwrap());
        let mut back = front.clone();

        let blocked = front.take_damage(20.0, Some(Vector2::new(2.0, 0.0)), &params, &mut rng);
        let open = back.take_damage(20.0, Some(Vector2::new(-2.0, 0.0)), &params, &mut rng);
        assert_eq!(blocked.dealt, 10.0);
        assert_eq!(open.dealt, 20.0);
    }

    #[test]
    fn use_item_equips_and_returns_displaced() {
        let helm = |name: &str| Item::new(name, Wearable::new(WearableKind::Helmet));
        let mut actor = hero().with_inventory(
            Inventory::with_items(16, [helm("old"), helm("new")]).unwrap(),
        );

        assert_eq!(actor.use_item(0), Ok(ItemUse::Equipped { displaced: None }));
        assert_eq!(
            actor.use_item(0),
            Ok(ItemUse::Equipped {
                displaced: Some("old".into())
            })
        );
        let inventory = actor.inventory().unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(0).unwrap().name, "old");
    }

    #[test]
    fn use_item_rejects_lock_picks_and_enemies() {
        let picks = Item::new("picks", crate::item::LockPicks::new(3));
        let mut actor = hero().with_inventory(Inventory::with_items(16, [picks]).unwrap());
        assert_eq!(
            actor.use_item(0),
            Err(InventoryError::RequiresTarget {
                category: ItemCategory::LockPicks
            })
        );

        let mut goblin = Actor::enemy(ActorId(7), ActorClass(1), 1, Characteristics::default());
        assert_eq!(goblin.use_item(0), Err(InventoryError::NoInventory));
    }

    #[test]
    fn update_ticks_weapon_cooldowns() {
        let mut actor = hero().with_equipment(Equipment::builder().item(sword(2)).build().unwrap());
        actor.weapons_mut()[0].as_weapon_mut().unwrap().ensure_cooldown();
        assert!(!actor.equipment().weapons()[0].as_weapon().unwrap().is_ready());
        actor.update();
        actor.update();
        assert!(actor.equipment().weapons()[0].as_weapon().unwrap().is_ready());
    }

    #[test]
    fn hostility_is_between_sides() {
        let player = hero();
        let goblin = Actor::enemy(ActorId(2), ActorClass(1), 1, Characteristics::default());
        let orc = Actor::enemy(ActorId(3), ActorClass(2), 1, Characteristics::default());
        assert!(player.is_hostile_to(&goblin));
        assert!(goblin.is_hostile_to(&player));
        assert!(!goblin.is_hostile_to(&orc));
    }

    #[test]
    fn kill_reward_levels_player_only() {
        let mut player = hero();
        assert_eq!(player.reward_kill(3), 1);
        assert_eq!(player.level(), 2);

        let mut goblin = Actor::enemy(ActorId(2), ActorClass(1), 4, Characteristics::default());
        assert_eq!(goblin.reward_kill(3), 0);
        assert_eq!(goblin.level(), 4);
    }
}
