//! Deterministic dungeon-crawler simulation rules.
//!
//! `crawler-core` defines actors, items, combat, lock picking and the dungeon
//! world, and exposes pure APIs driven by an external tick. It performs no
//! I/O: content loading and the host loop live in `crawler-content` and
//! `crawler-runtime`. All randomness is drawn from an explicit `rand::Rng`,
//! so a [`Game`] built from the same seed replays identically.
pub mod actor;
pub mod combat;
pub mod common;
pub mod config;
pub mod error;
pub mod game;
pub mod item;
pub mod rng;
pub mod spatial;
pub mod stats;
pub mod world;

pub use actor::{
    Actor, ActorKind, EnemyState, EquipError, Equipment, EquipmentBuilder, Inventory,
    InventoryError, ItemUse, PlayerState,
};
pub use combat::{AttackOutcome, AttackResult, DamageTaken};
pub use common::{ActorClass, ActorId, IconHandle, Tick, Vector2};
pub use config::{CombatParams, GameConfig, LockPickingParams};
pub use error::{ErrorSeverity, GameError};
pub use game::{Game, GameStateError};
pub use item::{
    Enchantment, Item, ItemCategory, ItemError, ItemKind, LockPicks, Potion, RangeOfValues,
    Weapon, Wearable, WearableKind,
};
pub use rng::{PcgRng, compute_seed};
pub use spatial::{Placement, SpatialDistribution};
pub use stats::{Characteristics, CharacteristicsModifier, Experience, ValueModifier};
pub use world::{
    Building, Chest, Death, DungeonLevel, GridDimensions, Interaction, InteractionOutcome,
    ItemUseOutcome, LevelError, LockPickError, LockPickingResult, TickReport, Tile, TileGrid,
    TileKind, TilePosition,
};
