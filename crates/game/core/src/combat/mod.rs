//! Combat resolution system.
//!
//! Pure formulas live in [`hit`] and [`damage`]; [`resolve_attack`] strings
//! them together for one weapon against one target. Picking targets and
//! handling deaths is the level's job (see
//! [`DungeonLevel::attack`](crate::world::DungeonLevel::attack)).
//!
//! # Core Functions
//!
//! - `resolve_attack`: hit check, damage roll, defence, health update
//! - `calculate_hit_chance`: defence to hit probability
//! - `calculate_damage`: rolled damage to damage after defence
//! - `apply_damage`: health reduction (clamped to `[0, max]`)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{DamageTaken, apply_damage, calculate_damage, reduction_factor};
pub use hit::{calculate_hit_chance, check_hit};
pub use result::{AttackOutcome, AttackResult, Striker, resolve_attack};
