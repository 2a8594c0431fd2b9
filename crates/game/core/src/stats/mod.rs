//! Stat system.
//!
//! # Architecture
//!
//! ```text
//! [ Characteristics (base, stored) ]
//!      ↓  fold of CharacteristicsModifier sources (equipped weapons, then wearable slots)
//! [ Characteristics (effective, never stored) ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Only base characteristics and current health are stored
//! 2. **Live derivation**: Gear bonuses are re-derived from equipped items on every read
//! 3. **Bake-in**: Potions mutate the stored base once instead of standing as a modifier

pub mod characteristics;
pub mod experience;
pub mod modifier;

pub use characteristics::Characteristics;
pub use experience::Experience;
pub use modifier::{CharacteristicsModifier, ValueModifier, effective};
