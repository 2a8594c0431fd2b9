//! Runtime orchestration for the dungeon-crawler simulation.
//!
//! This crate wraps a [`crawler_core::Game`] in a worker task, steps it once
//! per tick, and publishes what happened on a topic-based event bus.
//! Consumers embed [`Runtime`] to drive ticks and plug in a
//! [`CommandProvider`] to steer the player.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and environment config
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - `workers` keeps the simulation task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    AutoAttackProvider, CommandOutcome, CommandProvider, IdleProvider, PlayerCommand, Result,
    RuntimeError, RuntimeHandle, ScriptedProvider,
};
pub use events::{Event, EventBus, PlayerEvent, SimulationEvent, Topic, WorldEvent};
pub use runtime::{RunSummary, Runtime, RuntimeBuilder, RuntimeConfig};
