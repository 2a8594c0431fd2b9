//! Event types for different topics.

use crawler_core::{Tick, TickReport};

use crate::api::{CommandOutcome, PlayerCommand};

/// Events produced by advancing the simulation.
#[derive(Debug, Clone)]
pub enum SimulationEvent {
    /// A tick completed. Quiet ticks are published too.
    Ticked { report: TickReport },
}

/// Events about player commands.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    CommandApplied {
        command: PlayerCommand,
        outcome: CommandOutcome,
        tick: Tick,
    },
    CommandRejected {
        command: PlayerCommand,
        error: String,
        code: &'static str,
        tick: Tick,
    },
}

/// Events about the run as a whole.
#[derive(Debug, Clone)]
pub enum WorldEvent {
    LevelChanged { from: usize, to: usize },
    GameOver { tick: Tick },
}
