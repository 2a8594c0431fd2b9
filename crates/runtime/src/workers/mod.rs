//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game and executes commands sent through
//! [`RuntimeHandle`](crate::RuntimeHandle).

mod simulation;

pub use simulation::{Command, SimulationWorker};
