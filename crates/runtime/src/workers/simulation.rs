//! Simulation worker that owns the authoritative [`crawler_core::Game`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), applies
//! them to the game, and publishes events to the [`EventBus`].

use tokio::sync::{mpsc, oneshot};

use crawler_core::{Game, GameError, TickReport};
use tracing::{debug, info};

use crate::api::{CommandOutcome, PlayerCommand, Result};
use crate::events::{Event, EventBus, PlayerEvent, SimulationEvent, WorldEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Advance the game by one tick.
    Step { reply: oneshot::Sender<TickReport> },
    /// Apply a player command.
    Player {
        command: PlayerCommand,
        reply: oneshot::Sender<Result<CommandOutcome>>,
    },
    /// Query the current game (read-only).
    QueryGame { reply: oneshot::Sender<Game> },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    game: Game,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    game_over_reported: bool,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(game: Game, command_rx: mpsc::Receiver<Command>, event_bus: EventBus) -> Self {
        info!(
            levels = game.levels().len(),
            actors = game.current_level().actors().len(),
            "SimulationWorker initialized"
        );

        Self {
            game,
            command_rx,
            event_bus,
            game_over_reported: false,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!("SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Step { reply } => {
                let report = self.step();
                if reply.send(report).is_err() {
                    debug!("Step reply channel closed (caller dropped)");
                }
            }
            Command::Player { command, reply } => {
                let result = self.apply(command);
                if reply.send(result).is_err() {
                    debug!("Player reply channel closed (caller dropped)");
                }
            }
            Command::QueryGame { reply } => {
                if reply.send(self.game.clone()).is_err() {
                    debug!("QueryGame reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn step(&mut self) -> TickReport {
        let report = self.game.update();

        self.event_bus.publish(Event::Simulation(SimulationEvent::Ticked {
            report: report.clone(),
        }));
        self.report_game_over();
        report
    }

    fn apply(&mut self, command: PlayerCommand) -> Result<CommandOutcome> {
        let tick = self.game.tick();
        match command.apply(&mut self.game) {
            Ok(outcome) => {
                debug!(?command, ?outcome, "player command applied");
                if let CommandOutcome::ChangedLevel { from, to } = outcome {
                    self.event_bus
                        .publish(Event::World(WorldEvent::LevelChanged { from, to }));
                }
                self.event_bus.publish(Event::Player(PlayerEvent::CommandApplied {
                    command,
                    outcome: outcome.clone(),
                    tick,
                }));
                Ok(outcome)
            }
            Err(err) => {
                debug!(?command, error = %err, code = err.error_code(), "player command rejected");
                self.event_bus.publish(Event::Player(PlayerEvent::CommandRejected {
                    command,
                    error: err.to_string(),
                    code: err.error_code(),
                    tick,
                }));
                Err(err.into())
            }
        }
    }

    fn report_game_over(&mut self) {
        if self.game_over_reported || self.game.is_playing() {
            return;
        }
        self.game_over_reported = true;
        let tick = self.game.tick();
        info!(tick = %tick, "game over");
        self.event_bus
            .publish(Event::World(WorldEvent::GameOver { tick }));
    }
}
