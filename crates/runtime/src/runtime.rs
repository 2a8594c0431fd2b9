//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the game tick by tick.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info, info_span};

use crawler_core::{ActorId, Game, TickReport};

use crate::api::{CommandProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Directory holding `config.toml`, `campaign.ron`, `items.ron`, ...
    pub content_dir: PathBuf,
    pub seed: u64,
    /// Stop after this many ticks. `None` runs until the player dies.
    pub ticks: Option<u64>,
    /// Wall-clock pause between ticks. `None` steps as fast as possible.
    pub tick_interval: Option<Duration>,
    /// Let the built-in bot steer the player.
    pub auto_play: bool,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("crates/game/content/data"),
            seed: 0,
            ticks: Some(600),
            tick_interval: None,
            auto_play: true,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CRAWLER_CONTENT_DIR` - Data directory (default: `crates/game/content/data`)
    /// - `CRAWLER_SEED` - Seed for every random stream (default: 0)
    /// - `CRAWLER_TICKS` - Tick limit; `0` runs until game over (default: 600)
    /// - `CRAWLER_TICK_MS` - Milliseconds between ticks (default: unpaced)
    /// - `CRAWLER_AUTO_PLAY` - Let the bot play (default: true)
    /// - `CRAWLER_EVENT_BUFFER` - Event channel capacity per topic (default: 100)
    /// - `CRAWLER_COMMAND_BUFFER` - Worker command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CRAWLER_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("CRAWLER_SEED") {
            config.seed = seed;
        }
        if let Some(ticks) = read_env::<u64>("CRAWLER_TICKS") {
            config.ticks = (ticks > 0).then_some(ticks);
        }
        if let Some(millis) = read_env::<u64>("CRAWLER_TICK_MS") {
            config.tick_interval = (millis > 0).then(|| Duration::from_millis(millis));
        }
        if let Some(auto_play) = read_env::<bool>("CRAWLER_AUTO_PLAY") {
            config.auto_play = auto_play;
        }
        if let Some(capacity) = read_env::<usize>("CRAWLER_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("CRAWLER_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Totals for a finished [`Runtime::run`].
///
/// Attacks and deaths include those caused by player commands, which the
/// game folds into the following tick's report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub deaths: usize,
    pub attacks: usize,
    pub player_alive: bool,
    pub level: usize,
    pub player_health: f32,
    pub player_level: u32,
}

impl RunSummary {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.deaths += report.deaths.len();
        self.attacks += report.attacks.len();
    }
}

/// Main runtime that drives the game simulation
///
/// Design: Runtime owns the worker and coordinates ticks.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    config: RuntimeConfig,
    player: ActorId,
    provider: Option<Box<dyn CommandProvider>>,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Set the player command provider
    pub fn set_provider(&mut self, provider: impl CommandProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Execute a single tick.
    ///
    /// The provider (if any) is consulted first; a command the game rejects
    /// is logged and the tick still runs.
    pub async fn step(&mut self) -> Result<TickReport> {
        if let Some(provider) = &self.provider {
            let snapshot = self.handle.query_game().await?;
            if let Some(command) = provider.provide_command(&snapshot).await {
                match self.handle.execute(command).await {
                    Ok(_) => {}
                    Err(err) if err.is_recoverable() => {
                        debug!(?command, error = %err, "command skipped");
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        let report = self.handle.step().await?;
        for death in &report.deaths {
            info!(
                victim = %death.victim,
                killer = ?death.killer,
                position = %death.position,
                "death"
            );
        }
        Ok(report)
    }

    /// Run ticks until the configured limit or the player's death.
    pub async fn run(&mut self) -> Result<RunSummary> {
        let mut interval = self.config.tick_interval.map(tokio::time::interval);
        let mut summary = RunSummary {
            player_alive: true,
            ..RunSummary::default()
        };

        let mut last_tick = None;

        while self.config.ticks.is_none_or(|limit| summary.ticks < limit) {
            if let Some(interval) = interval.as_mut() {
                interval.tick().await;
            }

            let span = info_span!("tick", tick = summary.ticks + 1);
            let report = self.step().instrument(span).await?;
            // Time stands still once the game is over.
            if last_tick == Some(report.tick) {
                break;
            }
            last_tick = Some(report.tick);
            summary.record(&report);

            if report.died(self.player) {
                summary.player_alive = false;
                break;
            }
        }

        let game = self.handle.query_game().await?;
        summary.level = game.current_level_index();
        if let Some(player) = game.player() {
            summary.player_health = player.health();
            summary.player_level = player.experience().map_or(0, |exp| exp.level);
        }
        summary.player_alive = game.is_playing();

        info!(
            ticks = summary.ticks,
            deaths = summary.deaths,
            alive = summary.player_alive,
            "run finished"
        );
        Ok(summary)
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    game: Option<Game>,
    provider: Option<Box<dyn CommandProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            game: None,
            provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the game to simulate (required)
    pub fn game(mut self, game: Game) -> Self {
        self.game = Some(game);
        self
    }

    /// Set the player command provider (optional)
    pub fn provider(mut self, provider: impl CommandProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let game = self.game.ok_or(RuntimeError::MissingGame)?;
        let player = game.player_id();

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(game, command_rx, event_bus);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            config: self.config,
            player,
            provider: self.provider,
            sim_worker_handle,
        })
    }
}
