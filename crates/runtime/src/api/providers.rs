//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`CommandProvider`] implementations so the
//! simulation can run with human input, scripted fixtures, or simple bots.
use std::collections::VecDeque;

use async_trait::async_trait;
use crawler_core::{Actor, Game};
use tokio::sync::Mutex;

use super::commands::PlayerCommand;

/// Decides what the player does before each tick.
#[async_trait]
pub trait CommandProvider: Send + Sync {
    /// Returns the command to apply before the next tick, if any.
    ///
    /// `game` is a read-only snapshot taken after the previous tick.
    async fn provide_command(&self, game: &Game) -> Option<PlayerCommand>;
}

/// A provider that never acts. Enemies still move and attack.
pub struct IdleProvider;

#[async_trait]
impl CommandProvider for IdleProvider {
    async fn provide_command(&self, _game: &Game) -> Option<PlayerCommand> {
        None
    }
}

/// Attacks whenever a ready weapon reaches a hostile, otherwise walks toward
/// the nearest one. Once the level is clear it takes any ladder it stands on.
pub struct AutoAttackProvider;

impl AutoAttackProvider {
    fn decide(game: &Game) -> Option<PlayerCommand> {
        let player = game.player().filter(|player| player.is_alive())?;
        let level = game.current_level();
        let hostiles = || {
            level
                .actors()
                .iter()
                .filter(|other| other.is_alive() && player.is_hostile_to(other))
        };

        let placement = player.placement();
        let in_reach = player
            .equipment()
            .weapons()
            .iter()
            .filter_map(|item| item.as_weapon())
            .filter(|weapon| weapon.is_ready())
            .any(|weapon| {
                hostiles()
                    .any(|target| weapon.distribution.affects_world(&placement, target.position))
            });
        if in_reach {
            return Some(PlayerCommand::Attack);
        }

        match nearest(player, hostiles()) {
            Some(target) => {
                let offset = target.position - player.position;
                let step = player.effective_characteristics().speed * game.config().tick_seconds;
                let direction = offset.normalized()?;
                Some(PlayerCommand::Move(direction * step.min(offset.length())))
            }
            None => level
                .get_tile_of_an_actor(player)
                .and_then(|tile| tile.kind.ladder_offset())
                .map(|_| PlayerCommand::UseLadder),
        }
    }
}

fn nearest<'a>(from: &Actor, candidates: impl Iterator<Item = &'a Actor>) -> Option<&'a Actor> {
    candidates.min_by(|a, b| {
        from.position
            .distance_squared(a.position)
            .total_cmp(&from.position.distance_squared(b.position))
    })
}

#[async_trait]
impl CommandProvider for AutoAttackProvider {
    async fn provide_command(&self, game: &Game) -> Option<PlayerCommand> {
        Self::decide(game)
    }
}

/// Plays back a fixed list of commands, one per tick, then idles.
pub struct ScriptedProvider {
    commands: Mutex<VecDeque<PlayerCommand>>,
}

impl ScriptedProvider {
    pub fn new(commands: impl IntoIterator<Item = PlayerCommand>) -> Self {
        Self {
            commands: Mutex::new(commands.into_iter().collect()),
        }
    }
}

#[async_trait]
impl CommandProvider for ScriptedProvider {
    async fn provide_command(&self, _game: &Game) -> Option<PlayerCommand> {
        self.commands.lock().await.pop_front()
    }
}
