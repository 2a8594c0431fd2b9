//! The simulation context.
//!
//! [`Game`] owns every level, the player's identity, the configuration and
//! the random streams. It is passed by reference to whatever needs it; there
//! is no global game object.

use tracing::debug;

use crate::actor::Actor;
use crate::combat::AttackResult;
use crate::common::{ActorId, Tick, Vector2};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::rng::{PcgRng, compute_seed};
use crate::world::{
    DungeonLevel, InteractionOutcome, ItemUseOutcome, LevelError, TickReport, TilePosition,
};

/// Whole-run state: levels, player, configuration, randomness and time.
#[derive(Clone, Debug)]
pub struct Game {
    levels: Vec<DungeonLevel>,
    /// One random stream per level so levels stay independent of each other.
    streams: Vec<PcgRng>,
    current_level: usize,
    player: ActorId,
    config: GameConfig,
    tick: Tick,
}

impl Game {
    /// Starts a run with `player` standing at the first level's entry position.
    ///
    /// Every level adopts the configured tile size.
    pub fn new(
        levels: Vec<DungeonLevel>,
        player: Actor,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameStateError> {
        if levels.is_empty() {
            return Err(GameStateError::NoLevels);
        }

        let mut levels: Vec<DungeonLevel> = levels
            .into_iter()
            .map(|level| level.with_tile_size(config.tile_size))
            .collect();
        let streams = (0..levels.len() as u64)
            .map(|stream| PcgRng::new(compute_seed(seed, stream)))
            .collect();

        let player_id = player.id;
        let entry = levels[0].entry_position;
        levels[0].spawn(player.with_position(entry))?;

        Ok(Self {
            levels,
            streams,
            current_level: 0,
            player: player_id,
            config,
            tick: Tick::ZERO,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn levels(&self) -> &[DungeonLevel] {
        &self.levels
    }

    pub fn current_level_index(&self) -> usize {
        self.current_level
    }

    pub fn current_level(&self) -> &DungeonLevel {
        &self.levels[self.current_level]
    }

    pub fn current_level_mut(&mut self) -> &mut DungeonLevel {
        &mut self.levels[self.current_level]
    }

    pub fn player_id(&self) -> ActorId {
        self.player
    }

    pub fn player(&self) -> Option<&Actor> {
        self.current_level().actor(self.player)
    }

    /// False once the player has died.
    pub fn is_playing(&self) -> bool {
        self.player().is_some_and(Actor::is_alive)
    }

    /// Advances the current level by one tick.
    ///
    /// Once the player is gone, only what happened since the previous tick
    /// (typically the player's own death) is still reported; after that time
    /// stands still and empty reports are returned.
    pub fn update(&mut self) -> TickReport {
        let index = self.current_level;
        if !self.is_playing() {
            let mut report = self.levels[index].flush();
            if !report.is_quiet() {
                self.tick = self.tick.next();
                debug!(tick = %self.tick, deaths = report.deaths.len(), "final report");
            }
            report.tick = self.tick;
            return report;
        }

        self.tick = self.tick.next();
        let mut report = self.levels[index].update(&self.config, &mut self.streams[index]);
        report.tick = self.tick;

        if report.died(self.player) {
            debug!(tick = %self.tick, "player died");
        }
        report
    }

    /// Moves the player to level `index`, at that level's entry position.
    pub fn load_level(&mut self, index: usize) -> Result<(), GameStateError> {
        if index >= self.levels.len() {
            return Err(GameStateError::NoSuchLevel {
                index,
                count: self.levels.len(),
            });
        }
        if index == self.current_level {
            return Ok(());
        }

        let player = self.levels[self.current_level]
            .remove_actor(self.player)
            .ok_or(GameStateError::PlayerMissing)?;
        let entry = self.levels[index].entry_position;
        self.levels[index].spawn(player.with_position(entry))?;
        let carried = self.levels[self.current_level].flush();
        self.levels[index].defer(carried);

        debug!(from = self.current_level, to = index, "level change");
        self.current_level = index;
        Ok(())
    }

    /// Climbs the ladder the player stands on. Returns the new level index.
    pub fn use_ladder(&mut self) -> Result<usize, GameStateError> {
        let player = self.living_player()?;
        let offset = self
            .current_level()
            .get_tile_of_an_actor(player)
            .and_then(|tile| tile.kind.ladder_offset())
            .ok_or(GameStateError::NotOnLadder)?;

        let target = self
            .current_level
            .checked_add_signed(offset)
            .filter(|target| *target < self.levels.len())
            .ok_or(GameStateError::NoSuchLevel {
                index: self.current_level.saturating_add_signed(offset),
                count: self.levels.len(),
            })?;
        self.load_level(target)?;
        Ok(target)
    }

    /// The player, if still alive. Dead actors are removed from their level.
    fn living_player(&self) -> Result<&Actor, GameStateError> {
        self.player()
            .filter(|player| player.is_alive())
            .ok_or(GameStateError::GameOver)
    }

    // ========================================================================
    // Player actions
    // ========================================================================

    pub fn player_attack(&mut self) -> Result<Vec<AttackResult>, GameStateError> {
        self.living_player()?;
        let index = self.current_level;
        Ok(self.levels[index].attack(self.player, &self.config, &mut self.streams[index])?)
    }

    /// Moves the player by `delta` world units.
    pub fn move_player(&mut self, delta: Vector2) -> Result<(), GameStateError> {
        let destination = self.living_player()?.position + delta;
        let player = self.player;
        Ok(self.current_level_mut().move_actor(player, destination)?)
    }

    /// Picks up item `item_index` from the tile the player stands on.
    pub fn pick_up_item(&mut self, item_index: usize) -> Result<(), GameStateError> {
        let position = self.living_player()?.position;
        let tile = self
            .current_level()
            .get_tile_coordinates(position)
            .ok_or(LevelError::OffGrid(self.player))?;
        let index = self.current_level;
        Ok(self.levels[index].pick_up_item(self.player, tile, item_index, &self.config)?)
    }

    pub fn drop_item(&mut self, index: usize) -> Result<(), GameStateError> {
        self.living_player()?;
        let player = self.player;
        Ok(self.current_level_mut().drop_item(player, index)?)
    }

    pub fn use_item(&mut self, index: usize) -> Result<ItemUseOutcome, GameStateError> {
        self.living_player()?;
        let level = self.current_level;
        Ok(self.levels[level].use_item(self.player, index, &self.config, &mut self.streams[level])?)
    }

    pub fn interact(&mut self, tile: TilePosition) -> Result<InteractionOutcome, GameStateError> {
        self.living_player()?;
        let player = self.player;
        Ok(self.current_level_mut().interact(player, tile)?)
    }
}

/// Errors raised by [`Game`] operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GameStateError {
    #[error("a game needs at least one level")]
    NoLevels,

    #[error("level {index} does not exist ({count} levels)")]
    NoSuchLevel { index: usize, count: usize },

    #[error("player is not on the current level")]
    PlayerMissing,

    #[error("the player is dead")]
    GameOver,

    #[error("the player is not standing on a ladder")]
    NotOnLadder,

    #[error(transparent)]
    Level(#[from] LevelError),
}

impl GameError for GameStateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoLevels | Self::NoSuchLevel { .. } | Self::GameOver => ErrorSeverity::Validation,
            Self::NotOnLadder => ErrorSeverity::Recoverable,
            Self::PlayerMissing => ErrorSeverity::Internal,
            Self::Level(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoLevels => "GAME_NO_LEVELS",
            Self::NoSuchLevel { .. } => "GAME_NO_SUCH_LEVEL",
            Self::PlayerMissing => "GAME_PLAYER_MISSING",
            Self::GameOver => "GAME_OVER",
            Self::NotOnLadder => "GAME_NOT_ON_LADDER",
            Self::Level(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Characteristics;
    use crate::world::TileKind;

    fn hero() -> Actor {
        Actor::player(ActorId::PLAYER, Characteristics::new(100.0, 0.0))
    }

    fn two_levels() -> Vec<DungeonLevel> {
        let mut first = DungeonLevel::new(4, 4).with_entry_position(Vector2::new(0.5, 0.5));
        first.tile_mut(TilePosition::new(2, 2)).unwrap().kind = TileKind::DownLadder;
        let mut second = DungeonLevel::new(4, 4).with_entry_position(Vector2::new(3.5, 3.5));
        second.tile_mut(TilePosition::new(3, 3)).unwrap().kind = TileKind::UpLadder;
        vec![first, second]
    }

    #[test]
    fn needs_a_level() {
        let err = Game::new(Vec::new(), hero(), GameConfig::new(), 1).unwrap_err();
        assert_eq!(err, GameStateError::NoLevels);
    }

    #[test]
    fn player_starts_at_entry() {
        let game = Game::new(two_levels(), hero(), GameConfig::new(), 1).unwrap();
        assert!(game.is_playing());
        assert_eq!(game.player().unwrap().position, Vector2::new(0.5, 0.5));
    }

    #[test]
    fn ladders_move_between_levels() {
        let mut game = Game::new(two_levels(), hero(), GameConfig::new(), 1).unwrap();
        assert_eq!(game.use_ladder(), Err(GameStateError::NotOnLadder));

        game.move_player(Vector2::new(2.0, 2.0)).unwrap();
        assert_eq!(game.use_ladder(), Ok(1));
        assert_eq!(game.current_level_index(), 1);
        assert!(game.levels()[0].actor(ActorId::PLAYER).is_none());
        assert_eq!(game.player().unwrap().position, Vector2::new(3.5, 3.5));

        assert_eq!(game.use_ladder(), Ok(0));
        assert_eq!(game.player().unwrap().position, Vector2::new(0.5, 0.5));
    }

    #[test]
    fn ladder_past_last_level_is_rejected() {
        let mut levels = two_levels();
        levels.truncate(1);
        let mut game = Game::new(levels, hero(), GameConfig::new(), 1).unwrap();
        game.move_player(Vector2::new(2.0, 2.0)).unwrap();
        assert_eq!(
            game.use_ladder(),
            Err(GameStateError::NoSuchLevel { index: 1, count: 1 })
        );
        assert_eq!(game.current_level_index(), 0);
    }

    #[test]
    fn update_advances_time_until_game_over() {
        let mut game = Game::new(two_levels(), hero(), GameConfig::new(), 1).unwrap();
        assert_eq!(game.update().tick, Tick(1));
        assert_eq!(game.update().tick, Tick(2));

        game.current_level_mut().die(ActorId::PLAYER, None).unwrap();
        assert!(!game.is_playing());
        let report = game.update();
        assert_eq!(report.tick, Tick(2));
        assert!(report.is_quiet());
        assert_eq!(game.player_attack(), Err(GameStateError::GameOver));
    }

    #[test]
    fn same_seed_same_streams() {
        let a = Game::new(two_levels(), hero(), GameConfig::new(), 42).unwrap();
        let b = Game::new(two_levels(), hero(), GameConfig::new(), 42).unwrap();
        assert_eq!(a.streams, b.streams);
        assert_ne!(a.streams[0], a.streams[1]);
    }
}
