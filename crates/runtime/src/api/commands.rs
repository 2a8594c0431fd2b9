//! Player commands accepted by the simulation worker.

use crawler_core::{
    AttackResult, Game, GameStateError, InteractionOutcome, ItemUseOutcome, TilePosition, Vector2,
};

/// One player intent, applied between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerCommand {
    Attack,
    /// Move by a world-space offset.
    Move(Vector2),
    /// Pick up the n-th item lying on the player's tile.
    PickUp(usize),
    /// Drop the n-th inventory item onto the player's tile.
    Drop(usize),
    /// Use the n-th inventory item.
    Use(usize),
    Interact(TilePosition),
    UseLadder,
}

/// What a successfully applied command did.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Attacked(Vec<AttackResult>),
    Moved,
    PickedUp,
    Dropped,
    Used(ItemUseOutcome),
    Interacted(InteractionOutcome),
    ChangedLevel { from: usize, to: usize },
}

impl PlayerCommand {
    /// Applies the command to `game`.
    pub fn apply(self, game: &mut Game) -> Result<CommandOutcome, GameStateError> {
        match self {
            Self::Attack => game.player_attack().map(CommandOutcome::Attacked),
            Self::Move(delta) => game.move_player(delta).map(|()| CommandOutcome::Moved),
            Self::PickUp(index) => game.pick_up_item(index).map(|()| CommandOutcome::PickedUp),
            Self::Drop(index) => game.drop_item(index).map(|()| CommandOutcome::Dropped),
            Self::Use(index) => game.use_item(index).map(CommandOutcome::Used),
            Self::Interact(tile) => game.interact(tile).map(CommandOutcome::Interacted),
            Self::UseLadder => {
                let from = game.current_level_index();
                game.use_ladder()
                    .map(|to| CommandOutcome::ChangedLevel { from, to })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawler_core::{Actor, ActorId, Characteristics, DungeonLevel, GameConfig};

    fn game() -> Game {
        let level = DungeonLevel::new(4, 4).with_entry_position(Vector2::new(0.5, 0.5));
        Game::new(
            vec![level],
            Actor::player(ActorId::PLAYER, Characteristics::default()),
            GameConfig::default(),
            1,
        )
        .expect("game should start")
    }

    #[test]
    fn move_updates_player_position() {
        let mut game = game();
        let outcome = PlayerCommand::Move(Vector2::new(1.0, 0.0))
            .apply(&mut game)
            .expect("floor is walkable");

        assert_eq!(outcome, CommandOutcome::Moved);
        assert_eq!(game.player().map(|p| p.position), Some(Vector2::new(1.5, 0.5)));
    }

    #[test]
    fn attack_without_targets_reports_nothing() {
        let mut game = game();
        let outcome = PlayerCommand::Attack.apply(&mut game).expect("attack is legal");
        assert_eq!(outcome, CommandOutcome::Attacked(Vec::new()));
    }

    #[test]
    fn ladder_off_ladder_is_rejected() {
        let mut game = game();
        assert_eq!(
            PlayerCommand::UseLadder.apply(&mut game),
            Err(GameStateError::NotOnLadder)
        );
    }
}
