use crate::combat::AttackResult;
use crate::common::{ActorId, Tick, Vector2};

/// An actor leaving play.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Death {
    pub victim: ActorId,
    /// `None` for deaths with no actor behind them.
    pub killer: Option<ActorId>,
    pub position: Vector2,
}

/// Everything observable that happened during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: Tick,
    pub attacks: Vec<AttackResult>,
    /// Each dead actor appears here exactly once.
    pub deaths: Vec<Death>,
}

impl TickReport {
    pub fn is_quiet(&self) -> bool {
        self.attacks.is_empty() && self.deaths.is_empty()
    }

    pub fn died(&self, actor: ActorId) -> bool {
        self.deaths.iter().any(|death| death.victim == actor)
    }
}
