//! Base actor characteristics.

/// Numeric stats of an actor before or after equipment adjustment.
///
/// The same type is used for the stored base value and for the computed
/// effective value; only the former is ever persisted on an actor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characteristics {
    pub max_health: f32,
    pub defence: f32,
    /// Movement speed in world units per second.
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: f32,
    /// Scales lock picking skill. 1.0 is neutral.
    #[cfg_attr(feature = "serde", serde(default = "Characteristics::neutral_luck"))]
    pub luck: f32,
}

impl Characteristics {
    pub const NEUTRAL_LUCK: f32 = 1.0;

    pub fn new(max_health: f32, defence: f32) -> Self {
        Self {
            max_health,
            defence,
            speed: 0.0,
            luck: Self::NEUTRAL_LUCK,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_luck(mut self, luck: f32) -> Self {
        self.luck = luck;
        self
    }

    #[cfg(feature = "serde")]
    fn neutral_luck() -> f32 {
        Self::NEUTRAL_LUCK
    }
}

impl Default for Characteristics {
    fn default() -> Self {
        Self::new(100.0, 0.0)
    }
}
