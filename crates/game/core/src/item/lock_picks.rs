//! Lock picks.

/// Consumable stack of lock picks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockPicks {
    pub count: u32,
    /// Multiplies the picker's luck when rolling against a lock.
    #[cfg_attr(feature = "serde", serde(default = "LockPicks::standard_quality"))]
    pub quality: f32,
}

impl LockPicks {
    pub const STANDARD_QUALITY: f32 = 1.0;

    pub fn new(count: u32) -> Self {
        Self {
            count,
            quality: Self::STANDARD_QUALITY,
        }
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.count == 0
    }

    /// Remove one pick. Returns false if none were left.
    pub fn break_one(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.count -= 1;
        true
    }

    /// Move as many picks from `other` as fit under `limit`.
    ///
    /// Returns the number moved; `other` keeps the remainder.
    pub fn absorb(&mut self, other: &mut LockPicks, limit: u32) -> u32 {
        let room = limit.saturating_sub(self.count);
        let moved = room.min(other.count);
        self.count += moved;
        other.count -= moved;
        moved
    }

    #[cfg(feature = "serde")]
    fn standard_quality() -> f32 {
        Self::STANDARD_QUALITY
    }
}
