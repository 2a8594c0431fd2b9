//! Experience and levelling.

/// Actor level and progress toward the next level.
///
/// `value` is the experience accumulated since the last level-up. Levels only
/// ever increase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experience {
    pub level: u32,
    pub value: u64,
}

impl Experience {
    pub fn new(level: u32) -> Self {
        Self { level, value: 0 }
    }

    /// Experience needed to advance from `level` to `level + 1`.
    ///
    /// Formula: `4·level² + 10·level + 10`
    pub fn needs_exp_for_level(level: u32) -> u64 {
        let level = u64::from(level);
        4 * level * level + 10 * level + 10
    }

    /// Experience granted to the killer of an actor at `level`.
    pub fn value_after_death(level: u32) -> u64 {
        u64::from(level).pow(3)
    }

    /// Add `amount` and level up as many times as the accumulated value allows.
    ///
    /// Returns the number of levels gained.
    pub fn gain(&mut self, amount: u64) -> u32 {
        self.value = self.value.saturating_add(amount);

        let mut gained = 0;
        loop {
            let needs = Self::needs_exp_for_level(self.level);
            if self.value < needs {
                break;
            }
            self.value -= needs;
            self.level += 1;
            gained += 1;
        }
        gained
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new(1)
    }
}
