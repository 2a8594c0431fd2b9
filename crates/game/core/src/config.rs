/// Game configuration constants and tunable parameters.
///
/// Probability formulas for hit chance and lock picking are left open by the
/// rules, so every coefficient they use lives here rather than in code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Simulated seconds that elapse per external tick.
    pub tick_seconds: f32,
    /// World units covered by one tile edge.
    pub tile_size: f32,
    /// Maximum distance (tiles) at which an actor can pick up items from a
    /// neighbouring tile. The actor's own tile is always in reach.
    pub pick_up_range: f32,
    /// Maximum distance (tiles) at which lock picks can reach a chest.
    pub picking_range: f32,
    /// Maximum number of lock picks merged into a single inventory entry.
    pub lock_pick_stack_limit: u32,
    pub combat: CombatParams,
    pub lock_picking: LockPickingParams,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_SECONDS: f32 = 1.0 / 60.0;
    pub const DEFAULT_TILE_SIZE: f32 = 1.0;
    pub const DEFAULT_PICK_UP_RANGE: f32 = 1.2;
    pub const DEFAULT_PICKING_RANGE: f32 = 1.5;
    pub const DEFAULT_LOCK_PICK_STACK_LIMIT: u32 = 16;

    pub fn new() -> Self {
        Self {
            tick_seconds: Self::DEFAULT_TICK_SECONDS,
            tile_size: Self::DEFAULT_TILE_SIZE,
            pick_up_range: Self::DEFAULT_PICK_UP_RANGE,
            picking_range: Self::DEFAULT_PICKING_RANGE,
            lock_pick_stack_limit: Self::DEFAULT_LOCK_PICK_STACK_LIMIT,
            combat: CombatParams::default(),
            lock_picking: LockPickingParams::default(),
        }
    }

    pub fn with_combat(mut self, combat: CombatParams) -> Self {
        self.combat = combat;
        self
    }

    pub fn with_lock_picking(mut self, lock_picking: LockPickingParams) -> Self {
        self.lock_picking = lock_picking;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Coefficients for hit chance and damage reduction.
///
/// ```text
/// hit_chance = max(minimum_hit_chance, 1 / (1 + hit_defence_scale × defence))
/// damage     = rolled × damage_reduction_scale / (damage_reduction_scale + defence)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatParams {
    pub hit_defence_scale: f32,
    pub damage_reduction_scale: f32,
    pub minimum_hit_chance: f32,
}

impl CombatParams {
    pub const fn new(
        hit_defence_scale: f32,
        damage_reduction_scale: f32,
        minimum_hit_chance: f32,
    ) -> Self {
        Self {
            hit_defence_scale,
            damage_reduction_scale,
            minimum_hit_chance,
        }
    }

    /// Every attack lands and defence never reduces damage.
    pub const fn always_hit_no_reduction() -> Self {
        Self::new(0.0, f32::INFINITY, 1.0)
    }
}

impl Default for CombatParams {
    fn default() -> Self {
        Self::new(0.05, 100.0, 0.05)
    }
}

/// Coefficients for lock picking.
///
/// ```text
/// skill   = luck × picks.quality
/// success = min(1, success_scale × skill / (1 + level))
/// broken  = min(1, (break_base + break_per_level × level) / skill)   // failed attempts only
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LockPickingParams {
    pub success_scale: f32,
    pub break_base: f32,
    pub break_per_level: f32,
}

impl LockPickingParams {
    pub const fn new(success_scale: f32, break_base: f32, break_per_level: f32) -> Self {
        Self {
            success_scale,
            break_base,
            break_per_level,
        }
    }
}

impl Default for LockPickingParams {
    fn default() -> Self {
        Self::new(1.0, 0.25, 0.1)
    }
}
