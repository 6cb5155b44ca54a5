//! Wave engine constants and tuning parameters.
//!
//! The scaling coefficients are contract values: tests pin exact outputs
//! derived from them. Treat them as fixed, not tunable defaults.

// --- Difficulty scaling ---

/// Last wave of the linear HP ramp (and of the no-damage-scaling grace period).
pub const LINEAR_SCALING_MAX_WAVE: i32 = 10;

/// Flat HP added per wave during the linear ramp.
pub const HP_PER_WAVE_LINEAR: i32 = 50;

/// HP growth per wave past the linear ramp (+15% per wave).
pub const HP_GROWTH_PER_WAVE: f32 = 0.15;

/// Damage growth per wave past the grace period (+10% per wave).
pub const DAMAGE_GROWTH_PER_WAVE: f32 = 0.10;

/// Enemy count growth per count tier (+10% per tier).
pub const COUNT_GROWTH_PER_TIER: f32 = 0.10;

/// Number of waves per enemy count tier.
pub const COUNT_TIER_WAVES: i32 = 5;

// --- Elite waves ---

/// First wave at which the elite multipliers apply.
pub const ELITE_WAVE_START: i32 = 31;

/// Elite HP multiplier, applied after per-wave scaling.
pub const ELITE_HP_MULTIPLIER: f32 = 2.0;

/// Elite damage multiplier, applied after per-wave scaling.
pub const ELITE_DAMAGE_MULTIPLIER: f32 = 1.5;

// --- Rewards ---

/// Credits granted per wave number on completion.
pub const CREDITS_PER_WAVE: i32 = 50;

/// XP granted per wave number on completion.
pub const XP_PER_WAVE: i32 = 100;

// --- Wave pacing ---

/// Default inter-wave break (seconds).
pub const DEFAULT_WAVE_BREAK_SECS: f32 = 30.0;

/// Priming delay before the first spawn of a normal wave (seconds).
pub const SPAWN_PRIME_DELAY_SECS: f32 = 0.5;

/// Every Nth wave is a boss wave regardless of definition flags.
pub const BOSS_WAVE_INTERVAL: u32 = 10;

// --- Fallback wave table ---

/// Number of waves in the procedurally generated fallback table.
pub const FALLBACK_WAVE_COUNT: u32 = 50;

/// Support enemy count accompanying each fallback boss wave.
pub const FALLBACK_BOSS_SUPPORT_COUNT: u32 = 5;

// --- Spawn anchors ---

/// Default formation radius around an anchor (meters).
pub const DEFAULT_SPAWN_RADIUS: f32 = 20.0;

/// Default scatter radius for the Random pattern (meters).
pub const DEFAULT_RANDOM_SPAWN_RADIUS: f32 = 5.0;

/// Radius multiplier for the Surround pattern.
pub const SURROUND_RADIUS_FACTOR: f32 = 1.5;
