//! Difficulty scaling laws — pure functions of (base value, wave number).
//!
//! Intermediate math is single-precision on purpose: the pinned outputs in
//! the tests depend on f32 rounding. Out-of-range wave numbers degrade
//! gracefully (wave <= 0 returns the base value unscaled).

use crate::constants::*;

/// Scale enemy HP for a wave: +50 per wave through wave 10,
/// then +15% of base per wave past 10.
pub fn scale_enemy_hp(base_hp: i32, wave: i32) -> i32 {
    if wave <= 0 {
        return base_hp;
    }
    if wave <= LINEAR_SCALING_MAX_WAVE {
        return base_hp + wave * HP_PER_WAVE_LINEAR;
    }
    let multiplier = 1.0 + (wave - LINEAR_SCALING_MAX_WAVE) as f32 * HP_GROWTH_PER_WAVE;
    (base_hp as f32 * multiplier).round() as i32
}

/// Scale enemy damage for a wave: unscaled through wave 10,
/// then +10% of base per wave past 10.
pub fn scale_enemy_damage(base_damage: i32, wave: i32) -> i32 {
    if wave <= LINEAR_SCALING_MAX_WAVE {
        return base_damage;
    }
    let multiplier = 1.0 + (wave - LINEAR_SCALING_MAX_WAVE) as f32 * DAMAGE_GROWTH_PER_WAVE;
    (base_damage as f32 * multiplier).round() as i32
}

/// Scale an enemy count for a wave: +10% per completed 5-wave tier.
pub fn scale_enemy_count(base_count: i32, wave: i32) -> i32 {
    if wave <= 0 {
        return base_count;
    }
    let multiplier = 1.0 + (wave / COUNT_TIER_WAVES) as f32 * COUNT_GROWTH_PER_TIER;
    (base_count as f32 * multiplier).round() as i32
}

/// Credits granted for completing a wave.
pub fn credits_reward(wave: i32) -> i32 {
    wave * CREDITS_PER_WAVE
}

/// XP granted for completing a wave.
pub fn xp_reward(wave: i32) -> i32 {
    wave * XP_PER_WAVE
}

/// Whether a wave spawns elite variants (wave 31 onward).
pub fn is_elite_wave(wave: i32) -> bool {
    wave >= ELITE_WAVE_START
}

/// Elite HP multiplier. Applies to the already-scaled value, not the base.
pub fn elite_hp_multiplier(wave: i32) -> f32 {
    if is_elite_wave(wave) {
        ELITE_HP_MULTIPLIER
    } else {
        1.0
    }
}

/// Elite damage multiplier. Applies to the already-scaled value, not the base.
pub fn elite_damage_multiplier(wave: i32) -> f32 {
    if is_elite_wave(wave) {
        ELITE_DAMAGE_MULTIPLIER
    } else {
        1.0
    }
}
