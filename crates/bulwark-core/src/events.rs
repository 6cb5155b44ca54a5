//! Events emitted by the wave engine for UI and audio feedback.
//!
//! The engine buffers these internally; the host drains them once per tick
//! and fans them out. Fire-and-forget: no response is expected.

use serde::{Deserialize, Serialize};

/// Wave lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WaveEvent {
    /// A wave has started spawning (or, for boss waves, has fully spawned).
    WaveStarted {
        wave_number: u32,
        total_enemies: usize,
        is_boss_wave: bool,
    },
    /// The current wave was cleared; rewards have been requested.
    WaveCompleted {
        wave_number: u32,
        credits_reward: i32,
        xp_reward: i32,
    },
    /// A boss entity entered the world.
    BossSpawned { boss_name: String, wave_number: u32 },
    /// Every wave in the table has been completed.
    AllWavesCompleted,
}
