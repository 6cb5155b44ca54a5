//! Wave orchestration engine for BULWARK.
//!
//! Owns wave progression, the timed spawn queue, and the active-enemy
//! registry. Completely headless: the host owns the hecs world and calls
//! [`WaveManager::advance`] once per frame with a logical delta-time.
//! Deterministic for a given seed and wave table.

pub mod boss;
pub mod catalog;
pub mod definitions;
pub mod manager;
pub mod spawn_point;

pub use bulwark_core as core;
pub use manager::{WaveConfig, WaveManager};
