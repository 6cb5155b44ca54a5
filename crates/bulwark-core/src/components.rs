//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the wave engine and host systems, not components.
//! `glam::Vec3` is used directly as the position component.

use serde::{Deserialize, Serialize};

/// Marks an entity as a hostile wave enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks the single boss entity of a boss wave.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boss;

/// Mutable hit points. The wave engine scales `max` on spawn and
/// tops `current` up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub max: i32,
    pub current: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { max, current: max }
    }
}

/// Attack strength applied per hit by the host's combat systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackDamage {
    pub amount: i32,
}

/// Movement speed in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveSpeed {
    pub mps: f32,
}
