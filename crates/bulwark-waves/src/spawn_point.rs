//! Spawn anchors and formation patterns.
//!
//! An anchor is a world-space point that places the Nth-of-M unit of a
//! spawn group according to a pattern. Pattern math is deterministic except
//! for `Random`, which draws from the caller's seeded RNG.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bulwark_core::constants::{
    DEFAULT_RANDOM_SPAWN_RADIUS, DEFAULT_SPAWN_RADIUS, SURROUND_RADIUS_FACTOR,
};

/// Formation pattern for positioning spawned units around an anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPattern {
    /// Evenly spaced ring around the anchor.
    Circle,
    /// Line along the x-axis, centered on the anchor.
    Line,
    /// Circle at 1.5x radius, for encirclement.
    Surround,
    /// Uniform scatter within the anchor's random radius.
    #[default]
    Random,
}

impl SpawnPattern {
    /// Parse a pattern tag from a wave document. Unknown tags fall back
    /// to `Random` rather than failing the wave.
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "circle" => Self::Circle,
            "line" => Self::Line,
            "surround" => Self::Surround,
            "random" => Self::Random,
            _ => Self::Random,
        }
    }
}

/// A configured world-space spawn location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnAnchor {
    /// Operator-facing name, for logs and config.
    #[serde(default)]
    pub name: String,
    /// Anchor position in world space.
    #[serde(default)]
    pub position: Vec3,
    /// Formation radius for Circle/Line/Surround (meters).
    #[serde(default = "default_spawn_radius")]
    pub spawn_radius: f32,
    /// Scatter radius for the Random pattern (meters).
    #[serde(default = "default_random_spawn_radius")]
    pub random_spawn_radius: f32,
}

fn default_spawn_radius() -> f32 {
    DEFAULT_SPAWN_RADIUS
}

fn default_random_spawn_radius() -> f32 {
    DEFAULT_RANDOM_SPAWN_RADIUS
}

impl Default for SpawnAnchor {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: Vec3::ZERO,
            spawn_radius: DEFAULT_SPAWN_RADIUS,
            random_spawn_radius: DEFAULT_RANDOM_SPAWN_RADIUS,
        }
    }
}

impl SpawnAnchor {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Position for the `index`th of `total` units in the given pattern.
    /// A `total` of zero always returns the anchor position unchanged
    /// (no division by zero, no NaN).
    pub fn spawn_position(
        &self,
        pattern: SpawnPattern,
        index: usize,
        total: usize,
        rng: &mut ChaCha8Rng,
    ) -> Vec3 {
        match pattern {
            SpawnPattern::Circle => self.ring_position(index, total, self.spawn_radius),
            SpawnPattern::Line => self.line_position(index, total),
            SpawnPattern::Surround => {
                self.ring_position(index, total, self.spawn_radius * SURROUND_RADIUS_FACTOR)
            }
            SpawnPattern::Random => self.random_position(rng),
        }
    }

    /// Evenly spaced ring position at the given radius.
    fn ring_position(&self, index: usize, total: usize, radius: f32) -> Vec3 {
        if total == 0 {
            return self.position;
        }
        let angle_step = 360.0 / total as f32;
        let angle = (angle_step * index as f32).to_radians();
        self.position + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
    }

    /// Line formation along the x-axis, centered on the anchor.
    fn line_position(&self, index: usize, total: usize) -> Vec3 {
        if total == 0 {
            return self.position;
        }
        let spacing = self.spawn_radius * 2.0 / total as f32;
        let offset = -self.spawn_radius + spacing * index as f32 + spacing * 0.5;
        self.position + Vec3::new(offset, 0.0, 0.0)
    }

    /// Uniform scatter within the random spawn radius.
    fn random_position(&self, rng: &mut ChaCha8Rng) -> Vec3 {
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let distance: f32 = rng.gen_range(0.0..=self.random_spawn_radius);
        self.position + Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
    }
}
