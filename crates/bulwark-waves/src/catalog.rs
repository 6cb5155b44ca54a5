//! Enemy factory and reward sink collaborators.
//!
//! The engine never constructs entities directly: it asks an
//! [`EnemyFactory`] for a handle and validates the combat capability
//! before registering it. [`EnemyCatalog`] is the default factory — a
//! registered map from archetype tag to stat block.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{Entity, World};
use log::error;
use thiserror::Error;

use bulwark_core::components::{AttackDamage, Boss, Enemy, Health, MoveSpeed};

/// Creates enemy entities from archetype tags.
///
/// `None` signals an unknown archetype; the requesting spawn unit is
/// skipped and the wave continues.
pub trait EnemyFactory {
    fn create(&mut self, world: &mut World, archetype: &str, position: Vec3) -> Option<Entity>;
}

/// Receives wave completion rewards. Failures are logged by the engine,
/// never propagated: a broken economy must not stall wave progression.
pub trait RewardSink {
    fn grant_credits(&mut self, amount: i32, reason: &str) -> Result<(), RewardError>;
}

/// A reward grant that could not be applied.
#[derive(Debug, Error)]
#[error("reward grant failed: {0}")]
pub struct RewardError(pub String);

/// Base stat block for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub max_health: i32,
    pub attack_damage: i32,
    pub move_speed: f32,
    pub is_boss: bool,
}

impl EnemyStats {
    pub fn normal(max_health: i32, attack_damage: i32, move_speed: f32) -> Self {
        Self {
            max_health,
            attack_damage,
            move_speed,
            is_boss: false,
        }
    }

    pub fn boss(max_health: i32, attack_damage: i32, move_speed: f32) -> Self {
        Self {
            max_health,
            attack_damage,
            move_speed,
            is_boss: true,
        }
    }
}

/// Registered tag -> stat-block factory. Spawns the standard component
/// bundle; hosts extend it with `register` or swap in their own
/// [`EnemyFactory`] entirely.
#[derive(Debug, Clone, Default)]
pub struct EnemyCatalog {
    stats: HashMap<String, EnemyStats>,
}

impl EnemyCatalog {
    /// The built-in roster: five normal archetypes and the five
    /// milestone bosses.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.register("Grunt", EnemyStats::normal(50, 8, 4.0));
        catalog.register("Shooter", EnemyStats::normal(40, 12, 3.0));
        catalog.register("Tank", EnemyStats::normal(200, 25, 2.0));
        catalog.register("Flyer", EnemyStats::normal(35, 15, 5.0));
        catalog.register("Swarm", EnemyStats::normal(20, 5, 6.0));
        catalog.register("FrostTitan", EnemyStats::boss(50_000, 35, 2.0));
        catalog.register("InfernoColossus", EnemyStats::boss(62_000, 42, 2.0));
        catalog.register("VoidWraith", EnemyStats::boss(48_000, 55, 3.5));
        catalog.register("StormLord", EnemyStats::boss(75_000, 48, 2.5));
        catalog.register("ChaosBringer", EnemyStats::boss(90_000, 60, 3.0));
        catalog
    }

    pub fn register(&mut self, tag: &str, stats: EnemyStats) {
        self.stats.insert(tag.to_string(), stats);
    }

    pub fn stats(&self, tag: &str) -> Option<&EnemyStats> {
        self.stats.get(tag)
    }
}

impl EnemyFactory for EnemyCatalog {
    fn create(&mut self, world: &mut World, archetype: &str, position: Vec3) -> Option<Entity> {
        let stats = *self.stats.get(archetype)?;
        let entity = world.spawn((
            Enemy,
            position,
            Health::full(stats.max_health),
            AttackDamage {
                amount: stats.attack_damage,
            },
            MoveSpeed {
                mps: stats.move_speed,
            },
        ));
        if stats.is_boss {
            // Entity was just spawned, insert cannot fail.
            let _ = world.insert_one(entity, Boss);
        }
        Some(entity)
    }
}

/// Validate that a freshly created entity supports HP and damage
/// mutation. Entities failing the check are discarded before they can
/// enter the registry; difficulty scaling would silently not apply.
pub fn validate_combat_capable(world: &mut World, entity: Entity, archetype: &str) -> bool {
    let capable = world
        .satisfies::<(&Health, &AttackDamage)>(entity)
        .unwrap_or(false);
    if !capable {
        error!("enemy {archetype:?} lacks health/damage components; discarding spawn");
        let _ = world.despawn(entity);
    }
    capable
}
