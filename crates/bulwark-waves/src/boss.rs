//! Boss wave spawning.
//!
//! Boss waves bypass the spawn queue entirely: the boss and all support
//! enemies are created synchronously the moment the wave starts, so a boss
//! arrives rather than trickling in. The controller keeps its own handles
//! for remaining-count queries and forced resets; the manager's registry
//! remains the completion authority.

use glam::Vec3;
use hecs::{Entity, World};
use log::{error, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::events::WaveEvent;

use crate::catalog::{validate_combat_capable, EnemyFactory};
use crate::definitions::{boss_for_wave, WaveDefinition};
use crate::spawn_point::{SpawnAnchor, SpawnPattern};

/// Spawns and tracks the entities of the current boss wave.
#[derive(Debug, Default)]
pub struct BossWaveController {
    boss: Option<Entity>,
    support: Vec<Entity>,
}

impl BossWaveController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the boss and its support enemies, all immediately.
    ///
    /// The boss goes at the first configured anchor (world origin if none);
    /// each support group is distributed across random anchors in a Circle
    /// formation. Returns the flattened list of every entity spawned so the
    /// caller can register them without re-deriving the composition. If the
    /// boss itself cannot be created the list is empty and the wave will
    /// complete on the next tick.
    pub fn spawn_boss_wave(
        &mut self,
        world: &mut World,
        factory: &mut dyn EnemyFactory,
        anchors: &[SpawnAnchor],
        rng: &mut ChaCha8Rng,
        wave_number: u32,
        def: &WaveDefinition,
        events: &mut Vec<WaveEvent>,
    ) -> Vec<Entity> {
        self.boss = None;
        self.support.clear();

        let boss_type = def
            .boss_type
            .clone()
            .unwrap_or_else(|| boss_for_wave(wave_number).to_string());

        let boss_position = anchors.first().map_or(Vec3::ZERO, |a| a.position);
        let boss = factory
            .create(world, &boss_type, boss_position)
            .filter(|&e| validate_combat_capable(world, e, &boss_type));
        let Some(boss) = boss else {
            error!("failed to spawn boss {boss_type:?} for wave {wave_number}");
            return Vec::new();
        };

        self.boss = Some(boss);
        let mut spawned = vec![boss];

        for group in &def.support_enemies {
            let total = group.count as usize;
            for index in 0..total {
                let position = match pick_anchor(anchors, rng) {
                    Some(anchor) => {
                        anchor.spawn_position(SpawnPattern::Circle, index, total, rng)
                    }
                    None => Vec3::ZERO,
                };
                let Some(entity) = factory.create(world, &group.enemy_type, position) else {
                    error!(
                        "unknown support enemy type {:?} in boss wave {wave_number}",
                        group.enemy_type
                    );
                    continue;
                };
                if !validate_combat_capable(world, entity, &group.enemy_type) {
                    continue;
                }
                self.support.push(entity);
                spawned.push(entity);
            }
        }

        events.push(WaveEvent::BossSpawned {
            boss_name: boss_type.clone(),
            wave_number,
        });
        info!(
            "boss wave {wave_number} started: {boss_type} with {} total enemies",
            spawned.len()
        );

        spawned
    }

    /// Live boss-wave entities: the boss (0 or 1) plus surviving support.
    /// Lazily purges handles the host has despawned.
    pub fn remaining_count(&mut self, world: &World) -> usize {
        if let Some(boss) = self.boss {
            if !world.contains(boss) {
                self.boss = None;
            }
        }
        self.support.retain(|&e| world.contains(e));
        usize::from(self.boss.is_some()) + self.support.len()
    }

    /// Force-despawn everything tracked. Used by resets and skip/jump
    /// operations.
    pub fn clear_all(&mut self, world: &mut World) {
        if let Some(boss) = self.boss.take() {
            let _ = world.despawn(boss);
        }
        for entity in self.support.drain(..) {
            let _ = world.despawn(entity);
        }
    }
}

/// Uniformly random anchor, or `None` if none are configured.
fn pick_anchor<'a>(anchors: &'a [SpawnAnchor], rng: &mut ChaCha8Rng) -> Option<&'a SpawnAnchor> {
    if anchors.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..anchors.len());
    Some(&anchors[index])
}
