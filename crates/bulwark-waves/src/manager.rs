//! Wave progression state machine.
//!
//! Two phases, mutually exclusive: **Break** (the inter-wave countdown,
//! including the pre-game idle state) and **Active** (spawn queue and/or
//! registry non-empty). The host calls [`WaveManager::advance`] once per
//! frame with a logical delta-time and reports deaths through
//! [`WaveManager::on_enemy_killed`]; both entry points run on the same
//! logical thread, so the engine holds no locks.

use std::collections::VecDeque;
use std::path::PathBuf;

use glam::Vec3;
use hecs::{Entity, World};
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bulwark_core::components::{AttackDamage, Health};
use bulwark_core::constants::{
    BOSS_WAVE_INTERVAL, DEFAULT_WAVE_BREAK_SECS, SPAWN_PRIME_DELAY_SECS,
};
use bulwark_core::difficulty;
use bulwark_core::events::WaveEvent;

use crate::boss::BossWaveController;
use crate::catalog::{validate_combat_capable, EnemyFactory, RewardSink};
use crate::definitions::{WaveDefinition, WaveTable};
use crate::spawn_point::{SpawnAnchor, SpawnPattern};

/// Configuration surface for the wave engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Inter-wave break duration (seconds).
    pub wave_break_secs: f32,
    /// Start wave 1 on the first tick instead of waiting for an explicit
    /// start request.
    pub auto_start_first_wave: bool,
    /// Wave document path. `None` (or an unusable document) selects the
    /// deterministic fallback table.
    pub definitions_path: Option<PathBuf>,
    /// Configured spawn anchors. Empty means all spawns at world origin.
    pub anchors: Vec<SpawnAnchor>,
    /// RNG seed for anchor selection and Random-pattern placement.
    /// Same seed = same simulation.
    pub seed: u64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_break_secs: DEFAULT_WAVE_BREAK_SECS,
            auto_start_first_wave: false,
            definitions_path: None,
            anchors: Vec::new(),
            seed: 42,
        }
    }
}

/// One flattened spawn instruction: a single unit of a spawn group.
#[derive(Debug, Clone)]
struct SpawnQueueItem {
    enemy_type: String,
    delay_secs: f32,
    pattern: SpawnPattern,
    group_index: usize,
    group_total: usize,
}

/// The top-level wave orchestrator.
pub struct WaveManager {
    config: WaveConfig,
    table: WaveTable,
    factory: Box<dyn EnemyFactory>,
    rewards: Box<dyn RewardSink>,
    boss_controller: BossWaveController,
    rng: ChaCha8Rng,

    current_wave: u32,
    wave_active: bool,
    break_remaining_secs: f32,
    spawn_timer: f32,
    spawn_queue: VecDeque<SpawnQueueItem>,
    active_enemies: Vec<Entity>,
    events: Vec<WaveEvent>,
}

impl WaveManager {
    /// Create a manager, loading the wave table from the configured path
    /// (or the fallback table if no path is configured).
    pub fn new(
        config: WaveConfig,
        factory: Box<dyn EnemyFactory>,
        rewards: Box<dyn RewardSink>,
    ) -> Self {
        let table = match &config.definitions_path {
            Some(path) => WaveTable::load(path),
            None => WaveTable::generate_fallback(),
        };
        Self::with_table(config, table, factory, rewards)
    }

    /// Create a manager with an explicit wave table.
    pub fn with_table(
        config: WaveConfig,
        table: WaveTable,
        factory: Box<dyn EnemyFactory>,
        rewards: Box<dyn RewardSink>,
    ) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        info!(
            "wave manager initialized with {} anchors and {} wave definitions",
            config.anchors.len(),
            table.len()
        );
        Self {
            config,
            table,
            factory,
            rewards,
            boss_controller: BossWaveController::new(),
            rng,
            current_wave: 0,
            wave_active: false,
            break_remaining_secs: 0.0,
            spawn_timer: 0.0,
            spawn_queue: VecDeque::new(),
            active_enemies: Vec::new(),
            events: Vec::new(),
        }
    }

    // --- Accessors ---

    pub fn current_wave(&self) -> u32 {
        self.current_wave
    }

    pub fn is_wave_active(&self) -> bool {
        self.wave_active
    }

    pub fn break_time_remaining(&self) -> f32 {
        self.break_remaining_secs
    }

    /// Enemies currently alive and registered.
    pub fn enemies_remaining(&self) -> usize {
        self.active_enemies.len()
    }

    /// Units still waiting in the spawn queue.
    pub fn queued_spawns(&self) -> usize {
        self.spawn_queue.len()
    }

    /// Live boss-wave entities (boss plus support), lazily purged.
    pub fn boss_remaining(&mut self, world: &World) -> usize {
        self.boss_controller.remaining_count(world)
    }

    /// Drain the buffered lifecycle events for this tick.
    pub fn drain_events(&mut self) -> Vec<WaveEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Tick entry points ---

    /// Advance the engine by one frame's logical delta-time.
    pub fn advance(&mut self, world: &mut World, dt: f32) {
        // Lazy sweep: drop handles for entities the host has despawned
        // without reporting a kill.
        self.active_enemies.retain(|&e| world.contains(e));

        if self.wave_active {
            if !self.spawn_queue.is_empty() {
                self.spawn_timer -= dt;
                if self.spawn_timer <= 0.0 {
                    self.process_next_spawn(world);
                }
            } else if self.active_enemies.is_empty() {
                self.complete_wave();
            }
        } else if self.break_remaining_secs > 0.0 {
            self.break_remaining_secs -= dt;
            if self.break_remaining_secs <= 0.0 {
                self.break_remaining_secs = 0.0;
                self.start_next_wave(world);
            }
        } else if self.current_wave == 0 && self.config.auto_start_first_wave {
            // Deferred first start: runs on the first tick after creation.
            self.start_next_wave(world);
        }
    }

    /// Report the death of a registered enemy. Completion is evaluated
    /// immediately so a wave never lingers a tick after its last kill.
    pub fn on_enemy_killed(&mut self, world: &mut World, entity: Entity) {
        if let Some(index) = self.active_enemies.iter().position(|&e| e == entity) {
            self.active_enemies.swap_remove(index);
        }
        self.active_enemies.retain(|&e| world.contains(e));

        if self.wave_active && self.spawn_queue.is_empty() && self.active_enemies.is_empty() {
            self.complete_wave();
        }
    }

    // --- Wave transitions ---

    /// Break -> Active. Rejected (logged, no state change) while a wave is
    /// active. Advancing past the last defined wave emits
    /// `AllWavesCompleted` and leaves the engine idle.
    pub fn start_next_wave(&mut self, world: &mut World) {
        if self.wave_active {
            warn!(
                "cannot start a new wave while wave {} is active",
                self.current_wave
            );
            return;
        }

        self.current_wave += 1;

        if self.current_wave as usize > self.table.len() {
            info!("all {} waves completed", self.table.len());
            self.events.push(WaveEvent::AllWavesCompleted);
            return;
        }

        self.wave_active = true;
        self.break_remaining_secs = 0.0;

        let def = match self.table.get(self.current_wave) {
            Some(def) => def.clone(),
            None => {
                warn!(
                    "no definition for wave {}; substituting an empty wave",
                    self.current_wave
                );
                WaveDefinition::empty(self.current_wave)
            }
        };

        let is_boss_wave = def.is_boss_wave || self.current_wave % BOSS_WAVE_INTERVAL == 0;

        let total_enemies = if is_boss_wave {
            self.spawn_queue.clear();
            let spawned = self.boss_controller.spawn_boss_wave(
                world,
                self.factory.as_mut(),
                &self.config.anchors,
                &mut self.rng,
                self.current_wave,
                &def,
                &mut self.events,
            );
            let count = spawned.len();
            self.active_enemies.extend(spawned);
            count
        } else {
            self.enqueue_normal_wave(&def);
            self.spawn_queue.len()
        };

        self.events.push(WaveEvent::WaveStarted {
            wave_number: self.current_wave,
            total_enemies,
            is_boss_wave,
        });
        info!(
            "wave {} started with {total_enemies} enemies (boss: {is_boss_wave})",
            self.current_wave
        );
    }

    /// Active -> Break. Grants rewards (fire-and-forget), arms the break
    /// timer, and emits `WaveCompleted`.
    fn complete_wave(&mut self) {
        self.wave_active = false;
        self.break_remaining_secs = self.config.wave_break_secs;

        let wave = self.current_wave as i32;
        let credits_reward = difficulty::credits_reward(wave);
        let xp_reward = difficulty::xp_reward(wave);

        if let Err(err) = self.rewards.grant_credits(credits_reward, "wave_complete") {
            warn!("credit grant for wave {} failed: {err}", self.current_wave);
        }

        self.events.push(WaveEvent::WaveCompleted {
            wave_number: self.current_wave,
            credits_reward,
            xp_reward,
        });
        info!(
            "wave {} completed: +{credits_reward} credits, +{xp_reward} xp; next wave in {}s",
            self.current_wave, self.config.wave_break_secs
        );
    }

    // --- Forced operations (debug/operator surface) ---

    /// Abort the current wave and complete it immediately: queue, registry,
    /// and boss tracking are cleared atomically before the completion fires.
    pub fn skip_wave(&mut self, world: &mut World) {
        if !self.wave_active {
            warn!("skip requested outside an active wave; ignoring");
            return;
        }
        self.reset_wave_state(world);
        self.complete_wave();
    }

    /// Abort whatever is in flight and start `wave` directly.
    pub fn jump_to_wave(&mut self, world: &mut World, wave: u32) {
        self.reset_wave_state(world);
        self.wave_active = false;
        self.break_remaining_secs = 0.0;
        self.current_wave = wave.saturating_sub(1);
        self.start_next_wave(world);
    }

    /// Clear queue, registry, and boss tracking in one step so a partially
    /// drained state can never double-fire completion.
    fn reset_wave_state(&mut self, world: &mut World) {
        self.spawn_queue.clear();
        self.spawn_timer = 0.0;
        self.boss_controller.clear_all(world);
        for entity in self.active_enemies.drain(..) {
            // Boss-wave entities were already despawned by clear_all.
            let _ = world.despawn(entity);
        }
    }

    // --- Spawning ---

    /// Flatten the definition's spawn groups into per-unit queue items and
    /// arm the priming delay.
    fn enqueue_normal_wave(&mut self, def: &WaveDefinition) {
        self.spawn_queue.clear();
        for group in &def.spawn_groups {
            let total = group.count.max(0) as usize;
            let pattern = SpawnPattern::parse(&group.pattern);
            for index in 0..total {
                self.spawn_queue.push_back(SpawnQueueItem {
                    enemy_type: group.enemy_type.clone(),
                    delay_secs: group.delay_secs,
                    pattern,
                    group_index: index,
                    group_total: total,
                });
            }
        }
        self.spawn_timer = SPAWN_PRIME_DELAY_SECS;
    }

    /// Dequeue and spawn one unit. Unknown types and capability failures
    /// skip the unit (logged) and retry the queue on the next tick; they
    /// never stall the wave.
    fn process_next_spawn(&mut self, world: &mut World) {
        let Some(item) = self.spawn_queue.pop_front() else {
            return;
        };

        let position = self.pick_spawn_position(&item);
        let Some(entity) = self
            .factory
            .create(world, &item.enemy_type, position)
        else {
            warn!(
                "unknown enemy type {:?} in wave {}; skipping spawn",
                item.enemy_type, self.current_wave
            );
            self.spawn_timer = 0.0;
            return;
        };
        if !validate_combat_capable(world, entity, &item.enemy_type) {
            self.spawn_timer = 0.0;
            return;
        }

        self.apply_difficulty_scaling(world, entity);
        self.active_enemies.push(entity);

        // The dequeued item's own delay paces the next spawn.
        self.spawn_timer = item.delay_secs;
    }

    /// Random anchor + the item's pattern; world origin when no anchors
    /// are configured.
    fn pick_spawn_position(&mut self, item: &SpawnQueueItem) -> Vec3 {
        if self.config.anchors.is_empty() {
            return Vec3::ZERO;
        }
        let index = self.rng.gen_range(0..self.config.anchors.len());
        self.config.anchors[index].spawn_position(
            item.pattern,
            item.group_index,
            item.group_total,
            &mut self.rng,
        )
    }

    /// Scale HP and damage for the current wave, then apply the elite
    /// multipliers on top of the scaled values.
    fn apply_difficulty_scaling(&self, world: &mut World, entity: Entity) {
        let wave = self.current_wave as i32;

        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            let scaled = difficulty::scale_enemy_hp(health.max, wave);
            let scaled = (scaled as f32 * difficulty::elite_hp_multiplier(wave)) as i32;
            health.max = scaled;
            health.current = scaled;
        }
        if let Ok(mut damage) = world.get::<&mut AttackDamage>(entity) {
            let scaled = difficulty::scale_enemy_damage(damage.amount, wave);
            damage.amount = (scaled as f32 * difficulty::elite_damage_multiplier(wave)) as i32;
        }
    }
}
