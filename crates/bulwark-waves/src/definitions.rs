//! Wave definition records and the wave table repository.
//!
//! The table is loaded once at startup from a JSON document mapping
//! `"wave_<n>"` keys to definition records (see `data/wave_definitions.json`
//! for the format). A missing or malformed document is non-fatal: the
//! repository falls back to a deterministic procedurally generated table.

use std::collections::BTreeMap;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bulwark_core::constants::{
    BOSS_WAVE_INTERVAL, FALLBACK_BOSS_SUPPORT_COUNT, FALLBACK_WAVE_COUNT,
};
use bulwark_core::difficulty::scale_enemy_count;

/// Composition of a single wave. Immutable once loaded.
///
/// A boss wave ignores `spawn_groups`; a normal wave ignores `boss_type`
/// and `support_enemies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveDefinition {
    pub wave_number: u32,
    pub is_boss_wave: bool,
    pub boss_type: Option<String>,
    pub spawn_groups: Vec<SpawnGroup>,
    pub support_enemies: Vec<SupportEnemy>,
}

impl WaveDefinition {
    /// Substitute for a wave number missing from the table: zero groups,
    /// so the wave completes on the next tick.
    pub fn empty(wave_number: u32) -> Self {
        Self {
            wave_number,
            ..Self::default()
        }
    }
}

/// A group of identical enemies spawned `delay_secs` apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnGroup {
    pub enemy_type: String,
    pub count: i32,
    pub delay_secs: f32,
    /// Pattern tag, parsed leniently at queue time (unknown => Random).
    pub pattern: String,
}

impl Default for SpawnGroup {
    fn default() -> Self {
        Self {
            enemy_type: String::new(),
            count: 0,
            delay_secs: 1.0,
            pattern: "Random".to_string(),
        }
    }
}

/// Support enemies accompanying a boss, spawned immediately (not queued).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportEnemy {
    pub enemy_type: String,
    pub count: u32,
}

/// Milestone boss roster. Unknown milestones resolve to the first boss.
pub fn boss_for_wave(wave: u32) -> &'static str {
    match wave {
        10 => "FrostTitan",
        20 => "InfernoColossus",
        30 => "VoidWraith",
        40 => "StormLord",
        50 => "ChaosBringer",
        _ => "FrostTitan",
    }
}

/// Failure to load the wave document. Non-fatal: callers fall back to the
/// generated table.
#[derive(Debug, Error)]
pub enum WaveDataError {
    #[error("failed to read wave document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse wave document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The loaded wave table: wave number -> definition, ordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveTable {
    waves: BTreeMap<u32, WaveDefinition>,
}

impl WaveTable {
    /// Load the table from a JSON document, falling back to the generated
    /// table if the document is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(table) => {
                info!("loaded {} wave definitions from {}", table.len(), path.display());
                table
            }
            Err(err) => {
                warn!(
                    "wave document {} unusable ({err}); generating fallback table",
                    path.display()
                );
                Self::generate_fallback()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, WaveDataError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&text)?)
    }

    /// Parse a `"wave_<n>"` keyed document. Keys that do not carry a wave
    /// number are skipped with a warning rather than failing the load.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, WaveDefinition> = serde_json::from_str(text)?;
        let mut waves = BTreeMap::new();
        for (key, mut def) in raw {
            let number = key
                .strip_prefix("wave_")
                .and_then(|n| n.parse::<u32>().ok());
            match number {
                Some(n) => {
                    def.wave_number = n;
                    waves.insert(n, def);
                }
                None => warn!("skipping wave document entry with bad key {key:?}"),
            }
        }
        Ok(Self { waves })
    }

    /// Build a table directly from definitions (used by hosts and tests).
    pub fn from_definitions(defs: impl IntoIterator<Item = WaveDefinition>) -> Self {
        Self {
            waves: defs.into_iter().map(|d| (d.wave_number, d)).collect(),
        }
    }

    /// Deterministic procedural fallback: 50 waves across three difficulty
    /// tiers, with a boss wave every 10th. Reproducible byte-for-byte;
    /// the only randomness in the whole pipeline is Random-pattern
    /// placement at spawn time.
    pub fn generate_fallback() -> Self {
        let mut waves = BTreeMap::new();
        for wave in 1..=FALLBACK_WAVE_COUNT {
            let def = if wave % BOSS_WAVE_INTERVAL == 0 {
                WaveDefinition {
                    wave_number: wave,
                    is_boss_wave: true,
                    boss_type: Some(boss_for_wave(wave).to_string()),
                    spawn_groups: Vec::new(),
                    support_enemies: vec![SupportEnemy {
                        enemy_type: "Grunt".to_string(),
                        count: FALLBACK_BOSS_SUPPORT_COUNT,
                    }],
                }
            } else {
                WaveDefinition {
                    wave_number: wave,
                    is_boss_wave: false,
                    boss_type: None,
                    spawn_groups: fallback_spawn_groups(wave as i32),
                    support_enemies: Vec::new(),
                }
            };
            waves.insert(wave, def);
        }
        Self { waves }
    }

    pub fn get(&self, wave: u32) -> Option<&WaveDefinition> {
        self.waves.get(&wave)
    }

    /// Total number of defined waves. Progression past this count is the
    /// all-waves-completed terminal condition.
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

/// Spawn group composition for a fallback normal wave.
fn fallback_spawn_groups(wave: i32) -> Vec<SpawnGroup> {
    let mut groups = Vec::new();
    let mut push = |enemy_type: &str, base_count: i32, delay_secs: f32| {
        groups.push(SpawnGroup {
            enemy_type: enemy_type.to_string(),
            count: scale_enemy_count(base_count, wave),
            delay_secs,
            pattern: "Random".to_string(),
        });
    };

    if wave <= 10 {
        // Tutorial tier: grunts, with shooters joining from wave 5.
        push("Grunt", 5 + wave, 1.5);
        if wave >= 5 {
            push("Shooter", wave / 2, 2.0);
        }
    } else if wave <= 30 {
        // Progression tier: three concurrent groups, flyers from wave 15.
        push("Grunt", 10 + wave / 2, 1.0);
        push("Shooter", 5 + wave / 3, 1.5);
        push("Tank", 2 + wave / 5, 2.0);
        if wave >= 15 {
            push("Flyer", 3 + wave / 4, 1.5);
        }
    } else {
        // Endgame tier: five concurrent groups at tighter delays.
        push("Grunt", 20 + wave / 2, 0.8);
        push("Shooter", 10 + wave / 3, 1.0);
        push("Tank", 5 + wave / 4, 1.5);
        push("Flyer", 8 + wave / 3, 1.0);
        push("Swarm", 15 + wave / 2, 0.5);
    }

    groups
}
