//! Runtime configuration from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::core::PieceSource;

/// Default gravity interval (one row down every 800ms).
pub const DEFAULT_GRAVITY_MS: u32 = 800;

/// Auto-release delay for terminals that never report key releases.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// How new pieces are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomizerKind {
    Uniform,
    Bag,
}

impl RandomizerKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Some(RandomizerKind::Uniform),
            "bag" | "7bag" | "7-bag" => Some(RandomizerKind::Bag),
            _ => None,
        }
    }

    pub fn source(self, seed: u32) -> PieceSource {
        match self {
            RandomizerKind::Uniform => PieceSource::uniform(seed),
            RandomizerKind::Bag => PieceSource::bag(seed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// RNG seed for piece selection
    pub seed: u32,
    /// Milliseconds between gravity steps; 0 disables gravity
    pub gravity_ms: u32,
    pub randomizer: RandomizerKind,
    /// Used only when the terminal cannot report key releases
    pub key_release_timeout_ms: u32,
    /// Write tracing output to this file
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity_ms: DEFAULT_GRAVITY_MS,
            randomizer: RandomizerKind::Uniform,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl Config {
    /// Read `TETRIS_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = parse_or("TETRIS_SEED", &get, clock_seed);
        let gravity_ms = parse_or("TETRIS_GRAVITY_MS", &get, || defaults.gravity_ms);
        let key_release_timeout_ms = parse_or("TETRIS_KEY_RELEASE_TIMEOUT_MS", &get, || {
            defaults.key_release_timeout_ms
        });

        let randomizer = match get("TETRIS_RANDOMIZER") {
            Some(raw) => RandomizerKind::from_str(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unknown TETRIS_RANDOMIZER, using uniform");
                defaults.randomizer
            }),
            None => defaults.randomizer,
        };

        let log_path = get("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            gravity_ms,
            randomizer,
            key_release_timeout_ms,
            log_path,
        }
    }

    pub fn piece_source(&self) -> PieceSource {
        self.randomizer.source(self.seed)
    }
}

fn parse_or<F, D>(key: &str, get: &F, default: D) -> u32
where
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> u32,
{
    match get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "invalid number, using default");
            default()
        }),
        None => default(),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
