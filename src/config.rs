use std::path::{Path, PathBuf};

use serde::Deserialize;

use cinder_physics::PhysicsParams;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("world dimensions must be non-zero, got {0}x{1}x{2}")]
    EmptyWorld(usize, usize, usize),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    /// Extent along Z.
    pub height: usize,
    /// Extent along Y.
    pub depth: usize,
    pub save_path: PathBuf,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            depth: 64,
            save_path: PathBuf::from("level.dat"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Chunk rebuilds allowed per rendered frame.
    pub rebuild_budget: usize,
    pub ticks_per_second: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rebuild_budget: 2,
            ticks_per_second: 60.0,
        }
    }
}

/// Contents of `cinder.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub physics: PhysicsParams,
    pub render: RenderConfig,
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;
        let w = &cfg.world;
        if w.width == 0 || w.height == 0 || w.depth == 0 {
            return Err(ConfigError::EmptyWorld(w.width, w.height, w.depth));
        }
        Ok(cfg)
    }

    /// Reads `path`, or returns the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(s) => {
                let cfg = Self::from_toml(&s)?;
                log::info!("config loaded from {}", path.display());
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
