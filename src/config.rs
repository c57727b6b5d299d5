use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::grid::GridSize;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Side length of the default square board.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest supported board dimension. The starting snake needs three cells
/// and food needs at least one more.
pub const MIN_GRID_DIMENSION: u16 = 5;

/// Largest supported board dimension.
pub const MAX_GRID_DIMENSION: u16 = 60;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 20;

/// Maximum tick interval in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 2_000;

/// Score granted for each food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid dimension {value} is outside {min}..={max}")]
    GridSizeOutOfRange { value: u16, min: u16, max: u16 },
    #[error("tick interval {value}ms is outside {min}..={max}ms")]
    TickIntervalOutOfRange { value: u64, min: u64, max: u64 },
    #[error("palette entry '{key}' has invalid colour '{value}'")]
    InvalidColor { key: String, value: String },
}

/// On-disk settings. Every field is optional; missing values fall back to the
/// compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub grid_size: Option<u16>,
    pub tick_interval_ms: Option<u64>,
    pub palette: PaletteFile,
}

/// Hex colour overrides, e.g. `"snake_head": "#2E8B57"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteFile {
    pub snake_head: Option<String>,
    pub snake_body: Option<String>,
    pub food: Option<String>,
    pub board: Option<String>,
    pub border: Option<String>,
    pub text: Option<String>,
    pub accent: Option<String>,
}

/// Values supplied on the command line; they win over the settings file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub grid_size: Option<u16>,
    pub tick_interval_ms: Option<u64>,
    pub seed: Option<u64>,
}

/// Validated simulation settings for one process.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub tick_interval: Duration,
    /// Fixed RNG seed for reproducible food placement.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::DEFAULT,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Merges the settings file with command-line overrides and validates the result.
    pub fn resolve(file: &SettingsFile, overrides: Overrides) -> Result<Self, ConfigError> {
        let grid_size = overrides
            .grid_size
            .or(file.grid_size)
            .unwrap_or(DEFAULT_GRID_SIZE);
        let tick_ms = overrides
            .tick_interval_ms
            .or(file.tick_interval_ms)
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS);

        Ok(Self {
            grid: GridSize::square(grid_size)?,
            tick_interval: validate_tick_interval(tick_ms)?,
            seed: overrides.seed,
        })
    }
}

fn validate_tick_interval(ms: u64) -> Result<Duration, ConfigError> {
    if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&ms) {
        return Err(ConfigError::TickIntervalOutOfRange {
            value: ms,
            min: MIN_TICK_INTERVAL_MS,
            max: MAX_TICK_INTERVAL_MS,
        });
    }

    Ok(Duration::from_millis(ms))
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from the default location.
///
/// A missing file is not an error; it yields the defaults.
pub fn load_settings() -> Result<SettingsFile, ConfigError> {
    load_settings_from_path(&settings_path())
}

/// Loads settings from `path`, returning defaults when the file does not exist.
pub fn load_settings_from_path(path: &Path) -> Result<SettingsFile, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SettingsFile::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
