use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::platform::DeviceProfile;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/ctrident/config.toml, then by CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// UI language (zh, en)
    pub lang: String,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// Font metrics file replacing the packaged font
    pub font: Option<PathBuf>,
    /// Frame interval in milliseconds
    pub frame_interval_ms: u64,
    /// How long a key counts as held after its last press, for terminals
    /// without release events
    pub hold_window_ms: u64,
    /// Write the auxiliary debug log
    pub debug_log: bool,
    /// Where the debug log goes
    pub log_file: PathBuf,
    /// The emulated console
    pub device: DeviceProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            theme: "default".to_string(),
            font: None,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            hold_window_ms: DEFAULT_HOLD_WINDOW_MS,
            debug_log: cfg!(debug_assertions),
            log_file: default_log_path(),
            device: DeviceProfile::default(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    lang: Option<String>,
    theme: Option<String>,
    font: Option<PathBuf>,
    frame_interval_ms: Option<u64>,
    hold_window_ms: Option<u64>,
    debug_log: Option<bool>,
    log_file: Option<PathBuf>,
    device: Option<DeviceProfile>,
}

impl Config {
    /// Load config from ~/.config/ctrident/config.toml, falling back to
    /// defaults for any missing fields.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load from an explicit path. A missing file gives pure defaults; a
    /// file that fails to parse gives defaults and a warning.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Config::default(),
        };

        match Self::from_toml_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Config::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file_config: FileConfig = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(v) = file_config.lang {
            if LANGUAGES.contains(&v.as_str()) {
                config.lang = v;
            }
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        if let Some(v) = file_config.font {
            if !v.as_os_str().is_empty() {
                config.font = Some(v);
            }
        }
        if let Some(v) = file_config.frame_interval_ms {
            config.frame_interval_ms = v.max(MIN_FRAME_INTERVAL_MS);
        }
        if let Some(v) = file_config.hold_window_ms {
            config.hold_window_ms = v.max(MIN_HOLD_WINDOW_MS);
        }
        if let Some(v) = file_config.debug_log {
            config.debug_log = v;
        }
        if let Some(v) = file_config.log_file {
            if !v.as_os_str().is_empty() {
                config.log_file = v;
            }
        }
        if let Some(v) = file_config.device {
            config.device = v;
        }

        Ok(config)
    }
}
