//! User configuration (`config.toml` in the platform config dir).
//!
//! Covers the ambient knobs of the TUI itself: theme, confirm-on-quit,
//! and the simulated-operation pacing. Missing or unparseable files fall
//! back to defaults; parse errors are logged, never fatal.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mentor_core::prelude::*;

const CONFIG_DIR: &str = "code-mentor";
const CONFIG_FILENAME: &str = "config.toml";

/// Application configuration (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct UserConfig {
    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BehaviorConfig {
    /// Ask before quitting while a simulated operation is pending.
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UiConfig {
    /// Color theme name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Tick interval for animations, in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Pacing of the simulated operations. A speed factor of 0 makes every
/// mock flow complete on the next loop iteration (useful for demos).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SimulationConfig {
    /// Percentage scale applied to every simulated delay (100 = real pacing).
    #[serde(default = "default_speed_percent")]
    pub speed_percent: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed_percent: default_speed_percent(),
        }
    }
}

impl SimulationConfig {
    /// Scale a base delay by the configured speed.
    pub fn scale(&self, base: std::time::Duration) -> std::time::Duration {
        base.mul_f64(self.speed_percent as f64 / 100.0)
    }
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_tick_ms() -> u64 {
    50
}

fn default_speed_percent() -> u64 {
    100
}

/// Path to the config file under the platform config dir.
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load configuration, falling back to defaults on any problem.
pub fn load_config() -> UserConfig {
    load_config_from(&config_path())
}

/// Load configuration from an explicit path (test hook).
pub fn load_config_from(path: &Path) -> UserConfig {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return UserConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                UserConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            UserConfig::default()
        }
    }
}

/// Save configuration atomically (temp file + rename).
pub fn save_config(config: &UserConfig) -> Result<()> {
    save_config_to(&config_path(), config)
}

/// Save configuration to an explicit path (test hook).
pub fn save_config_to(path: &Path, config: &UserConfig) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::config("config path has no parent directory"))?;
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;

    let temp_path = dir.join(".config.toml.tmp");
    std::fs::write(&temp_path, &content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved config to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = UserConfig::default();
        assert!(config.behavior.confirm_quit);
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.ui.tick_ms, 50);
        assert_eq!(config.simulation.speed_percent, 100);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml"));
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_bad_toml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not = [valid").unwrap();
        assert_eq!(load_config_from(&path), UserConfig::default());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let mut config = UserConfig::default();
        config.ui.theme = "dark".to_string();
        config.simulation.speed_percent = 10;

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ntheme = \"dark\"\n").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.tick_ms, 50);
        assert!(config.behavior.confirm_quit);
    }

    #[test]
    fn test_simulation_scale() {
        let sim = SimulationConfig { speed_percent: 50 };
        assert_eq!(sim.scale(Duration::from_secs(2)), Duration::from_secs(1));

        let frozen = SimulationConfig { speed_percent: 0 };
        assert_eq!(frozen.scale(Duration::from_secs(2)), Duration::ZERO);
    }
}
