//! Client settings file.
//!
//! Settings live in `settings.json` under the platform config directory.
//! A missing file yields the defaults (and writes them out for next time);
//! a malformed file yields the defaults with a warning rather than an
//! abort.

use std::path::PathBuf;

use skyrunner_core::runner::RunnerConfig;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
    pub fov: f32,
    pub log_level: String,
    pub runner: RunnerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            fov: 70.0,
            log_level: "info".to_string(),
            runner: RunnerConfig::default(),
        }
    }
}

impl Settings {
    /// Loads the settings file, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => match Self::parse(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring malformed {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                let settings = Self::default();
                settings.write(&path);
                settings
            }
        }
    }

    fn parse(text: &str) -> Result<Self, String> {
        let mut settings: Settings =
            serde_json::from_str(text).map_err(|e| e.to_string())?;
        if !(30.0..=120.0).contains(&settings.fov) {
            log::warn!("fov {} out of range, clamping", settings.fov);
            settings.fov = settings.fov.clamp(30.0, 120.0);
        }
        Ok(settings)
    }

    /// Parsed log level, defaulting to `info` on unknown values.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.log_level.as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }

    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skyrunner").join("settings.json"))
    }

    /// Best-effort write of the current settings.
    fn write(&self, path: &std::path::Path) {
        let Ok(text) = serde_json::to_string_pretty(self) else {
            return;
        };
        if let Some(parent) = path.parent()
            && std::fs::create_dir_all(parent).is_ok()
            && std::fs::write(path, text).is_ok()
        {
            log::info!("wrote default settings to {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_overrides_and_defaults() {
        let settings =
            Settings::parse(r#"{"vsync": false, "runner": {"lane_width": 4.0}}"#).unwrap();
        assert!(!settings.vsync);
        assert_eq!(settings.runner.lane_width, 4.0);
        assert_eq!(settings.width, 1280);
        assert_eq!(
            settings.runner.forward_speed,
            RunnerConfig::default().forward_speed
        );
    }

    #[test]
    fn parse_clamps_fov() {
        let settings = Settings::parse(r#"{"fov": 500.0}"#).unwrap();
        assert_eq!(settings.fov, 120.0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Settings::parse("not json").is_err());
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.log_level(), log::LevelFilter::Info);
    }
}
