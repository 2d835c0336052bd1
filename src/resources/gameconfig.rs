//! Game configuration resource.
//!
//! Window and asset settings loaded from an INI configuration file. Gameplay
//! tuning is not configurable; see [`crate::game`] for those constants.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! title = Dapper Dasher
//! target_fps = 60
//! vsync = false
//!
//! [assets]
//! textures = ./textures
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TITLE: &str = "Dapper Dasher";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = false;
const DEFAULT_TEXTURES_DIR: &str = "./textures";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Directory holding the texture files.
    pub textures_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            textures_dir: PathBuf::from(DEFAULT_TEXTURES_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            if fps > 0 {
                self.target_fps = fps as u32;
            }
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [assets] section
        if let Some(textures) = config.get("assets", "textures") {
            self.textures_dir = PathBuf::from(textures);
        }

        info!(
            "Loaded config: title={:?}, fps={}, vsync={}, textures={:?}",
            self.title, self.target_fps, self.vsync, self.textures_dir
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_ini(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dapperdasher-{}-{}.ini",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.title, "Dapper Dasher");
        assert_eq!(config.target_fps, 60);
        assert!(!config.vsync);
        assert_eq!(config.textures_dir, PathBuf::from("./textures"));
    }

    #[test]
    fn test_load_overrides_present_values() {
        let path = write_temp_ini(
            "full",
            "[window]\ntitle = Dash\ntarget_fps = 144\nvsync = true\n[assets]\ntextures = /tmp/tex\n",
        );
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.title, "Dash");
        assert_eq!(config.target_fps, 144);
        assert!(config.vsync);
        assert_eq!(config.textures_dir, PathBuf::from("/tmp/tex"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_keeps_defaults_for_missing_and_zero_fps() {
        let path = write_temp_ini("partial", "[window]\ntarget_fps = 0\n");
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.title, "Dapper Dasher");
        assert_eq!(config.target_fps, 60);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut config = GameConfig::with_path("/nonexistent/dapperdasher.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.target_fps, 60);
    }
}
