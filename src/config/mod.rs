use crate::core::codec::parse_duration;
use crate::errors::{AppError, AppResult};
use crate::models::ClockTime;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Default for both the planned and the actual end time (`H:MM`).
    #[serde(default = "default_end_time")]
    pub default_end_time: String,
    /// Prefix non-zero durations with `+` when printing.
    #[serde(default)]
    pub show_sign: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_end_time() -> String {
    "17:25".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_end_time: default_end_time(),
            show_sign: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rovertime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rovertime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rovertime.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Configured default end time; an unreadable value falls back to `0:00`
    /// like any other form input.
    pub fn default_end(&self) -> ClockTime {
        parse_duration(&self.default_end_time)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => expand_tilde(&name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Duration;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.default_end_time, "17:25");
        assert!(!cfg.show_sign);
        assert_eq!(cfg.default_end(), Duration::from_hm(17, 25));
    }

    #[test]
    fn bad_end_time_degrades_to_zero() {
        let cfg = Config {
            default_end_time: "late".into(),
            ..Config::default()
        };
        assert_eq!(cfg.default_end(), Duration::ZERO);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path =
            env::temp_dir().join(format!("rovertime_cfg_roundtrip_{}.conf", std::process::id()));
        let cfg = Config {
            database: "/tmp/rt.sqlite".into(),
            default_end_time: "18:00".into(),
            show_sign: true,
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
        fs::remove_file(&path).ok();
    }
}
