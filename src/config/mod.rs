use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Environment variable holding the Google Places key when the config
/// file does not carry one.
pub const PLACES_KEY_ENV: &str = "RGIRAS_PLACES_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

impl Default for MapCenter {
    // Lima
    fn default() -> Self {
        Self {
            lat: -12.0464,
            lon: -77.0428,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub page_size: usize,
    pub default_radius: f64,
    pub places_api_key: Option<String>,
    pub map_center: MapCenter,
    pub log_level: String,
    pub show_distances: bool,

    /// Directory the config was loaded from. Never written to the file.
    #[serde(skip)]
    pub home: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:4000/api".to_string(),
            timeout_seconds: 30,
            page_size: 10,
            default_radius: 100.0,
            places_api_key: None,
            map_center: MapCenter::default(),
            log_level: "info".to_string(),
            show_distances: true,
            home: Self::config_dir(None),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform,
    /// unless an explicit directory is given.
    pub fn config_dir(custom: Option<&Path>) -> PathBuf {
        if let Some(dir) = custom {
            return dir.to_path_buf();
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rgiras")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rgiras")
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("rgiras.conf")
    }

    pub fn session_file(&self) -> PathBuf {
        self.home.join("session.json")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.home.join("logs")
    }

    /// Load configuration from `<dir>/rgiras.conf`, or return defaults if
    /// the file does not exist.
    pub fn load(custom_dir: Option<&Path>) -> AppResult<Self> {
        let home = Self::config_dir(custom_dir);
        let path = home.join("rgiras.conf");

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str::<Config>(&content).map_err(|e| {
                    AppError::Config(format!("cannot parse {}: {e}", path.display()))
                })?
            }
        } else {
            Config::default()
        };

        cfg.home = home;
        Ok(cfg)
    }

    /// Write the default configuration, creating the directory if needed.
    /// An existing file is left untouched unless `overwrite` is set.
    /// Returns true when the file was written.
    pub fn init_all(custom_dir: Option<&Path>, overwrite: bool) -> AppResult<bool> {
        let home = Self::config_dir(custom_dir);
        fs::create_dir_all(&home)?;
        fs::create_dir_all(home.join("logs"))?;

        let cfg = Config {
            home,
            ..Config::default()
        };

        let path = cfg.config_file();
        if path.exists() && !overwrite {
            return Ok(false);
        }

        cfg.save()?;
        Ok(true)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(self.config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Places key from the config file, else from the environment.
    pub fn places_key(&self) -> Option<String> {
        self.places_api_key
            .as_ref()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .or_else(|| env::var(PLACES_KEY_ENV).ok().filter(|k| !k.trim().is_empty()))
    }
}
