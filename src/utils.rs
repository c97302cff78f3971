use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::messages::Language;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: String,
    pub model_path: PathBuf,
    pub workers: usize,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1:8080".to_string(),
            model_path: PathBuf::from("RFModel.onnx"),
            workers: 2,
            language: Language::English,
        }
    }
}

pub fn load_config() -> Config {
    load_config_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// Loads the configuration file. A missing or malformed file is not fatal:
/// the defaults are used and a warning is logged. Keys left out of the file
/// keep their default value.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(config_content) => match serde_yaml::from_str::<Config>(&config_content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                Config::default()
            }
        },
        Err(_) => {
            tracing::warn!(path = %path.display(), "config not found, using defaults");
            Config::default()
        }
    }
}
