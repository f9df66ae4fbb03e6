use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::SignalAdjustments;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    pub vectorizer_path: PathBuf,
    pub classifier_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            vectorizer_path: PathBuf::from("models/vectorizer.json"),
            classifier_path: PathBuf::from("models/classifier.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: SignalAdjustments,
    pub model: ModelConfig,
    pub server: ServerConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("failed to create config dir: {}", err))?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("CREDIBILITY_VECTORIZER_PATH") {
            if !path.trim().is_empty() {
                self.model.vectorizer_path = PathBuf::from(path);
            }
        }
        if let Ok(path) = env::var("CREDIBILITY_CLASSIFIER_PATH") {
            if !path.trim().is_empty() {
                self.model.classifier_path = PathBuf::from(path);
            }
        }
        if let Ok(host) = env::var("CREDIBILITY_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("CREDIBILITY_PORT") {
            if let Ok(value) = port.parse::<u16>() {
                self.server.port = value;
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    env::var("CREDIBILITY_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/credibility.toml")))
}
