// Rust guideline compliant 2026-10-18

//! Configuration management for the dispatch backend.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "dispatch.toml";

/// Configuration for the server and API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Artificial delay applied to every API request, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Whether the server starts with the demo couriers.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Number of id candidates tried before a create fails with an id conflict.
    #[serde(default = "default_id_max_attempts")]
    pub id_max_attempts: usize,

    /// Base URL used by API clients.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_latency_ms() -> u64 {
    150
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_id_max_attempts() -> usize {
    3
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:3001".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            latency_ms: default_latency_ms(),
            seed_demo_data: default_seed_demo_data(),
            id_max_attempts: default_id_max_attempts(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/dispatch.toml`
    /// 3. Environment variables with `DISPATCH_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DISPATCH_BIND`
    /// - `DISPATCH_PORT`
    /// - `DISPATCH_LATENCY_MS`
    /// - `DISPATCH_SEED_DEMO_DATA` (true/false)
    /// - `DISPATCH_ID_MAX_ATTEMPTS`
    /// - `DISPATCH_API_BASE_URL`
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DISPATCH_BIND") {
            self.bind = val;
        }

        if let Ok(val) = std::env::var("DISPATCH_PORT") {
            self.port = val.parse().map_err(|_| {
                crate::Error::Config("DISPATCH_PORT must be a port number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("DISPATCH_LATENCY_MS") {
            self.latency_ms = val.parse().map_err(|_| {
                crate::Error::Config("DISPATCH_LATENCY_MS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("DISPATCH_SEED_DEMO_DATA") {
            self.seed_demo_data = val.parse().map_err(|_| {
                crate::Error::Config("DISPATCH_SEED_DEMO_DATA must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("DISPATCH_ID_MAX_ATTEMPTS") {
            self.id_max_attempts = val.parse().map_err(|_| {
                crate::Error::Config("DISPATCH_ID_MAX_ATTEMPTS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("DISPATCH_API_BASE_URL") {
            self.api_base_url = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `id_max_attempts` is zero or `api_base_url` is not an
    /// http(s) URL.
    fn validate(&self) -> Result<()> {
        if self.id_max_attempts == 0 {
            return Err(crate::Error::Config(
                "id_max_attempts must be greater than 0".to_string(),
            ));
        }

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(crate::Error::Config(format!(
                "api_base_url must start with http:// or https://, got {}",
                self.api_base_url
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/dispatch.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-wide; tests touching them run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("DISPATCH_BIND");
        std::env::remove_var("DISPATCH_PORT");
        std::env::remove_var("DISPATCH_LATENCY_MS");
        std::env::remove_var("DISPATCH_SEED_DEMO_DATA");
        std::env::remove_var("DISPATCH_ID_MAX_ATTEMPTS");
        std::env::remove_var("DISPATCH_API_BASE_URL");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.latency_ms, 150);
        assert!(config.seed_demo_data);
        assert_eq!(config.id_max_attempts, 3);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
bind = "0.0.0.0"
port = 8080
latency_ms = 0
seed_demo_data = false
id_max_attempts = 5
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.latency_ms, 0);
        assert!(!config.seed_demo_data);
        assert_eq!(config.id_max_attempts, 5);
        assert_eq!(config.api_base_url, "http://127.0.0.1:3001");
    }

    #[test]
    fn test_config_validation_zero_attempts() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "id_max_attempts = 0").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "port = \"eighty\"").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "latency_ms = 10").unwrap();

        std::env::set_var("DISPATCH_LATENCY_MS", "0");
        std::env::set_var("DISPATCH_SEED_DEMO_DATA", "false");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.latency_ms, 0);
        assert!(!config.seed_demo_data);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("DISPATCH_PORT", "not-a-port");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            port: 4000,
            latency_ms: 25,
            api_base_url: "https://dispatch.example.com".to_string(),
            ..Config::default()
        };
        original.save(temp_dir.path()).unwrap();

        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
