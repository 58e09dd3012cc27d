use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_devices_file")]
    pub devices_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_devices_file() -> String {
    "devices.json".to_string()
}
fn default_log_file() -> String {
    "logs.txt".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            devices_file: default_devices_file(),
            log_file: default_log_file(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("storage.devices_file", default_devices_file())?
            .set_default("storage.log_file", default_log_file())?
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run mode overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. MONITOR__STORAGE__DEVICES_FILE=/var/lib/devices.json)
            .add_source(Environment::with_prefix("MONITOR").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
