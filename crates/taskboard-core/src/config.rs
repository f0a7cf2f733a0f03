use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_api_url() -> String {
    "http://localhost:3000/api".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the remote API, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Resolve the configuration: the TASKBOARD_API_URL environment variable
    /// wins over the config file, which wins over the built-in default.
    pub fn load() -> Self {
        if let Ok(url) = std::env::var("TASKBOARD_API_URL") {
            if !url.is_empty() {
                return Self { api_url: url };
            }
        }
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:3000/api");
    }

    #[test]
    fn test_parse_config_file() {
        let config: AppConfig = toml::from_str("api_url = \"https://boards.example.com/api\"")
            .expect("valid config");
        assert_eq!(config.api_url, "https://boards.example.com/api");
    }

    #[test]
    fn test_missing_field_falls_back() {
        let config: AppConfig = toml::from_str("").expect("empty config is valid");
        assert_eq!(config.api_url, "http://localhost:3000/api");
    }
}
