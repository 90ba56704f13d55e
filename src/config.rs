use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::language::SUPPORTED_LANGUAGES;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    /// Path of the header photo. Served from outside the binary; a missing
    /// file only renders as a broken image.
    #[serde(default = "default_photo_url")]
    pub photo_url: String,
    /// Locale used when the visitor's `Accept-Language` matches nothing we ship
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            photo_url: default_photo_url(),
            default_language: default_language(),
        }
    }
}

fn default_photo_url() -> String {
    "/your-photo.jpg".to_string()
}

fn default_language() -> String {
    "zh-TW".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (IRV__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file falls through to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("IRV")
                .separator("__")
                .try_parsing(true),
        );

        // Platform-provided port (Render, Heroku, ...)
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !SUPPORTED_LANGUAGES.contains(&self.profile.default_language.as_str()) {
            return Err(format!(
                "Default language must be one of {}",
                SUPPORTED_LANGUAGES.join(", ")
            ));
        }
        if self.profile.photo_url.trim().is_empty() {
            return Err("Profile photo url must not be empty".to_string());
        }
        Ok(())
    }
}
