use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use config::ConfigError;
use serde::Deserialize;

use crate::{infrastructure::cli::Cli, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Prefix for environment overrides, e.g. `CODEREFINE__SERVER__HOST`
const ENV_PREFIX: &str = "CODEREFINE";
const ENV_SEPARATOR: &str = "__";

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
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

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    #[serde(default)]
    pub isolate_sessions: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            isolate_sessions: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    pub capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
}

impl Config {
    /// Defaults shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load from the user config directory and the process environment
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), None)
    }

    /// Layered load: embedded defaults, then an optional `config.*` file in
    /// `config_dir`, then environment variables.
    ///
    /// `env` replaces the process environment when given.
    pub fn load(config_dir: &Path, env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let defaults = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let capacity = i64::try_from(defaults.sessions.capacity).unwrap_or(i64::MAX);
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .set_default("server.host", defaults.server.host.as_str())?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "export.output_dir",
                defaults.export.output_dir.to_string_lossy().as_ref(),
            )?
            .set_default("export.isolate_sessions", defaults.export.isolate_sessions)?
            .set_default("sessions.capacity", capacity)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let port = match &env {
            Some(vars) => vars.get("PORT").cloned(),
            None => std::env::var("PORT").ok(),
        };
        let port = port.and_then(|value| match value.parse::<u16>() {
            Ok(port) => Some(i64::from(port)),
            Err(_) => {
                log::warn!("Ignoring invalid PORT value {value:?}");
                None
            }
        });

        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(env);
        builder = builder
            .add_source(environment)
            .set_override_option("server.port", port)?;

        builder.build()?.try_deserialize()
    }

    /// Command line flags take precedence over every other source
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(output_dir) = &cli.output_dir {
            self.export.output_dir.clone_from(output_dir);
        }
        if cli.isolate_sessions {
            self.export.isolate_sessions = true;
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
