use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::{ArgAction, Parser};
use std::fs;
use thiserror::Error;
use tracing::{info, warn};

/// Default port, matching what the frontend expects
pub const DEFAULT_PORT: u16 = 8000;

/// Default host the server binds to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for the Monopereo server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host or IP address to bind to
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Optional JSON fixture replacing the built-in seed data
    pub data_file: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    /// Optional update for the bind host
    #[serde(default)]
    pub host: Option<String>,
    /// Optional update for the port
    #[serde(default)]
    pub port: Option<u16>,
    /// Optional update for the fixture file
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Optional update for the log format
    #[serde(default)]
    pub json_logs: Option<bool>,
    /// Server URL used by the CLI client; ignored by the server
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Command line arguments for the server
#[derive(Parser, Debug)]
#[clap(name = "monopereo", about = "The Monopereo users and items API")]
pub struct CliArgs {
    /// Host to bind to
    #[clap(long, env = "MONOPEREO_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[clap(long, env = "MONOPEREO_PORT")]
    pub port: Option<u16>,

    /// JSON fixture file to serve instead of the built-in data
    #[clap(long, env = "MONOPEREO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Emit JSON logs (`--json-logs` alone means true)
    #[clap(
        long,
        env = "MONOPEREO_JSON_LOGS",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub json_logs: Option<bool>,

    /// Debug mode
    #[clap(long, env = "MONOPEREO_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            host: update.host.unwrap_or(self.host),
            port: update.port.unwrap_or(self.port),
            data_file: update.data_file.or(self.data_file),
            json_logs: update.json_logs.unwrap_or(self.json_logs),
        }
    }

    /// Returns the `host:port` pair to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Returns the base (default) configuration
pub fn base_config() -> Config {
    Config {
        host: DEFAULT_HOST.to_string(),
        port: DEFAULT_PORT,
        data_file: None,
        json_logs: false,
    }
}

/// Returns the URL the CLI client talks to when nothing else is configured
pub fn default_server_url() -> String {
    format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT)
}

/// Returns the platform configuration directory, if it exists
pub fn config_dir() -> Option<PathBuf> {
    let Some(proj_dirs) = ProjectDirs::from("com", "monopereo", "monopereo") else {
        warn!("Could not determine XDG config directory, skipping config file");
        return None;
    };

    let path = proj_dirs.config_dir().to_path_buf();
    if !path.exists() {
        info!("Config path not found at {:?}, using defaults", path);
        return None;
    }
    Some(path)
}

/// Loads configuration from a TOML file
///
/// A missing path or a missing file yields an empty update.
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, ConfigError> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;

    let update = toml::from_str::<ConfigUpdate>(&content).map_err(|source| ConfigError::Parse {
        path: config_path.clone(),
        source,
    })?;

    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads the config file from the platform config directory
///
/// Runs before logging is initialised, so callers report the error once a
/// subscriber (or stderr) is available and carry on with an empty update.
pub fn load_file_update() -> Result<ConfigUpdate, ConfigError> {
    config_from_file(config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)))
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        host: args.host.clone(),
        port: args.port,
        data_file: args.data_file.clone(),
        json_logs: args.json_logs,
        server_url: None,
    }
}

/// Gets the complete configuration by combining defaults with
/// values from the config file, environment variables, and command line
/// arguments in order of increasing precedence
pub fn get_config(args: &CliArgs, file: ConfigUpdate) -> Config {
    base_config()
        .apply_update(file)
        .apply_update(config_from_args(args))
}

/// Resolves the server URL for the CLI client
///
/// Precedence: CLI flag / env var > config file > default
pub fn resolve_server_url(cli_url: Option<String>, file: ConfigUpdate) -> String {
    cli_url
        .or(file.server_url)
        .unwrap_or_else(default_server_url)
}


#[cfg(test)]
mod prop_tests;
