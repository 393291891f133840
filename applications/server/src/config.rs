/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tasklist.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub variant: ApiVariant,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// JSON document holding tasks and users
    #[serde(default = "default_document_path")]
    pub path: PathBuf,
}

/// Which flavor of the HTTP surface to expose
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ApiVariant {
    /// Generic REST router: bare resources, 201 on create, `{}` on delete
    #[default]
    Generic,
    /// Hand-written handlers: `{ "ok": true, "task": ... }` envelopes
    Explicit,
}

impl ApiVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVariant::Generic => "generic",
            ApiVariant::Explicit => "explicit",
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, lowest priority first: built-in defaults, the config file
    /// (`path` or `tasklist.toml` when present), `TASKLIST_*` variables, and
    /// finally the bare `HOST` / `PORT` variables set by hosting platforms.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with TASKLIST_)
        settings = settings.add_source(
            config::Environment::with_prefix("TASKLIST")
                .separator("_")
                .try_parsing(true),
        );

        settings = settings
            .set_override_option("server.host", std::env::var("HOST").ok())
            .map_err(|e| ServerError::Config(e.to_string()))?
            .set_override_option("server.port", std::env::var("PORT").ok())
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Self::build(settings)
    }

    /// Parse configuration from TOML text, without consulting the environment
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml));
        Self::build(settings)
    }

    fn build(settings: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set PORT or TASKLIST_SERVER_PORT)".to_string(),
            ));
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(ServerError::Config(
                "Document path is required (set TASKLIST_STORAGE_PATH)".to_string(),
            ));
        }

        Ok(())
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        variant: ApiVariant::default(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        path: default_document_path(),
    }
}

fn default_document_path() -> PathBuf {
    PathBuf::from("db.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}
