//! Configuration types for seeding.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// What to do when the `Floor` or `Room` table already holds rows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExistingDataPolicy {
    /// Insert anyway, duplicating every floor and room.
    #[default]
    Append,
    /// Leave the database untouched.
    Skip,
    /// Abort with an error before writing anything.
    Fail,
    /// Delete all rooms and floors, then seed.
    Replace,
}

impl ExistingDataPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExistingDataPolicy::Append => "append",
            ExistingDataPolicy::Skip => "skip",
            ExistingDataPolicy::Fail => "fail",
            ExistingDataPolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for ExistingDataPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection parameters for the hotel database.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    #[serde(alias = "dbName")]
    pub db_name: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            db_name: "hotel".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
        }
    }
}

// Never print the password.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db_name", &self.db_name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DatabaseConfig {
    /// Returns `user@host:port/db_name`, safe for logs.
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.db_name
        )
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.db_name)
            .username(&self.user)
            .password(&self.password)
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Behavior when the tables are not empty.
    pub on_existing: ExistingDataPolicy,

    pub database: DatabaseConfig,
}

impl SeedConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Renders the effective config as TOML, without the password.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
