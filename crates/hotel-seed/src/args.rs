//! Command-line arguments for the `seed` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, ExistingDataPolicy, SeedConfig};
use crate::generators::DEFAULT_OCCUPANCY_SEED;

/// Populate the hotel database with its floors and rooms.
///
/// Values are layered: built-in defaults, then the config file, then
/// environment variables and flags.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "seed", version)]
pub struct SeedArgs {
    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "HOTEL_SEED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database host
    #[arg(long, env = "HOTEL_DB_HOST")]
    pub host: Option<String>,

    /// Database port
    #[arg(long, env = "HOTEL_DB_PORT")]
    pub port: Option<u16>,

    /// Database name
    #[arg(long, env = "HOTEL_DB_NAME")]
    pub db_name: Option<String>,

    /// Database user
    #[arg(long, env = "HOTEL_DB_USER")]
    pub user: Option<String>,

    /// Database password
    #[arg(long, env = "HOTEL_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// What to do when floors or rooms already exist
    #[arg(long, value_enum, env = "HOTEL_SEED_ON_EXISTING")]
    pub on_existing: Option<ExistingDataPolicy>,

    /// Print the generated floors and rooms without connecting
    #[arg(long)]
    pub dry_run: bool,

    /// After seeding, mark a random 1..=N of the rooms occupied
    #[arg(long)]
    pub occupy_random: bool,

    /// Random seed for --occupy-random (same seed = same rooms)
    #[arg(long, env = "HOTEL_SEED_OCCUPANCY_SEED")]
    pub occupancy_seed: Option<u64>,

    /// Print every room with its floor and status when done
    #[arg(long)]
    pub list_rooms: bool,
}

impl SeedArgs {
    /// Builds the effective config for this run.
    pub fn resolve(&self) -> Result<SeedConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => SeedConfig::from_file(path)?,
            None => SeedConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Seed for random occupancy, falling back to a fixed default.
    pub fn occupancy_seed(&self) -> u64 {
        self.occupancy_seed.unwrap_or(DEFAULT_OCCUPANCY_SEED)
    }

    /// Overlays every value given on the command line or in the environment.
    pub fn apply(&self, mut config: SeedConfig) -> SeedConfig {
        let db = &mut config.database;
        if let Some(host) = &self.host {
            db.host = host.clone();
        }
        if let Some(port) = self.port {
            db.port = port;
        }
        if let Some(db_name) = &self.db_name {
            db.db_name = db_name.clone();
        }
        if let Some(user) = &self.user {
            db.user = user.clone();
        }
        if let Some(password) = &self.password {
            db.password = password.clone();
        }
        if let Some(policy) = self.on_existing {
            config.on_existing = policy;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_file_values() {
        let file = SeedConfig::from_toml_str(
            r#"
            on_existing = "skip"

            [database]
            host = "db.internal"
            port = 5433
            user = "seeder"
            "#,
        )
        .unwrap();

        let args = SeedArgs {
            host: Some("10.0.0.5".to_string()),
            on_existing: Some(ExistingDataPolicy::Fail),
            ..SeedArgs::default()
        };
        let config = args.apply(file);

        assert_eq!(config.database.host, "10.0.0.5");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.database.user, "seeder");
        assert_eq!(config.database.db_name, "hotel");
        assert_eq!(config.on_existing, ExistingDataPolicy::Fail);
    }

    // Only flag values are asserted: HOTEL_* variables in the test
    // environment may fill the rest.
    #[test]
    fn test_parse_database_flags() {
        let args = SeedArgs::try_parse_from([
            "seed",
            "--host",
            "db",
            "--port",
            "6543",
            "--db-name",
            "hotel_test",
            "--user",
            "admin",
            "--password",
            "pw",
            "--on-existing",
            "replace",
        ])
        .unwrap();

        assert_eq!(args.host.as_deref(), Some("db"));
        assert_eq!(args.port, Some(6543));
        assert_eq!(args.db_name.as_deref(), Some("hotel_test"));
        assert_eq!(args.user.as_deref(), Some("admin"));
        assert_eq!(args.password.as_deref(), Some("pw"));
        assert_eq!(args.on_existing, Some(ExistingDataPolicy::Replace));

        let db = args.apply(SeedConfig::default()).database;
        assert_eq!(db.target(), "admin@db:6543/hotel_test");
        assert_eq!(db.password, "pw");
    }

    #[test]
    fn test_parse_action_flags() {
        let args = SeedArgs::try_parse_from([
            "seed",
            "--dry-run",
            "--occupy-random",
            "--occupancy-seed",
            "7",
            "--list-rooms",
        ])
        .unwrap();

        assert!(args.dry_run);
        assert!(args.occupy_random);
        assert!(args.list_rooms);
        assert_eq!(args.occupancy_seed(), 7);
    }

    #[test]
    fn test_no_args_keeps_defaults() {
        let args = SeedArgs::default();
        let config = args.resolve().unwrap();

        assert_eq!(config.database.target(), "postgres@localhost:5432/hotel");
        assert_eq!(config.on_existing, ExistingDataPolicy::Append);
        assert!(!args.dry_run);
        assert!(!args.occupy_random);
        assert_eq!(args.occupancy_seed(), DEFAULT_OCCUPANCY_SEED);
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(SeedArgs::try_parse_from(["seed", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        assert!(SeedArgs::try_parse_from(["seed", "--on-existing", "upsert"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = SeedArgs {
            config: Some(PathBuf::from("/nonexistent/hotel-seed.toml")),
            ..SeedArgs::default()
        };
        assert!(matches!(args.resolve(), Err(ConfigError::Read { .. })));
    }
}
