use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::cli::CliConfig;
use super::constants::{
    CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT, POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS,
    POSTGRES_DEFAULT_IDLE_TIMEOUT_SECS, POSTGRES_DEFAULT_MAX_CONNECTIONS,
    POSTGRES_DEFAULT_MAX_LIFETIME_SECS, POSTGRES_DEFAULT_MIN_CONNECTIONS,
    POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS,
};

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Server configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Database configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DatabaseFileConfig {
    /// PostgreSQL connection URL (or use STOREFRONT_DATABASE_URL env var)
    pub url: Option<String>,
    /// Maximum number of connections in the pool (default: 20)
    pub max_connections: Option<u32>,
    /// Minimum number of connections to keep warm (default: 2)
    pub min_connections: Option<u32>,
    /// Connection acquire timeout in seconds (default: 30)
    pub acquire_timeout_secs: Option<u64>,
    /// Idle connection timeout in seconds (default: 600)
    pub idle_timeout_secs: Option<u64>,
    /// Max connection lifetime in seconds (default: 1800)
    pub max_lifetime_secs: Option<u64>,
    /// Statement timeout in seconds, 0 to disable (default: 60)
    pub statement_timeout_secs: Option<u64>,
}

/// Top-level JSON config file structure
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    pub database: Option<DatabaseFileConfig>,
}

// =============================================================================
// Resolved Config
// =============================================================================

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Resolved PostgreSQL configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub statement_timeout_secs: u64,
}

/// Resolved application configuration
///
/// Precedence: CLI > environment > config file > defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: PostgresConfig,
}

/// Whether the host binds to all interfaces
pub fn is_all_interfaces(host: &str) -> bool {
    host == "0.0.0.0" || host == "::"
}

impl AppConfig {
    /// Load configuration, merging the JSON config file with CLI/env overrides
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = Self::load_file(cli.config.as_deref())?;

        let server_file = file.server.unwrap_or_default();
        let database_file = file.database.unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or(server_file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = cli.port.or(server_file.port).unwrap_or(DEFAULT_PORT);

        let url = cli
            .database_url
            .clone()
            .or(database_file.url)
            .context("PostgreSQL URL is required (config file database.url, STOREFRONT_DATABASE_URL, or --database-url)")?;

        Ok(Self {
            server: ServerConfig { host, port },
            database: PostgresConfig {
                url,
                max_connections: database_file
                    .max_connections
                    .unwrap_or(POSTGRES_DEFAULT_MAX_CONNECTIONS),
                min_connections: database_file
                    .min_connections
                    .unwrap_or(POSTGRES_DEFAULT_MIN_CONNECTIONS),
                acquire_timeout_secs: database_file
                    .acquire_timeout_secs
                    .unwrap_or(POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS),
                idle_timeout_secs: database_file
                    .idle_timeout_secs
                    .unwrap_or(POSTGRES_DEFAULT_IDLE_TIMEOUT_SECS),
                max_lifetime_secs: database_file
                    .max_lifetime_secs
                    .unwrap_or(POSTGRES_DEFAULT_MAX_LIFETIME_SECS),
                statement_timeout_secs: database_file
                    .statement_timeout_secs
                    .unwrap_or(POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS),
            },
        })
    }

    /// Read the config file if present
    ///
    /// An explicit path that does not exist is an error; the default path is
    /// optional.
    fn load_file(explicit: Option<&Path>) -> Result<FileConfig> {
        let path: PathBuf = match explicit {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                p.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.exists() {
                    return Ok(FileConfig::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: FileConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cli_with_url() -> CliConfig {
        CliConfig {
            database_url: Some("postgres://localhost/storefront".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_without_config_file() {
        let config = AppConfig::load(&cli_with_url()).unwrap();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(
            config.database.max_connections,
            POSTGRES_DEFAULT_MAX_CONNECTIONS
        );
        assert_eq!(
            config.database.statement_timeout_secs,
            POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS
        );
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::load(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("PostgreSQL URL"));
    }

    #[test]
    fn cli_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"{{"server": {{"host": "0.0.0.0", "port": 9000}},
                "database": {{"url": "postgres://file/db", "max_connections": 5}}}}"#
        )
        .unwrap();

        let cli = CliConfig {
            port: Some(4000),
            config: Some(file.path().to_path_buf()),
            database_url: Some("postgres://cli/db".to_string()),
            ..Default::default()
        };

        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database.url, "postgres://cli/db");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn all_interfaces_detection() {
        assert!(is_all_interfaces("0.0.0.0"));
        assert!(is_all_interfaces("::"));
        assert!(!is_all_interfaces("127.0.0.1"));
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/storefront.json")),
            database_url: Some("postgres://localhost/db".to_string()),
            ..Default::default()
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
