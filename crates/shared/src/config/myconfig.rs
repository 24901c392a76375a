use anyhow::{Context, Result, anyhow};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Postgres => write!(f, "postgres"),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub min_conn: u32,
    pub max_conn: u32,
    pub run_migrations: bool,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("min_conn", &self.min_conn)
            .field("max_conn", &self.max_conn)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageBackend,
    pub database: Option<DatabaseConfig>,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => 8080,
        };

        let storage = match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("memory") => StorageBackend::Memory,
            Some("postgres") => StorageBackend::Postgres,
            Some(other) => {
                return Err(anyhow!(
                    "STORAGE_BACKEND must be 'memory' or 'postgres', got '{}'",
                    other
                ));
            }
        };

        let database = match storage {
            StorageBackend::Memory => None,
            StorageBackend::Postgres => Some(Self::database_config(&lookup)?),
        };

        let is_dev = parse_flag(lookup("DEV_MODE"));
        let enable_file_log = parse_flag(lookup("ENABLE_FILE_LOG"));

        Ok(Self {
            port,
            storage,
            database,
            is_dev,
            enable_file_log,
        })
    }

    fn database_config<F>(lookup: &F) -> Result<DatabaseConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let min_conn = match lookup("DB_MIN_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MIN_CONN must be a valid u32 integer")?,
            None => 1,
        };

        let max_conn = match lookup("DB_MAX_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => 5,
        };

        if min_conn > max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({}) must not exceed DB_MAX_CONN ({})",
                min_conn,
                max_conn
            ));
        }

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        Ok(DatabaseConfig {
            url,
            min_conn,
            max_conn,
            run_migrations,
        })
    }
}

fn parse_flag(value: Option<String>) -> bool {
    value.map(|v| v == "true" || v == "1").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_in_memory_storage_on_port_8080() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.database.is_none());
        assert!(!config.is_dev);
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = Config::from_lookup(lookup_from(&[("STORAGE_BACKEND", "postgres")]))
            .unwrap_err();

        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn postgres_reads_pool_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/inventory"),
            ("DB_MIN_CONN", "2"),
            ("DB_MAX_CONN", "10"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        let db = config.database.unwrap();
        assert_eq!(db.min_conn, 2);
        assert_eq!(db.max_conn, 10);
        assert!(!db.run_migrations);
    }

    #[test]
    fn rejects_unknown_backend_and_bad_port() {
        assert!(Config::from_lookup(lookup_from(&[("STORAGE_BACKEND", "mongo")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn rejects_min_above_max_connections() {
        let result = Config::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/inventory"),
            ("DB_MIN_CONN", "8"),
            ("DB_MAX_CONN", "4"),
        ]));

        assert!(result.is_err());
    }
}
