use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// "development" or "production". Production requires TLS on the
    /// database connection and switches the client to same-origin paths.
    pub environment: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            environment: "development".to_string(),
            worker_threads: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,

    /// Origin the deployed service is reachable at, used by the API client
    /// in production mode. Ignored in development.
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            cors_allowed_origins: vec!["*".to_string()],
            public_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string for the relational store.
    pub url: String,

    /// Maximum database connections (default: 5)
    pub max_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/stayhaven".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::load_first_existing()?;
        config.apply_overrides(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
            std::env::var("STAYHAVEN_ENV").ok(),
        )?;

        Ok(config)
    }

    fn load_first_existing() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    fn config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("stayhaven.toml"),
            PathBuf::from("config.toml"),
        ]
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("stayhaven.toml")
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn create_default_if_missing() -> Result<PathBuf> {
        let path = Self::default_config_path();
        if !path.exists() {
            Self::default().save_to_path(&path)?;
        }
        Ok(path)
    }

    /// Environment takes precedence over the config file, matching the
    /// deployment contract: `DATABASE_URL`, `PORT`, `STAYHAVEN_ENV`.
    fn apply_overrides(
        &mut self,
        database_url: Option<String>,
        port: Option<String>,
        environment: Option<String>,
    ) -> Result<()> {
        if let Some(url) = database_url {
            self.database.url = url;
        }
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {port}"))?;
        }
        if let Some(env) = environment {
            self.general.environment = env;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        match self.general.environment.as_str() {
            "development" | "production" => {}
            other => bail!("Unknown environment '{other}' (expected development or production)"),
        }

        if self.database.min_connections > self.database.max_connections {
            bail!(
                "min_connections ({}) exceeds max_connections ({})",
                self.database.min_connections,
                self.database.max_connections
            );
        }

        Ok(())
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.general.environment == "production"
    }

    /// Connection string with the TLS requirement applied. Production
    /// Postgres connections must be encrypted; an explicit `sslmode` in the
    /// configured URL wins.
    #[must_use]
    pub fn connection_url(&self) -> String {
        let url = &self.database.url;

        if self.is_production() && url.starts_with("postgres") && !url.contains("sslmode=") {
            let separator = if url.contains('?') { '&' } else { '?' };
            return format!("{url}{separator}sslmode=require");
        }

        url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_development() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert!(!config.is_production());
        assert_eq!(config.connection_url(), config.database.url);
    }

    #[test]
    fn production_requires_tls_on_postgres() {
        let mut config = Config::default();
        config.general.environment = "production".to_string();
        assert!(config.connection_url().ends_with("?sslmode=require"));

        config.database.url = "postgres://host/db?application_name=x".to_string();
        assert!(config.connection_url().ends_with("&sslmode=require"));

        config.database.url = "postgres://host/db?sslmode=disable".to_string();
        assert_eq!(config.connection_url(), config.database.url);
    }

    #[test]
    fn env_overrides_win() {
        let mut config = Config::default();
        config
            .apply_overrides(
                Some("postgres://db.internal/haven".to_string()),
                Some("8080".to_string()),
                Some("production".to_string()),
            )
            .unwrap();

        assert_eq!(config.database.url, "postgres://db.internal/haven");
        assert_eq!(config.server.port, 8080);
        assert!(config.is_production());

        let err = config.apply_overrides(None, Some("not-a-port".to_string()), None);
        assert!(err.is_err());
    }

    #[test]
    fn validate_rejects_unknown_environment() {
        let mut config = Config::default();
        config.general.environment = "staging".to_string();
        assert!(config.validate().is_err());
    }
}
