use std::env;

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; unparsable optional values fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let db_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(10);
        Ok(Self {
            port,
            database_url,
            host,
            db_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn database_url_is_required() {
        let err = config(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = config(&[("DATABASE_URL", "postgres://localhost/products")]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.db_max_connections, 10);
    }

    #[test]
    fn overrides_and_bad_values() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://db/products"),
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "not-a-port"),
            ("DATABASE_MAX_CONNECTIONS", "25"),
        ])
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.db_max_connections, 25);
    }
}
