// src/config.rs
use std::net::IpAddr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

pub const MEMORY_URL: &str = "memory://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres(String),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: StoreBackend,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub stock_retry_attempts: u32,
}

impl Config {
    /// Reads configuration from the process environment (after `.env` has
    /// been loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let backend = if database_url == MEMORY_URL {
            StoreBackend::Memory
        } else {
            StoreBackend::Postgres(database_url)
        };

        let host = match lookup("HOST") {
            Some(h) => h.parse::<IpAddr>().with_context(|| format!("invalid HOST: {h}"))?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        Ok(Self {
            backend,
            host,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            stock_retry_attempts: parse_or(&lookup, "STOCK_RETRY_ATTEMPTS", DEFAULT_RETRY_ATTEMPTS)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let cfg = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/estoque")]))
            .unwrap();
        assert_eq!(
            cfg.backend,
            StoreBackend::Postgres("postgres://localhost/estoque".into())
        );
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host.to_string(), "127.0.0.1");
        assert_eq!(cfg.stock_retry_attempts, 3);
    }

    #[test]
    fn memory_url_selects_memory_backend() {
        let cfg = Config::from_lookup(lookup(&[("DATABASE_URL", "memory://"), ("PORT", "8080")]))
            .unwrap();
        assert_eq!(cfg.backend, StoreBackend::Memory);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "memory://"), ("PORT", "abc")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
