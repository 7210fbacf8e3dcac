//! Configuration management for the Verse Index service

use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_DATABASE_URL: &str = "sqlite:./verseindex.db";

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: lookup("SERVER_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            },
        }
    }
}
