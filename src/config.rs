use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

use crate::services::landmark_service::{
    normalize_language, parse_radius, ResolverDefaults, DEFAULT_LANGUAGE, DEFAULT_RADIUS_KM,
};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATABASE: &str = "TropiGo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Mongo,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreKind::Mongo),
            "memory" => Ok(StoreKind::Memory),
            other => Err(format!("unknown store '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub mongo_uri: Option<String>,
    pub database: String,
    pub environment: String,
    pub resolver: ResolverDefaults,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: try_load("PORT", PORT),
            store: try_load("LANDMARK_STORE", StoreKind::Mongo),
            mongo_uri: env::var("MONGODB_URI").ok(),
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| DATABASE.to_string()),
            environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
            resolver: ResolverDefaults {
                language: normalize_language(
                    env::var("DEFAULT_LANGUAGE").ok().as_deref(),
                    DEFAULT_LANGUAGE,
                ),
                radius_km: parse_radius(
                    env::var("DEFAULT_RADIUS_KM").ok().as_deref(),
                    DEFAULT_RADIUS_KM,
                ),
            },
        }
    }
}

/// Reads and parses `key`, keeping `default` when it is unset or invalid.
fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {} value '{}': {}, using default {:?}", key, raw, e, default);
            default
        }),
        Err(_) => {
            info!("{} not set, using default: {:?}", key, default);
            default
        }
    }
}
