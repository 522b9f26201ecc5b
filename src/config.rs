// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Hosted project used when nothing overrides it. Publishable key: access is
/// governed by row-level policies on the backend.
pub const DEFAULT_SUPABASE_URL: &str = "https://fkssmmdopnrstqytapae.supabase.co";
pub const DEFAULT_SUPABASE_KEY: &str = "sb_publishable_v4JsOeAw22tbYdgRoRUpNg_gRcLNyWf";
pub const DEFAULT_TABLE: &str = "byproducts";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("SUPABASE_KEY must not be empty when the supabase backend is selected")]
    MissingSupabaseKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendConfig {
    Supabase {
        url: String,
        key: String,
        table: String,
        timeout: Duration,
    },
    Sqlite {
        path: PathBuf,
        schema_path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub backend: BackendConfig,
    /// Minimum time the "Calculating Haulage..." state stays up after a submit.
    pub submit_hold: Duration,
    pub contract_delay: Duration,
    pub settings_delay: Duration,
}

impl AppConfig {
    /// Read the process environment (after `.env`, if any, has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr =
            parse_or(&get, "RESOURCE_HUB_BIND", "127.0.0.1:3000".parse().ok())?;
        let max_workers: usize = parse_or(&get, "RESOURCE_HUB_WORKERS", Some(8))?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                key: "RESOURCE_HUB_WORKERS",
                value: "0".into(),
                reason: "at least one worker is required".into(),
            });
        }

        let backend = match get("RESOURCE_HUB_BACKEND").as_deref().map(str::trim) {
            None | Some("supabase") => {
                let key = lookup("SUPABASE_KEY").unwrap_or_else(|| DEFAULT_SUPABASE_KEY.into());
                if key.trim().is_empty() {
                    return Err(ConfigError::MissingSupabaseKey);
                }
                BackendConfig::Supabase {
                    url: get("SUPABASE_URL")
                        .unwrap_or_else(|| DEFAULT_SUPABASE_URL.into())
                        .trim_end_matches('/')
                        .to_string(),
                    key,
                    table: get("RESOURCE_HUB_TABLE").unwrap_or_else(|| DEFAULT_TABLE.into()),
                    timeout: Duration::from_secs(parse_or(
                        &get,
                        "RESOURCE_HUB_HTTP_TIMEOUT_SECS",
                        Some(10),
                    )?),
                }
            }
            Some("sqlite") => BackendConfig::Sqlite {
                path: get("RESOURCE_HUB_SQLITE_PATH")
                    .unwrap_or_else(|| "resource_hub.sqlite3".into())
                    .into(),
                schema_path: get("RESOURCE_HUB_SCHEMA_PATH")
                    .unwrap_or_else(|| "sql/schema.sql".into())
                    .into(),
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "RESOURCE_HUB_BACKEND",
                    value: other.to_string(),
                    reason: "expected `supabase` or `sqlite`".into(),
                })
            }
        };

        Ok(Self {
            bind_addr,
            max_workers,
            backend,
            submit_hold: millis(&get, "RESOURCE_HUB_SUBMIT_HOLD_MS", 1500)?,
            contract_delay: millis(&get, "RESOURCE_HUB_CONTRACT_DELAY_MS", 2000)?,
            settings_delay: millis(&get, "RESOURCE_HUB_SETTINGS_DELAY_MS", 1500)?,
        })
    }
}

fn parse_or<G, T>(get: &G, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => default.ok_or_else(|| ConfigError::Invalid {
            key,
            value: String::new(),
            reason: "no default available".into(),
        }),
    }
}

fn millis<G>(get: &G, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    parse_or(get, key, Some(default)).map(Duration::from_millis)
}
