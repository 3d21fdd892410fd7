use bijux_contacts_store::DEFAULT_DATA_PATH;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const ENV_BIND: &str = "CONTACTS_BIND";
pub const ENV_DATA_PATH: &str = "CONTACTS_DATA_PATH";
pub const ENV_MAX_BODY_BYTES: &str = "CONTACTS_MAX_BODY_BYTES";
pub const ENV_LOG_JSON: &str = "CONTACTS_LOG_JSON";
pub const ENV_SHUTDOWN_DRAIN_MS: &str = "CONTACTS_SHUTDOWN_DRAIN_MS";

#[derive(Debug)]
pub struct ConfigError(pub String);

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub max_body_bytes: usize,
    pub log_json: bool,
    pub shutdown_drain: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            max_body_bytes: 16 * 1024,
            log_json: false,
            shutdown_drain: Duration::ZERO,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Unparseable
    /// numbers and flags fall back to their defaults; an unparseable bind
    /// address is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let bind_addr = match non_empty(&lookup, ENV_BIND) {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError(format!("invalid {ENV_BIND} {raw}: {e}")))?,
            None => defaults.bind_addr,
        };
        Ok(Self {
            bind_addr,
            data_path: non_empty(&lookup, ENV_DATA_PATH)
                .map_or(defaults.data_path, PathBuf::from),
            max_body_bytes: parsed(&lookup, ENV_MAX_BODY_BYTES)
                .unwrap_or(defaults.max_body_bytes),
            log_json: flag(&lookup, ENV_LOG_JSON).unwrap_or(defaults.log_json),
            shutdown_drain: parsed::<u64, _>(&lookup, ENV_SHUTDOWN_DRAIN_MS)
                .map_or(defaults.shutdown_drain, Duration::from_millis),
        })
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name).and_then(|v| v.parse::<T>().ok())
}

fn flag<F>(lookup: &F, name: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name).and_then(|v| match v.as_str() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(cfg.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(cfg.data_path, PathBuf::from("data/contacts.json"));
        assert_eq!(cfg.max_body_bytes, 16 * 1024);
        assert!(!cfg.log_json);
        assert_eq!(cfg.shutdown_drain, Duration::ZERO);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            (ENV_BIND, "127.0.0.1:8081"),
            (ENV_DATA_PATH, "/tmp/book.json"),
            (ENV_MAX_BODY_BYTES, "1024"),
            (ENV_LOG_JSON, "yes"),
            (ENV_SHUTDOWN_DRAIN_MS, "250"),
        ]))
        .expect("config");
        assert_eq!(cfg.bind_addr, "127.0.0.1:8081".parse().expect("addr"));
        assert_eq!(cfg.data_path, PathBuf::from("/tmp/book.json"));
        assert_eq!(cfg.max_body_bytes, 1024);
        assert!(cfg.log_json);
        assert_eq!(cfg.shutdown_drain, Duration::from_millis(250));
    }

    #[test]
    fn garbage_numbers_fall_back_but_bad_bind_fails() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            (ENV_MAX_BODY_BYTES, "lots"),
            (ENV_LOG_JSON, "maybe"),
        ]))
        .expect("config");
        assert_eq!(cfg.max_body_bytes, 16 * 1024);
        assert!(!cfg.log_json);

        let err = ServerConfig::from_lookup(lookup_from(&[(ENV_BIND, "localhost")]))
            .expect_err("bind must be ip:port");
        assert!(err.0.contains(ENV_BIND));
    }
}
