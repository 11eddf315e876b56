use crate::aggregate::MoodMapping;
use std::{path::PathBuf, str::FromStr, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";
const DEFAULT_ASSISTANT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub assistant_url: Option<String>,
    pub assistant_timeout: Duration,
    pub mapping: MoodMapping,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            assistant_url: None,
            assistant_timeout: Duration::from_secs(DEFAULT_ASSISTANT_TIMEOUT_SECS),
            mapping: MoodMapping::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let assistant_url = lookup("ASSISTANT_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            data_path: lookup("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            assistant_url,
            assistant_timeout: Duration::from_secs(parse_or(
                &lookup,
                "ASSISTANT_TIMEOUT_SECS",
                DEFAULT_ASSISTANT_TIMEOUT_SECS,
            )),
            mapping: MoodMapping {
                relaxed_overlap: parse_or(
                    &lookup,
                    "RELAXED_OVERLAP",
                    defaults.mapping.relaxed_overlap,
                ),
            },
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={value:?}");
            default
        }),
        None => default,
    }
}
