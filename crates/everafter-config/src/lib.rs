//! Configuration for the everafter wedding site.
//!
//! TOML file + `EVERAFTER_`-prefixed environment variables, merged over
//! shipped defaults, then translated to `everafter_core::WeddingConfig`.
//! The translation is the single place malformed wedding dates, unknown
//! timezones, and bad sink URLs are rejected — a fatal configuration
//! error at construction, never later at tick or submit time.

use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, TimeDelta};
use chrono_tz::Tz;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use everafter_core::countdown::resolve_civil;
use everafter_core::{Contact, Venue, WeddingConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration. Defaults mirror the shipped site.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Couple display name, e.g. "Annop & Sornsawan".
    #[serde(default = "default_couple")]
    pub couple: String,

    #[serde(default)]
    pub wedding: Wedding,

    #[serde(default)]
    pub venue: VenueConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub sink: Sink,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            couple: default_couple(),
            wedding: Wedding::default(),
            venue: VenueConfig::default(),
            contact: ContactConfig::default(),
            sink: Sink::default(),
        }
    }
}

fn default_couple() -> String {
    "Annop & Sornsawan".into()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Wedding {
    /// Civil date-time string, interpreted in `timezone`.
    #[serde(default = "default_date")]
    pub date: String,

    /// IANA timezone identifier.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Celebration length, used for the calendar export range.
    #[serde(default = "default_duration_hours")]
    pub duration_hours: i64,
}

impl Default for Wedding {
    fn default() -> Self {
        Self {
            date: default_date(),
            timezone: default_timezone(),
            duration_hours: default_duration_hours(),
        }
    }
}

fn default_date() -> String {
    "2025-11-22T18:00:00".into()
}
fn default_timezone() -> String {
    "Asia/Bangkok".into()
}
fn default_duration_hours() -> i64 {
    4
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VenueConfig {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            name: "The Park Nine Hotel Suvarnabhumi".into(),
            address: "599,599/1, Lat Krabang, Bangkok 10520".into(),
            city: "Bangkok, Thailand".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub line_id: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Sink {
    /// Submission endpoint URL (spreadsheet web-app).
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for Sink {
    fn default() -> Self {
        Self {
            url: "https://script.google.com/macros/s/REPLACE_ME/exec".into(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "everafter", "everafter").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("everafter");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from an explicit file path + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("EVERAFTER_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to runtime config ───────────────────────────────────

/// Build a [`WeddingConfig`] from a loaded [`Config`].
///
/// All fallible interpretation happens here: date parsing, timezone
/// resolution, URL validation. Downstream construction (countdown
/// engine, sink client) is infallible with the values this returns.
pub fn to_wedding_config(cfg: &Config) -> Result<WeddingConfig, ConfigError> {
    let civil = NaiveDateTime::parse_from_str(&cfg.wedding.date, "%Y-%m-%dT%H:%M:%S").map_err(
        |e| ConfigError::Validation {
            field: "wedding.date".into(),
            reason: format!("expected YYYY-MM-DDTHH:MM:SS, got '{}': {e}", cfg.wedding.date),
        },
    )?;

    let tz: Tz = cfg
        .wedding
        .timezone
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "wedding.timezone".into(),
            reason: format!("unknown timezone '{}'", cfg.wedding.timezone),
        })?;

    let start = resolve_civil(civil, tz).map_err(|e| ConfigError::Validation {
        field: "wedding.date".into(),
        reason: e.to_string(),
    })?;

    let sink_url: Url = cfg.sink.url.parse().map_err(|_| ConfigError::Validation {
        field: "sink.url".into(),
        reason: format!("invalid URL: {}", cfg.sink.url),
    })?;

    Ok(WeddingConfig {
        couple: cfg.couple.clone(),
        start,
        duration: TimeDelta::hours(cfg.wedding.duration_hours),
        venue: Venue {
            name: cfg.venue.name.clone(),
            address: cfg.venue.address.clone(),
            city: cfg.venue.city.clone(),
        },
        contact: Contact {
            phone: cfg.contact.phone.clone(),
            line_id: cfg.contact.line_id.clone(),
        },
        sink_url,
        timeout: std::time::Duration::from_secs(cfg.sink.timeout_secs),
    })
}
