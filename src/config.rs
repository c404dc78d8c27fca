//! Configuration file management
//!
//! Session defaults and extra timezone ids, read from TOML.
//!
//! # Configuration Format
//!
//! ```toml
//! [session]
//! timezone = "Europe/Prague"   # session zone for DATE/TIME/TIMESTAMP ("" = local)
//! charset = "WIN1250"          # session character set
//!
//! [timezones]                  # region zones sent as wire ids
//! 64000 = "Europe/Prague"
//! ```
//!
//! Lookup order: an explicit path, then `$FBWIRE_CONFIG`, then
//! `<config dir>/fbwire/config.toml`. Only the last may be missing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::protocol::decoder::DecodeContext;
use crate::protocol::timezone::TimezoneTable;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "FBWIRE_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid [timezones] entry '{id}': {reason}")]
    InvalidTimezone { id: String, reason: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,

    /// Wire id (as a string key) to IANA zone name.
    pub timezones: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session timezone: IANA name, `±HH:MM`, or empty for the local zone.
    pub timezone: String,

    /// Session character set name.
    pub charset: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timezone: String::new(),
            charset: "UTF8".to_string(),
        }
    }
}

/// `<config dir>/fbwire/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fbwire").join("config.toml"))
}

impl Config {
    /// Load configuration.
    ///
    /// Returns the default configuration when no path is given, the
    /// environment variable is unset, and the default file does not exist.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Self::from_file(Path::new(&path));
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        debug!(path = %path.display(), "Loading config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Built-in timezone table plus the `[timezones]` entries.
    pub fn timezone_table(&self) -> ConfigResult<TimezoneTable> {
        let mut table = TimezoneTable::builtin();
        for (key, name) in &self.timezones {
            let id: u16 = key.trim().parse().map_err(|_| ConfigError::InvalidTimezone {
                id: key.clone(),
                reason: "id must be an integer in 0..=65535".to_string(),
            })?;
            table.insert(id, name).map_err(|e| ConfigError::InvalidTimezone {
                id: key.clone(),
                reason: e.to_string(),
            })?;
        }
        debug!(regions = table.len(), "Built timezone table");
        Ok(table)
    }

    /// Decode context for the configured session.
    pub fn decode_context(&self) -> ConfigResult<DecodeContext> {
        let timezones = Arc::new(self.timezone_table()?);
        Ok(DecodeContext::new(&self.session.timezone, &self.session.charset).with_timezones(timezones))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Zone;
    use chrono_tz::Tz;

    #[test]
    fn test_parse_full() {
        let config = Config::from_toml_str(
            r#"
            [session]
            timezone = "Europe/Prague"
            charset = "WIN1250"

            [timezones]
            64000 = "Europe/Prague"
            64001 = "America/New_York"
            "#,
        )
        .unwrap();

        assert_eq!(config.session.timezone, "Europe/Prague");
        assert_eq!(config.session.charset, "WIN1250");

        let table = config.timezone_table().unwrap();
        assert_eq!(table.resolve(64001), Ok(Zone::Named(Tz::America__New_York)));
        assert_eq!(table.len(), TimezoneTable::builtin().len() + 2);
        assert_eq!(table.resolve(65534), Ok(Zone::Named(Tz::Australia__Darwin)));

        let ctx = config.decode_context().unwrap();
        assert_eq!(ctx.charset_name(), "WIN1250");
        assert_eq!(ctx.session_zone(), Ok(Zone::Named(Tz::Europe__Prague)));
        assert_eq!(ctx.timezones().resolve(64000), Ok(Zone::Named(Tz::Europe__Prague)));
    }

    #[test]
    fn test_empty_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session.charset, "UTF8");
        assert_eq!(config.timezone_table().unwrap(), TimezoneTable::builtin());
    }

    #[test]
    fn test_partial_session() {
        let config = Config::from_toml_str("[session]\ntimezone = \"+02:00\"\n").unwrap();
        assert_eq!(config.session.charset, "UTF8");
        assert_eq!(config.session.timezone, "+02:00");
    }

    #[test]
    fn test_invalid_timezone_entries() {
        let bad_id = Config::from_toml_str("[timezones]\nabc = \"UTC\"\n").unwrap();
        assert!(matches!(bad_id.timezone_table(), Err(ConfigError::InvalidTimezone { .. })));

        let reserved = Config::from_toml_str("[timezones]\n100 = \"UTC\"\n").unwrap();
        assert!(matches!(reserved.timezone_table(), Err(ConfigError::InvalidTimezone { .. })));

        let unknown = Config::from_toml_str("[timezones]\n64000 = \"Atlantis/Capital\"\n").unwrap();
        let err = unknown.decode_context().unwrap_err();
        assert!(err.to_string().contains("64000"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(Config::from_toml_str("[session"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/fbwire.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
