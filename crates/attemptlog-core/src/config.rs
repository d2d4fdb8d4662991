//! Logger configuration
//!
//! The logger stamps every line in a fixed reference zone (Pacific Time by
//! default). Three more zones mark day boundaries for callers that need to
//! reason about "which day" an instant falls on: the boundary zone itself
//! (Eastern), plus the earliest (Hawaii) and latest (Guam) zones a calendar
//! day can be observed in.
//!
//! # Example
//!
//! ```
//! use attemptlog_core::config::LoggerConfig;
//!
//! let config = LoggerConfig::from_toml_str(r#"reference_zone = "Europe/London""#).unwrap();
//! assert_eq!(config.reference_zone, chrono_tz::Europe::London);
//! ```

use chrono_tz::Tz;
use serde::Deserialize;

use crate::clock::DayZones;
use crate::errors::ConfigError;

pub const DEFAULT_REFERENCE_ZONE: Tz = chrono_tz::America::Los_Angeles;
pub const DEFAULT_DAY_BOUNDARY_ZONE: Tz = chrono_tz::America::New_York;
pub const DEFAULT_EARLIEST_ZONE: Tz = chrono_tz::Pacific::Honolulu;
pub const DEFAULT_LATEST_ZONE: Tz = chrono_tz::Pacific::Guam;

// Display names accepted alongside IANA identifiers
const ZONE_ALIASES: &[(&str, Tz)] = &[
    ("Pacific Time (US & Canada)", chrono_tz::America::Los_Angeles),
    ("Eastern Time (US & Canada)", chrono_tz::America::New_York),
    ("Central Time (US & Canada)", chrono_tz::America::Chicago),
    ("Mountain Time (US & Canada)", chrono_tz::America::Denver),
    ("Hawaii", chrono_tz::Pacific::Honolulu),
    ("Guam", chrono_tz::Pacific::Guam),
    ("UTC", chrono_tz::UTC),
];

/// Time zones used by the attempt logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Zone every timestamp is rendered in
    pub reference_zone: Tz,
    /// Zone that decides where one day ends and the next begins
    pub day_boundary_zone: Tz,
    /// Zone where a calendar day starts last
    pub earliest_zone: Tz,
    /// Zone where a calendar day starts first
    pub latest_zone: Tz,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            reference_zone: DEFAULT_REFERENCE_ZONE,
            day_boundary_zone: DEFAULT_DAY_BOUNDARY_ZONE,
            earliest_zone: DEFAULT_EARLIEST_ZONE,
            latest_zone: DEFAULT_LATEST_ZONE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLoggerConfig {
    reference_zone: Option<String>,
    day_boundary_zone: Option<String>,
    earliest_zone: Option<String>,
    latest_zone: Option<String>,
}

impl LoggerConfig {
    /// Parse a TOML document; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys and
    /// `ConfigError::UnknownZone` for zone names that do not resolve.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawLoggerConfig = toml::from_str(text).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;

        let defaults = Self::default();
        Ok(Self {
            reference_zone: resolve("reference_zone", raw.reference_zone, defaults.reference_zone)?,
            day_boundary_zone: resolve(
                "day_boundary_zone",
                raw.day_boundary_zone,
                defaults.day_boundary_zone,
            )?,
            earliest_zone: resolve("earliest_zone", raw.earliest_zone, defaults.earliest_zone)?,
            latest_zone: resolve("latest_zone", raw.latest_zone, defaults.latest_zone)?,
        })
    }

    /// Replace the reference zone
    pub fn with_reference_zone(mut self, zone: Tz) -> Self {
        self.reference_zone = zone;
        self
    }

    /// Replace the day-boundary zones
    pub fn with_day_zones(mut self, boundary: Tz, earliest: Tz, latest: Tz) -> Self {
        self.day_boundary_zone = boundary;
        self.earliest_zone = earliest;
        self.latest_zone = latest;
        self
    }

    /// Day-boundary helpers for this configuration
    pub fn day_zones(&self) -> DayZones {
        DayZones::new(self.day_boundary_zone, self.earliest_zone, self.latest_zone)
    }
}

/// Resolve a zone by IANA identifier or display alias
///
/// # Errors
///
/// Returns `ConfigError::UnknownZone` when `name` matches neither.
pub fn parse_zone(key: &str, name: &str) -> Result<Tz, ConfigError> {
    let trimmed = name.trim();
    if let Some((_, zone)) = ZONE_ALIASES.iter().find(|(alias, _)| *alias == trimmed) {
        return Ok(*zone);
    }
    trimmed.parse::<Tz>().map_err(|_| ConfigError::UnknownZone {
        key: key.to_string(),
        name: name.to_string(),
    })
}

fn resolve(key: &str, name: Option<String>, default: Tz) -> Result<Tz, ConfigError> {
    match name {
        Some(name) => parse_zone(key, &name),
        None => Ok(default),
    }
}
