mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::BookProError;
use crate::i18n::Locale;
use defaults::*;

/// Top-level BookPro configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bookpro: GeneralConfig,
    #[serde(default)]
    pub agency: AgencyConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Locale shown when a session starts.
    #[serde(default)]
    pub default_locale: Locale,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_locale: Locale::default(),
        }
    }
}

/// The agency as it appears in calendar events and page chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyConfig {
    #[serde(default = "default_agency_name")]
    pub name: String,
    /// Street address used as the calendar event location.
    #[serde(default = "default_agency_location")]
    pub location: String,
    #[serde(default = "default_agency_phone")]
    pub phone: String,
    #[serde(default = "default_agency_email")]
    pub email: String,
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            name: default_agency_name(),
            location: default_agency_location(),
            phone: default_agency_phone(),
            email: default_agency_email(),
        }
    }
}

/// Booking workflow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Latency of the simulated submission, in milliseconds.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl BookingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

/// Calendar link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Event creation endpoint; query parameters are appended to it.
    #[serde(default = "default_calendar_base_url")]
    pub base_url: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            base_url: default_calendar_base_url(),
        }
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, BookProError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| BookProError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| BookProError::Config(format!("failed to parse config: {}", e)))?;

    if config.agency.name.trim().is_empty() {
        return Err(BookProError::Config("agency.name must not be empty".into()));
    }

    Ok(config)
}
