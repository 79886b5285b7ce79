use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use imfridge_calendar::RenderOptions;
use serde::Deserialize;
use std::env;
use time::Weekday;

/// Longest reminder window accepted from settings
pub const MAX_REMINDER_WINDOW_DAYS: u32 = 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub clock: ClockConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    /// Days before the terminal date at which list badges turn to "soon"
    pub reminder_window_days: u32,
    /// First column of the week view (`Monday` ... `Sunday`)
    pub week_start: Weekday,
    pub row_height_px: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClockConfig {
    /// IANA name used to turn "now" into today's date
    pub timezone: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (IMFRIDGE__CALENDAR__WEEK_START, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("calendar.reminder_window_days", 3)?
            .set_default("calendar.week_start", "Monday")?
            .set_default("calendar.row_height_px", 28)?
            .set_default("clock.timezone", "UTC")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("IMFRIDGE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.calendar.reminder_window_days > MAX_REMINDER_WINDOW_DAYS {
            return Err(format!(
                "Reminder window must be at most {MAX_REMINDER_WINDOW_DAYS} days"
            ));
        }
        if self.calendar.row_height_px == 0 {
            return Err("Calendar row height must be greater than 0".to_string());
        }
        if self.clock.timezone.trim().is_empty() {
            return Err("Clock timezone must not be empty".to_string());
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            reminder_window_days: self.calendar.reminder_window_days,
            week_start: self.calendar.week_start,
            row_height_px: self.calendar.row_height_px,
        }
    }
}
