use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use slot_calendar::{WeekStart, DEFAULT_MAX_WEEK};

/// Defaults for `slotcal`, overridable per invocation by flags.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default)]
    pub past_disabled: bool,
    /// Lock whole months before the reference month and open later ones.
    #[serde(default)]
    pub month_aware_past: bool,
    #[serde(default = "default_max_week")]
    pub max_week: u32,
    /// IANA timezone used to decide what "today" is.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_week() -> u32 {
    DEFAULT_MAX_WEEK
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Settings {
    /// Load settings.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SLOTCAL_WEEK_START, SLOTCAL_TIMEZONE, etc.)
    /// 2. Config file given by `--config`
    /// 3. Defaults
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        builder = builder.add_source(Environment::with_prefix("SLOTCAL").try_parsing(true));

        builder.build()?.try_deserialize()
    }
}
