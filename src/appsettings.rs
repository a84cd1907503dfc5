use anyhow::anyhow;
use chrono::TimeDelta;
use chrono_tz::Tz;
use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use serde::Deserialize;

use crate::{
    alerts::{AlertWindow, window::DEFAULT_ALERT_WINDOW_DAYS},
    calendar::{CalendarLinkBuilder, GOOGLE_CALENDAR_TEMPLATE_URL},
};

#[derive(Deserialize, Debug)]
pub struct AlertSettings {
    pub window_days: u32,
}

impl AlertSettings {
    pub fn window(&self) -> AlertWindow {
        AlertWindow::days(self.window_days)
    }
}

#[derive(Deserialize, Debug)]
pub struct CalendarSettings {
    pub base_url: String,
    pub timezone: String,
    pub default_duration_minutes: u32,
}

impl CalendarSettings {
    pub fn link_builder(&self) -> anyhow::Result<CalendarLinkBuilder> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|e| anyhow!("Invalid timezone {:?}: {e}", self.timezone))?;

        Ok(CalendarLinkBuilder::new(timezone)
            .with_base_url(self.base_url.clone())
            .with_default_duration(TimeDelta::minutes(i64::from(self.default_duration_minutes))))
    }
}

#[derive(Deserialize, Debug)]
pub struct DataSettings {
    pub reminders_path: String,
    pub events_path: String,
    pub owner_id: String,
}

#[derive(Deserialize, Debug)]
pub struct AppSettings {
    pub alerts: AlertSettings,
    pub calendar: CalendarSettings,
    pub data: DataSettings,
}

impl AppSettings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::layered(Self::environment())
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn layered(environment: Environment) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix("PAWPAL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("alerts.window_days", i64::from(DEFAULT_ALERT_WINDOW_DAYS))?
            .set_default("calendar.base_url", GOOGLE_CALENDAR_TEMPLATE_URL)?
            .set_default("calendar.timezone", "UTC")?
            .set_default("calendar.default_duration_minutes", 60)?
            .set_default("data.reminders_path", "data/reminders.json")?
            .set_default("data.events_path", "data/events.json")?
            .set_default("data.owner_id", "")
    }
}
