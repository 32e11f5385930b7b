//! Handles settings for the application.
//!
//! Values are read from an optional `settings.toml` in the working directory
//! and from `LIFEBOARD__*` environment variables, e.g.
//! `LIFEBOARD__SERVER__PORT=8080` or `LIFEBOARD__APP__TIMEZONE=Africa/Algiers`.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    /// Path of the SQLite file, created when missing.
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct App {
    /// Log level for every crate of the workspace.
    pub level: String,
    /// IANA time zone used for "today", "this week" and "this month".
    pub timezone: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub database: Database,
    pub bind: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("app.timezone", "UTC")?
            .set_default("server.database", "memory")?
            .set_default("server.port", 3000)?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("LIFEBOARD").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
