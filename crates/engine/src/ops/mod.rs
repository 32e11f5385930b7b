use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::{ResultEngine, View, views::ViewVersions};

mod activities;
mod categories;
mod data;
mod diary;
mod reports;
mod settings;
mod transactions;

pub use data::{ClearedData, ExportBundle};

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        let outcome: $crate::ResultEngine<_> = match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        };
        outcome
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    timezone: Tz,
    views: ViewVersions,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Time zone used for "today", "this week" and "this month".
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Current version of a view. It changes after every write the view
    /// depends on.
    pub fn view_version(&self, view: View) -> u64 {
        self.views.version(view)
    }

    /// The current instant in the configured time zone.
    pub fn local_now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}

/// The builder for `Engine`
pub struct EngineBuilder {
    database: DatabaseConnection,
    timezone: Tz,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            database: DatabaseConnection::default(),
            timezone: Tz::UTC,
        }
    }
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Time zone for local day boundaries. Defaults to UTC.
    pub fn timezone(mut self, timezone: Tz) -> EngineBuilder {
        self.timezone = timezone;
        self
    }

    /// Construct `Engine`, seeding the system categories when missing.
    pub async fn build(self) -> ResultEngine<Engine> {
        let engine = Engine {
            database: self.database,
            timezone: self.timezone,
            views: ViewVersions::default(),
        };
        engine.seed_system_categories().await?;
        Ok(engine)
    }
}
