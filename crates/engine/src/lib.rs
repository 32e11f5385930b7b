pub use activities::{Activity, Rating, StartedActivity, StopOutcome, duration_minutes};
pub use categories::{
    Category, CategoryKind, FALLBACK_CATEGORY_COLOR, FALLBACK_CATEGORY_NAME, NewCategory,
};
pub use diary::{DiaryEntry, Mood};
pub use error::EngineError;
pub use money::MoneyCents;
pub use ops::{ClearedData, Engine, EngineBuilder, ExportBundle};
pub use settings::{Settings, Theme};
pub use transactions::{NewTransaction, Transaction, TransactionKind};
pub use views::View;

mod activities;
mod categories;
mod diary;
mod error;
mod money;
mod ops;
pub mod reports;
mod settings;
mod transactions;
mod util;
mod views;

type ResultEngine<T> = Result<T, EngineError>;
