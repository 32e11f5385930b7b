//! The single configuration row of the application.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, ResultEngine};

/// Fixed primary key of the settings row.
pub(crate) const SETTINGS_ID: i32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(EngineError::InvalidName(format!("invalid theme: {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub username: String,
    pub language: String,
    pub theme: Theme,
    /// Display currency code (e.g. `DZD`).
    pub currency: String,
    pub monthly_budget: MoneyCents,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: "المستخدم".to_string(),
            language: "ar".to_string(),
            theme: Theme::System,
            currency: "DZD".to_string(),
            monthly_budget: MoneyCents::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub username: String,
    pub language: String,
    pub theme: String,
    pub currency: String,
    pub monthly_budget_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Settings> for ActiveModel {
    fn from(settings: &Settings) -> Self {
        Self {
            id: ActiveValue::Set(SETTINGS_ID),
            username: ActiveValue::Set(settings.username.clone()),
            language: ActiveValue::Set(settings.language.clone()),
            theme: ActiveValue::Set(settings.theme.as_str().to_string()),
            currency: ActiveValue::Set(settings.currency.clone()),
            monthly_budget_minor: ActiveValue::Set(settings.monthly_budget.cents()),
        }
    }
}

impl TryFrom<Model> for Settings {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        Ok(Self {
            theme: Theme::try_from(model.theme.as_str())?,
            username: model.username,
            language: model.language,
            currency: model.currency,
            monthly_budget: MoneyCents::new(model.monthly_budget_minor),
        })
    }
}
