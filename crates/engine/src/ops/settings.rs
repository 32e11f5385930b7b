use sea_orm::{prelude::*, sea_query::OnConflict};

use crate::{
    EngineError, MoneyCents, ResultEngine, Settings, settings,
    settings::SETTINGS_ID,
    util::normalize_required_text,
    views::SETTINGS_VIEWS,
};

use super::Engine;

impl Engine {
    /// The settings row, created with defaults on first access.
    pub async fn settings(&self) -> ResultEngine<Settings> {
        if let Some(model) = settings::Entity::find_by_id(SETTINGS_ID)
            .one(&self.database)
            .await?
        {
            return Settings::try_from(model);
        }

        let defaults = Settings::default();
        settings::Entity::insert(settings::ActiveModel::from(&defaults))
            .on_conflict(
                OnConflict::column(settings::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.database)
            .await?;
        tracing::debug!("default settings created");

        let model = settings::Entity::find_by_id(SETTINGS_ID)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("settings".to_string()))?;
        Settings::try_from(model)
    }

    /// Overwrite every settings field.
    pub async fn update_settings(&self, input: Settings) -> ResultEngine<Settings> {
        if input.monthly_budget.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "monthly budget must not be negative, got {}",
                input.monthly_budget
            )));
        }
        if input.monthly_budget > MoneyCents::MAX_AMOUNT {
            return Err(EngineError::InvalidAmount(format!(
                "monthly budget must not exceed {}, got {}",
                MoneyCents::MAX_AMOUNT,
                input.monthly_budget
            )));
        }
        let settings = Settings {
            username: normalize_required_text(&input.username, "username")?,
            language: normalize_required_text(&input.language, "language")?,
            currency: normalize_required_text(&input.currency, "currency")?,
            ..input
        };

        settings::Entity::insert(settings::ActiveModel::from(&settings))
            .on_conflict(
                OnConflict::column(settings::Column::Id)
                    .update_columns([
                        settings::Column::Username,
                        settings::Column::Language,
                        settings::Column::Theme,
                        settings::Column::Currency,
                        settings::Column::MonthlyBudgetMinor,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.database)
            .await?;

        self.views.invalidate(SETTINGS_VIEWS);
        tracing::info!(
            language = %settings.language,
            theme = settings.theme.as_str(),
            currency = %settings.currency,
            "settings updated"
        );
        Ok(settings)
    }
}
