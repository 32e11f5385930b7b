use api_types::settings::{SettingsUpdate, SettingsView, Theme};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_settings(settings: engine::Settings) -> SettingsView {
    SettingsView {
        username: settings.username,
        language: settings.language,
        theme: match settings.theme {
            engine::Theme::Light => Theme::Light,
            engine::Theme::Dark => Theme::Dark,
            engine::Theme::System => Theme::System,
        },
        currency: settings.currency,
        monthly_budget_minor: settings.monthly_budget.cents(),
    }
}

pub async fn get(State(state): State<ServerState>) -> Result<Json<SettingsView>, ServerError> {
    Ok(Json(map_settings(state.engine.settings().await?)))
}

pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<SettingsUpdate>,
) -> Result<Json<SettingsView>, ServerError> {
    let settings = engine::Settings {
        username: payload.username,
        language: payload.language,
        theme: match payload.theme {
            Theme::Light => engine::Theme::Light,
            Theme::Dark => engine::Theme::Dark,
            Theme::System => engine::Theme::System,
        },
        currency: payload.currency,
        monthly_budget: payload.monthly_budget.parse()?,
    };
    let settings = state.engine.update_settings(settings).await?;
    Ok(Json(map_settings(settings)))
}
