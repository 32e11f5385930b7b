//! Export download and the "clear all data" action.

use api_types::data::{ClearedDataView, ExportView};
use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    ServerError, activities::map_activity, categories::map_category, diary::map_entry,
    server::ServerState, settings::map_settings, transactions::map_transaction,
};

pub async fn export(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let bundle = state.engine.export().await?;
    let filename = format!(
        "lifeboard-export-{}.json",
        bundle
            .exported_at
            .with_timezone(&state.engine.timezone())
            .date_naive()
    );
    let body = ExportView {
        exported_at: bundle.exported_at,
        settings: map_settings(bundle.settings),
        diary_entries: bundle.diary_entries.into_iter().map(map_entry).collect(),
        activities: bundle.activities.into_iter().map(map_activity).collect(),
        transactions: bundle
            .transactions
            .into_iter()
            .map(map_transaction)
            .collect(),
        categories: bundle.categories.into_iter().map(map_category).collect(),
    };
    let disposition = format!("attachment; filename=\"{filename}\"");
    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(body)).into_response())
}

pub async fn clear(State(state): State<ServerState>) -> Result<Json<ClearedDataView>, ServerError> {
    let cleared = state.engine.clear_all_data().await?;
    Ok(Json(ClearedDataView {
        activities: cleared.activities,
        transactions: cleared.transactions,
        diary_entries: cleared.diary_entries,
        categories: cleared.categories,
    }))
}
