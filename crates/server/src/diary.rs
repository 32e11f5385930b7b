//! Diary endpoints.

use api_types::diary::{DiaryEntryNew, DiaryEntryView, DiaryListResponse, Mood};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use axum_extra::{TypedHeader, headers::IfNoneMatch};
use engine::View;
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views::cached};

pub(crate) fn map_mood(mood: engine::Mood) -> Mood {
    match mood {
        engine::Mood::Happy => Mood::Happy,
        engine::Mood::Neutral => Mood::Neutral,
        engine::Mood::Sad => Mood::Sad,
        engine::Mood::Productive => Mood::Productive,
    }
}

fn engine_mood(mood: Mood) -> engine::Mood {
    match mood {
        Mood::Happy => engine::Mood::Happy,
        Mood::Neutral => engine::Mood::Neutral,
        Mood::Sad => engine::Mood::Sad,
        Mood::Productive => engine::Mood::Productive,
    }
}

pub(crate) fn map_entry(entry: engine::DiaryEntry) -> DiaryEntryView {
    DiaryEntryView {
        id: entry.id,
        content: entry.content,
        mood: entry.mood.map(map_mood),
        created_at: entry.created_at,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, ServerError> {
    cached(&state, View::Diary, if_none_match, async {
        let entries = state
            .engine
            .list_diary_entries()
            .await?
            .into_iter()
            .map(map_entry)
            .collect();
        Ok(DiaryListResponse { entries })
    })
    .await
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiaryEntryNew>,
) -> Result<(StatusCode, Json<DiaryEntryView>), ServerError> {
    let entry = state
        .engine
        .create_diary_entry(&payload.content, payload.mood.map(engine_mood))
        .await?;
    Ok((StatusCode::CREATED, Json(map_entry(entry))))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_diary_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
