//! Activity tracking endpoints.

use api_types::activity::{
    ActivityListResponse, ActivityRate, ActivityStart, ActivityStarted, ActivityStopped,
    ActivityView, CurrentActivityResponse, StopStatus,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use axum_extra::{TypedHeader, headers::IfNoneMatch};
use engine::{StopOutcome, View};
use uuid::Uuid;

use crate::{ServerError, categories::map_category, server::ServerState, views::cached};

pub(crate) fn map_activity(activity: engine::Activity) -> ActivityView {
    ActivityView {
        id: activity.id,
        title: activity.title,
        description: activity.description,
        category_id: activity.category_id,
        category: activity.category.map(map_category),
        start_time: activity.start_time,
        end_time: activity.end_time,
        duration_minutes: activity.duration,
        rating: activity.rating.map(|r| r.get()),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, ServerError> {
    cached(&state, View::Activities, if_none_match, async {
        let activities = state
            .engine
            .list_activities()
            .await?
            .into_iter()
            .map(map_activity)
            .collect();
        Ok(ActivityListResponse { activities })
    })
    .await
}

pub async fn start(
    State(state): State<ServerState>,
    Json(payload): Json<ActivityStart>,
) -> Result<(StatusCode, Json<ActivityStarted>), ServerError> {
    let started = state
        .engine
        .start_activity(
            &payload.title,
            payload.category_id,
            payload.description.as_deref(),
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ActivityStarted {
            activity: map_activity(started.activity),
            stopped: started.stopped.map(map_activity),
        }),
    ))
}

pub async fn current(
    State(state): State<ServerState>,
) -> Result<Json<CurrentActivityResponse>, ServerError> {
    let activity = state.engine.current_activity().await?.map(map_activity);
    Ok(Json(CurrentActivityResponse { activity }))
}

pub async fn stop(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActivityStopped>, ServerError> {
    let (status, activity) = match state.engine.stop_activity(id).await? {
        StopOutcome::Stopped(activity) => (StopStatus::Stopped, activity),
        StopOutcome::AlreadyStopped(activity) => (StopStatus::AlreadyStopped, activity),
    };
    Ok(Json(ActivityStopped {
        status,
        activity: map_activity(activity),
    }))
}

pub async fn rate(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ActivityRate>,
) -> Result<Json<ActivityView>, ServerError> {
    let activity = state.engine.rate_activity(id, payload.rating).await?;
    Ok(Json(map_activity(activity)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_activity(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
