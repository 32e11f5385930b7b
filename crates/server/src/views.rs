//! Conditional GET support for the cached views.
//!
//! A view's `ETag` is `"<view>-<version>-<local date>"`. The version moves on
//! every write the view depends on; the date makes "today" based numbers
//! expire at local midnight. Views with monthly totals also carry the
//! timestamp of the next future-dated transaction, so the tag changes once
//! that transaction enters the month window.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{ETag, IfNoneMatch},
};
use engine::View;
use serde::Serialize;

use crate::{ServerError, server::ServerState};

fn shows_monthly_totals(view: View) -> bool {
    matches!(view, View::Home | View::Reports)
}

pub(crate) async fn view_etag(state: &ServerState, view: View) -> Result<ETag, ServerError> {
    let mut tag = format!(
        "{}-{}-{}",
        view.as_str(),
        state.engine.view_version(view),
        state.engine.local_now().date_naive()
    );
    if shows_monthly_totals(view)
        && let Some(next) = state.engine.next_scheduled_transaction().await?
    {
        tag.push_str(&format!("-{}", next.timestamp()));
    }
    let tag = format!("\"{tag}\"");
    tag.parse()
        .map_err(|_| ServerError::Generic(format!("invalid etag {tag}")))
}

/// Answer `304 Not Modified` when the client already holds the current
/// version of `view`, otherwise await `load` and return its JSON.
///
/// `load` is only polled when the body is actually needed.
pub(crate) async fn cached<T>(
    state: &ServerState,
    view: View,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
    load: impl Future<Output = Result<T, ServerError>>,
) -> Result<Response, ServerError>
where
    T: Serialize,
{
    let etag = view_etag(state, view).await?;
    if let Some(TypedHeader(if_none_match)) = if_none_match
        && !if_none_match.precondition_passes(&etag)
    {
        tracing::debug!(view = view.as_str(), "view not modified");
        return Ok((StatusCode::NOT_MODIFIED, TypedHeader(etag)).into_response());
    }

    let body = load.await?;
    Ok((TypedHeader(etag), Json(body)).into_response())
}
