//! Categories API endpoints.

use api_types::category::{
    CategoryCreate, CategoryKind, CategoryListQuery, CategoryListResponse, CategoryView,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub(crate) fn map_kind(kind: engine::CategoryKind) -> CategoryKind {
    match kind {
        engine::CategoryKind::Activity => CategoryKind::Activity,
        engine::CategoryKind::Income => CategoryKind::Income,
        engine::CategoryKind::Expense => CategoryKind::Expense,
    }
}

fn engine_kind(kind: CategoryKind) -> engine::CategoryKind {
    match kind {
        CategoryKind::Activity => engine::CategoryKind::Activity,
        CategoryKind::Income => engine::CategoryKind::Income,
        CategoryKind::Expense => engine::CategoryKind::Expense,
    }
}

pub(crate) fn map_category(category: engine::Category) -> CategoryView {
    CategoryView {
        id: category.id,
        name: category.name,
        kind: map_kind(category.kind),
        icon: category.icon,
        color: category.color,
        is_system: category.is_system,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CategoryListQuery>,
) -> Result<Json<CategoryListResponse>, ServerError> {
    let categories = state
        .engine
        .list_categories(query.kind.map(engine_kind))
        .await?
        .into_iter()
        .map(map_category)
        .collect();
    Ok(Json(CategoryListResponse { categories }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let category = state
        .engine
        .create_category(engine::NewCategory {
            name: payload.name,
            kind: engine_kind(payload.kind),
            icon: payload.icon,
            color: payload.color,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
