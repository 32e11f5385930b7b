//! Ledger endpoints.

use api_types::transaction::{
    TransactionKind, TransactionListResponse, TransactionNew, TransactionView,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use axum_extra::{TypedHeader, headers::IfNoneMatch};
use chrono::Utc;
use engine::{MoneyCents, NewTransaction, View};
use uuid::Uuid;

use crate::{ServerError, categories::map_category, server::ServerState, views::cached};

fn map_kind(kind: engine::TransactionKind) -> TransactionKind {
    match kind {
        engine::TransactionKind::Income => TransactionKind::Income,
        engine::TransactionKind::Expense => TransactionKind::Expense,
    }
}

pub(crate) fn map_transaction(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        amount_minor: tx.amount.cents(),
        kind: map_kind(tx.kind),
        category_id: tx.category_id,
        category: tx.category.map(map_category),
        description: tx.description,
        date: tx.date,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, ServerError> {
    cached(&state, View::Finance, if_none_match, async {
        let transactions = state
            .engine
            .list_transactions()
            .await?
            .into_iter()
            .map(map_transaction)
            .collect();
        Ok(TransactionListResponse { transactions })
    })
    .await
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let amount: MoneyCents = payload.amount.parse()?;
    let kind = match payload.kind {
        TransactionKind::Income => engine::TransactionKind::Income,
        TransactionKind::Expense => engine::TransactionKind::Expense,
    };
    let tx = state
        .engine
        .create_transaction(NewTransaction {
            amount,
            kind,
            category_id: payload.category_id,
            description: payload.description,
            date: payload.date.map(|date| date.with_timezone(&Utc)),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(map_transaction(tx))))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_transaction(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
