use axum::{
    Router,
    routing::{delete, get, post, put},
};

use std::sync::Arc;

use crate::{
    activities, categories, data, diary, finance, reports, settings, transactions,
};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/home", get(reports::home))
        .route("/categories", get(categories::list).post(categories::create))
        .route("/categories/{id}", delete(categories::delete))
        .route("/activities", get(activities::list).post(activities::start))
        .route("/activities/current", get(activities::current))
        .route("/activities/{id}", delete(activities::delete))
        .route("/activities/{id}/stop", post(activities::stop))
        .route("/activities/{id}/rating", put(activities::rate))
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/transactions/{id}", delete(transactions::delete))
        .route("/finance/balance", get(finance::balance))
        .route("/finance/monthly", get(finance::monthly))
        .route("/diary", get(diary::list).post(diary::create))
        .route("/diary/{id}", delete(diary::delete))
        .route("/settings", get(settings::get).put(settings::update))
        .route("/reports/finance", get(reports::finance))
        .route("/reports/activities", get(reports::activities))
        .route("/reports/diary", get(reports::diary))
        .route("/export", get(data::export))
        .route("/data", delete(data::clear))
        .with_state(state)
}

pub async fn run(engine: Engine, address: &str) {
    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {address}: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
