//! HTTP service for the todo resource.
//!
//! # Overview
//! Mounts five resource routes under `/api/todo` (the collection also answers
//! with a trailing slash) plus `/health`, each backed
//! by whatever `TodoStore` the caller hands to [`AppState`]. Binaries open a
//! MongoDB store; tests pass a `MemoryStore` or a stub.
//!
//! # Design
//! - The store is injected through axum state rather than held globally, so
//!   every handler can be exercised in-process with `tower::ServiceExt`.
//! - `run` takes the listener and a shutdown future from the caller, which
//!   keeps port selection and signal handling out of the router.

pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mongo;
pub mod telemetry;

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderName, Request},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use todo_core::{MemoryStore, StoreError, TodoStore};

use crate::config::{Config, StoreKind};
use crate::handlers::{create_todo, delete_todo, get_todo, health, list_todos, update_todo};
use crate::mongo::MongoStore;

pub use crate::envelope::{Envelope, TodoView};
pub use crate::error::{ApiError, Operation};

pub const BASE_PATH: &str = "/api/todo";

fn request_id_header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// State over a fresh, empty in-process store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(BASE_PATH, get(list_todos).post(create_todo))
        .route(&format!("{BASE_PATH}/"), get(list_todos).post(create_todo))
        .route(
            &format!("{BASE_PATH}/{{id}}"),
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(request_id_header())
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Open the store selected by `config`. A MongoDB store is pinged before
/// this returns.
pub async fn open_store(config: &Config) -> Result<Arc<dyn TodoStore>, StoreError> {
    match config.store {
        StoreKind::Mongo => {
            let store =
                MongoStore::connect(&config.mongo_uri, &config.database, config.connect_timeout())
                    .await?;
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            tracing::warn!("using the in-memory store; todos are lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Serve the app on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
