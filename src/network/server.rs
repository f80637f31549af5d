//! HTTP Server
//!
//! Routes definition requests to the shared RequestHandler.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{LexiError, Result};
use crate::handler::RequestHandler;
use crate::protocol::{InsertPayload, LookupQuery, Response};

/// Path of the definitions resource
pub const DEFINITIONS_PATH: &str = "/api/definitions";

/// HTTP server for LexiKV
pub struct Server {
    config: Config,
    handler: Arc<RequestHandler>,
}

impl Server {
    /// Create a new server with the given config and handler
    pub fn new(config: Config, handler: Arc<RequestHandler>) -> Self {
        Self { config, handler }
    }

    /// Build the router for this server
    pub fn router(&self) -> Router {
        routes(Arc::clone(&self.handler), self.config.cors)
    }

    /// Start the server (runs until Ctrl+C or SIGTERM)
    pub async fn run(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| LexiError::Network(format!("failed to bind {}: {}", addr, e)))?;

        tracing::info!("Dictionary API running on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| LexiError::Network(e.to_string()))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Build the definitions router
///
/// GET and POST are both served with and without a trailing slash.
pub fn routes(handler: Arc<RequestHandler>, cors: bool) -> Router {
    let trailing = format!("{}/", DEFINITIONS_PATH);

    let mut router = Router::new()
        .route(DEFINITIONS_PATH, get(lookup_definition).post(add_definition))
        .route(&trailing, get(lookup_definition).post(add_definition))
        .with_state(handler)
        .layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

// =============================================================================
// Route Handlers
// =============================================================================

async fn lookup_definition(
    State(handler): State<Arc<RequestHandler>>,
    query: std::result::Result<Query<LookupQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!("Rejected lookup query: {}", rejection);
            LookupQuery::default()
        }
    };

    handler.lookup(query.word.as_deref())
}

async fn add_definition(
    State(handler): State<Arc<RequestHandler>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match body {
        Ok(Json(body)) => InsertPayload::from_json(&body),
        Err(rejection) => {
            tracing::debug!("Rejected insert body: {}", rejection);
            InsertPayload::default()
        }
    };

    // Inserts rewrite the dictionary file under the store's write lock
    let worker = Arc::clone(&handler);
    match tokio::task::spawn_blocking(move || worker.insert(&payload)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Insert task failed: {}", e);
            Response::storage_failure(handler.requests_handled())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        () = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
