//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the message routes
//! - Wire up middleware (request ID, tracing, metrics, body limit, timeout)
//! - Bind server to listener
//! - Graceful shutdown bounded by the request timeout

use std::future::IntoFuture;
use std::io;
use std::sync::Arc;

use axum::{
    http::{HeaderName, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Notify};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handlers::{
    create_message, delete_message, get_message, list_messages, reject_missing_id,
    update_message,
};
use crate::http::middleware::track_metrics;
use crate::http::request::{request_span, X_REQUEST_ID};
use crate::http::service::MessageService;
use crate::storage::MessageStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: MessageService,
}

/// HTTP server for the messages API.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: ServerConfig, store: Arc<dyn MessageStore>) -> Self {
        let state = AppState {
            service: MessageService::new(store),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let request_id = HeaderName::from_static(X_REQUEST_ID);

        Router::new()
            .route("/messages", post(create_message).get(list_messages))
            .route(
                "/messages/",
                get(reject_missing_id)
                    .put(reject_missing_id)
                    .delete(reject_missing_id),
            )
            .route(
                "/messages/{id}",
                get(get_message).put(update_message).delete(delete_message),
            )
            .with_state(state)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                config.timeout(),
            ))
            .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
            .layer(middleware::from_fn(track_metrics))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires, then drain.
    ///
    /// In-flight requests get at most the request timeout to finish. Past
    /// that deadline `run` stops waiting and returns `TimedOut`; connection
    /// tasks still open keep running until the process exits.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let grace = self.config.timeout();
        let draining = Arc::new(Notify::new());
        let started_draining = draining.clone();

        let server = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
                started_draining.notify_one();
            })
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            res = &mut server => res?,
            _ = async {
                draining.notified().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(timeout_secs = grace.as_secs(), "Graceful shutdown timed out");
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "graceful shutdown timed out",
                ));
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The configured router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
