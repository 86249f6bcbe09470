//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, metrics, timeout, body limit)
//! - Own the shared store and the prebuilt handler pipelines
//! - Serve until the shutdown signal fires

use axum::{extract::DefaultBodyLimit, middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::actions::ActionOutcome;
use crate::config::ServiceConfig;
use crate::error::ApiResult;
use crate::http::request::{make_request_span, MakeRequestUuid};
use crate::http::{response, routes};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::pipeline::{Pipeline, RequestContext};
use crate::store::{ProductStore, SharedStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    collection: Arc<Pipeline>,
    item: Arc<Pipeline>,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            collection: Arc::new(Pipeline::empty()),
            item: Arc::new(Pipeline::by_id()),
        }
    }

    /// Run the collection pipeline, then `action`.
    pub fn execute_collection<F>(&self, ctx: RequestContext, action: F) -> ApiResult<ActionOutcome>
    where
        F: FnOnce(&mut ProductStore, RequestContext) -> ApiResult<ActionOutcome>,
    {
        self.execute(&self.collection, ctx, action)
    }

    /// Run the id check and lookup pipeline, then `action`.
    pub fn execute_item<F>(&self, ctx: RequestContext, action: F) -> ApiResult<ActionOutcome>
    where
        F: FnOnce(&mut ProductStore, RequestContext) -> ApiResult<ActionOutcome>,
    {
        self.execute(&self.item, ctx, action)
    }

    // The lock spans lookup and mutation so a located index cannot go stale.
    fn execute<F>(&self, pipeline: &Pipeline, ctx: RequestContext, action: F) -> ApiResult<ActionOutcome>
    where
        F: FnOnce(&mut ProductStore, RequestContext) -> ApiResult<ActionOutcome>,
    {
        let mut store = self.store.lock();
        let ctx = pipeline.run(ctx, &store)?;
        let outcome = action(&mut store, ctx);
        metrics::record_store_size(store.len());
        outcome
    }
}

/// HTTP server for the products API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over `store`.
    pub fn new(config: ServiceConfig, store: SharedStore) -> Self {
        let state = AppState::new(store);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .merge(routes::product_routes(&config.api.mount_path))
            .merge(routes::system_routes())
            .fallback(routes::route_not_found)
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(middleware::map_response(response::ensure_json_errors))
                    .layer(middleware::from_fn(metrics::track_requests))
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.limits.request_timeout_secs,
                    ))),
            )
    }

    /// Router with all layers applied, for serving or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mount_path = %self.config.api.mount_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
