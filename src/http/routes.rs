//! Product routes and their handlers.
//!
//! | Method | Path          | Pipeline | Action  |
//! |--------|---------------|----------|---------|
//! | POST   | {mount}       | empty    | create  |
//! | GET    | {mount}       | empty    | list    |
//! | GET    | {mount}/{id}  | by_id    | get     |
//! | PUT    | {mount}/{id}  | by_id    | replace |
//! | PATCH  | {mount}/{id}  | by_id    | patch   |
//! | DELETE | {mount}/{id}  | by_id    | delete  |

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::actions::{self, ActionOutcome, ProductPayload};
use crate::error::{ApiError, ApiResult};
use crate::http::server::AppState;
use crate::pipeline::RequestContext;

pub const HEALTH_PATH: &str = "/health";

/// Liveness response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Product routes mounted under `mount_path`.
///
/// The collection path also answers with a trailing slash.
pub fn product_routes(mount_path: &str) -> Router<AppState> {
    let collection = get(list_products).post(create_product);
    let item = get(get_product)
        .put(replace_product)
        .patch(patch_product)
        .delete(delete_product);

    if mount_path == "/" {
        return Router::new()
            .route("/", collection)
            .route("/{id}", item);
    }

    Router::new()
        .route(mount_path, collection.clone())
        .route(&format!("{mount_path}/"), collection)
        .route(&format!("{mount_path}/{{id}}"), item)
}

/// Built-in routes that live outside the product mount.
pub fn system_routes() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(health))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Body as received by the JSON extractor: any object, nothing else.
type ObjectBody = Result<Json<Map<String, Value>>, JsonRejection>;

fn read_payload(body: ObjectBody) -> ApiResult<ProductPayload> {
    let Json(object) = body?;
    ProductPayload::try_from(object)
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn create_product(
    State(state): State<AppState>,
    body: ObjectBody,
) -> ApiResult<ActionOutcome> {
    let payload = read_payload(body)?;
    state.execute_collection(RequestContext::new(), |store, _ctx| {
        actions::create(store, payload)
    })
}

async fn list_products(State(state): State<AppState>) -> ApiResult<ActionOutcome> {
    state.execute_collection(RequestContext::new(), |store, _ctx| actions::list(store))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ActionOutcome> {
    state.execute_item(RequestContext::with_raw_id(id), |_store, ctx| actions::get(ctx))
}

async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: ObjectBody,
) -> ApiResult<ActionOutcome> {
    let payload = read_payload(body)?;
    state.execute_item(RequestContext::with_raw_id(id), |store, ctx| {
        actions::replace(store, ctx, payload)
    })
}

async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: ObjectBody,
) -> ApiResult<ActionOutcome> {
    let payload = read_payload(body)?;
    state.execute_item(RequestContext::with_raw_id(id), |store, ctx| {
        actions::patch(store, ctx, payload)
    })
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ActionOutcome> {
    state.execute_item(RequestContext::with_raw_id(id), actions::delete)
}
