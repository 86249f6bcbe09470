//! Terminal actions of the handler chain.
//!
//! Each action receives the store (already locked by the caller) and the
//! context produced by its pipeline, performs at most one mutation, and
//! reports an [`ActionOutcome`] for the HTTP layer to render.

pub mod payload;

use tracing::info;

use crate::error::ApiResult;
use crate::pipeline::RequestContext;
use crate::store::{Product, ProductStore};

pub use payload::{ProductPatch, ProductPayload};

const CREATE_INVALID: &str =
    "Invalid data. 'name' (string) and 'price' (number >= 0) are required.";
const REPLACE_INVALID: &str = "Invalid data. 'name' and 'price' are required.";

/// Result of a successful terminal action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// 201 with the new record.
    Created(Product),
    /// 200 with every record.
    Listed(Vec<Product>),
    /// 200 with a single record.
    Found(Product),
    /// 204 with no body.
    NoContent,
}

pub fn create(store: &mut ProductStore, payload: ProductPayload) -> ApiResult<ActionOutcome> {
    let (name, price) = payload.into_full(CREATE_INVALID)?;
    let product = store.create(name, price);
    info!(product_id = product.id, "Product created");
    Ok(ActionOutcome::Created(product))
}

pub fn list(store: &ProductStore) -> ApiResult<ActionOutcome> {
    Ok(ActionOutcome::Listed(store.list().to_vec()))
}

pub fn get(ctx: RequestContext) -> ApiResult<ActionOutcome> {
    let located = ctx.into_located()?;
    Ok(ActionOutcome::Found(located.product))
}

/// Overwrite name and price; the id is carried over from the stored record.
pub fn replace(
    store: &mut ProductStore,
    ctx: RequestContext,
    payload: ProductPayload,
) -> ApiResult<ActionOutcome> {
    let located = ctx.into_located()?;
    let (name, price) = payload.into_full(REPLACE_INVALID)?;

    let updated = Product {
        id: located.product.id,
        name,
        price,
    };
    store.replace_at(located.index, updated.clone());
    info!(product_id = updated.id, "Product replaced");
    Ok(ActionOutcome::Found(updated))
}

/// Merge only the supplied fields onto the stored record.
pub fn patch(
    store: &mut ProductStore,
    ctx: RequestContext,
    payload: ProductPayload,
) -> ApiResult<ActionOutcome> {
    let located = ctx.into_located()?;
    let patch = payload.into_patch()?;

    let updated = patch.apply(located.product);
    store.replace_at(located.index, updated.clone());
    info!(product_id = updated.id, "Product patched");
    Ok(ActionOutcome::Found(updated))
}

pub fn delete(store: &mut ProductStore, ctx: RequestContext) -> ApiResult<ActionOutcome> {
    let located = ctx.into_located()?;
    let removed = store.remove_at(located.index);
    info!(product_id = removed.id, "Product deleted");
    Ok(ActionOutcome::NoContent)
}
