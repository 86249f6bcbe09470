//! Per-request context threaded through the pipeline.

use crate::error::{ApiError, ApiResult};
use crate::store::{Product, ProductId};

/// A product found in the store together with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub index: usize,
    pub product: Product,
}

/// What the steps have learned about the request so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    raw_id: Option<String>,
    id: Option<ProductId>,
    located: Option<Located>,
}

impl RequestContext {
    /// Context for collection routes, which carry no path id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for item routes, seeded with the raw `{id}` path segment.
    pub fn with_raw_id(raw_id: impl Into<String>) -> Self {
        Self {
            raw_id: Some(raw_id.into()),
            ..Self::default()
        }
    }

    pub fn raw_id(&self) -> Option<&str> {
        self.raw_id.as_deref()
    }

    /// Attach the parsed id.
    pub fn with_id(self, id: ProductId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Attach the located record.
    pub fn with_located(self, located: Located) -> Self {
        Self {
            located: Some(located),
            ..self
        }
    }

    pub fn id(&self) -> ApiResult<ProductId> {
        self.id.ok_or(ApiError::Internal("numeric id check did not run"))
    }

    pub fn located(&self) -> ApiResult<&Located> {
        self.located
            .as_ref()
            .ok_or(ApiError::Internal("existence lookup did not run"))
    }

    pub fn into_located(self) -> ApiResult<Located> {
        self.located
            .ok_or(ApiError::Internal("existence lookup did not run"))
    }
}
