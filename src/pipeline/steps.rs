//! Validation and lookup steps.
//!
//! # Responsibilities
//! - Parse the `{id}` path segment into a product id
//! - Resolve the id to a stored record and its position
//! - Compose steps into ordered, short-circuiting pipelines
//!
//! # Design Decisions
//! - Id parsing takes the leading integer and ignores trailing text
//!   ("12abc" is 12, "1.5" is 1, "0x1f" is 31); no digits at all is an error
//! - Pipelines are built once and shared; steps hold no per-request state

use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::pipeline::context::{Located, RequestContext};
use crate::store::{ProductId, ProductStore};

/// One link in the handler chain.
pub trait Step: Send + Sync + std::fmt::Debug {
    /// Either continue with an enriched context or stop the request.
    fn apply(&self, ctx: RequestContext, store: &ProductStore) -> ApiResult<RequestContext>;
}

/// Parses the raw path id into an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericIdCheck;

impl Step for NumericIdCheck {
    fn apply(&self, ctx: RequestContext, _store: &ProductStore) -> ApiResult<RequestContext> {
        let raw = ctx.raw_id().unwrap_or_default();
        match parse_numeric_id(raw) {
            Some(id) => Ok(ctx.with_id(id)),
            None => {
                debug!(raw_id = %raw, "Rejected non-numeric id");
                Err(ApiError::InvalidId)
            }
        }
    }
}

/// Finds the product for the parsed id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistenceLookup;

impl Step for ExistenceLookup {
    fn apply(&self, ctx: RequestContext, store: &ProductStore) -> ApiResult<RequestContext> {
        let id = ctx.id()?;
        let located = store
            .find_by_id(id)
            .map(|(index, product)| Located {
                index,
                product: product.clone(),
            });

        match located {
            Some(located) => Ok(ctx.with_located(located)),
            None => {
                debug!(product_id = id, "Product not found");
                Err(ApiError::NotFound)
            }
        }
    }
}

/// Ordered list of steps run before a terminal action.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new(steps: Vec<Box<dyn Step>>) -> Self {
        Self { steps }
    }

    /// No preconditions (create, list).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Numeric id check followed by existence lookup (get, replace, patch, delete).
    pub fn by_id() -> Self {
        Self::new(vec![Box::new(NumericIdCheck), Box::new(ExistenceLookup)])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Thread the context through each step, stopping at the first error.
    pub fn run(&self, ctx: RequestContext, store: &ProductStore) -> ApiResult<RequestContext> {
        self.steps
            .iter()
            .try_fold(ctx, |ctx, step| step.apply(ctx, store))
    }
}

/// Read the leading integer of `raw`.
///
/// Leading whitespace is skipped and one optional sign is accepted. A `0x`
/// or `0X` prefix switches to hexadecimal. Everything after the first run of
/// digits is ignored. Returns `None` only when no digit follows.
///
/// Values beyond the [`ProductId`] range saturate. Issued ids start at 1
/// and count up one at a time, so a saturated id finds nothing.
pub fn parse_numeric_id(raw: &str) -> Option<ProductId> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: Vec<ProductId> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(ProductId::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let radix = ProductId::from(radix);
    let id = digits.into_iter().fold(0, |acc: ProductId, d| {
        let shifted = acc.saturating_mul(radix);
        if negative {
            shifted.saturating_sub(d)
        } else {
            shifted.saturating_add(d)
        }
    });
    Some(id)
}
