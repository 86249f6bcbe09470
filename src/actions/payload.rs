//! Request body shape and its validation rules.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::store::{Price, Product};

const PATCH_EMPTY: &str = "Invalid data. At least 'name' or 'price' must be sent.";
const PATCH_NEGATIVE_PRICE: &str = "Invalid price. It must be a number >= 0.";

/// Body accepted by create, replace and patch. `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}

/// Fields a partial update will overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Price>,
}

impl ProductPatch {
    /// Overlay the supplied fields; the id is never touched.
    pub fn apply(self, product: Product) -> Product {
        Product {
            id: product.id,
            name: self.name.unwrap_or(product.name),
            price: self.price.unwrap_or(product.price),
        }
    }
}

impl TryFrom<Map<String, Value>> for ProductPayload {
    type Error = ApiError;

    /// Only a JSON object is a payload; arrays and scalars never reach here.
    fn try_from(object: Map<String, Value>) -> ApiResult<Self> {
        serde_json::from_value(Value::Object(object))
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

impl ProductPayload {
    /// Both fields required: a non-empty name and a price >= 0.
    pub fn into_full(self, message: &'static str) -> ApiResult<(String, Price)> {
        match (self.name, self.price) {
            (Some(name), Some(price)) if !name.is_empty() && !price.is_negative() => {
                Ok((name, price))
            }
            _ => Err(ApiError::InvalidInput(message)),
        }
    }

    /// Partial update rules.
    ///
    /// An empty name is treated as not sent and skipped. A zero price is a
    /// real value. A negative price rejects the whole update.
    pub fn into_patch(self) -> ApiResult<ProductPatch> {
        let name = self.name.filter(|n| !n.is_empty());

        if name.is_none() && self.price.is_none() {
            return Err(ApiError::InvalidInput(PATCH_EMPTY));
        }
        if self.price.as_ref().is_some_and(Price::is_negative) {
            return Err(ApiError::InvalidInput(PATCH_NEGATIVE_PRICE));
        }

        Ok(ProductPatch {
            name,
            price: self.price,
        })
    }
}
