//! Product record and its field types.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier assigned by the store on creation.
pub type ProductId = i64;

/// A non-negative-checked price that keeps the client's numeric form.
///
/// Wrapping `serde_json::Number` means `50` is echoed back as `50` and
/// `19.9` as `19.9`, exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Number);

impl Price {
    /// Build a price from an unsigned integer amount.
    pub fn from_u64(value: u64) -> Self {
        Self(Number::from(value))
    }

    /// Build a price from a float. Returns `None` for NaN or infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    /// Numeric value as a float, for comparisons and metrics.
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(0.0)
    }

    pub fn is_negative(&self) -> bool {
        if let Some(i) = self.0.as_i64() {
            return i < 0;
        }
        if self.0.is_u64() {
            return false;
        }
        self.as_f64() < 0.0
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single entity managed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_price_round_trips_without_fraction() {
        let price: Price = serde_json::from_value(json!(50)).unwrap();
        assert_eq!(serde_json::to_value(&price).unwrap(), json!(50));
    }

    #[test]
    fn negative_detection() {
        let neg: Price = serde_json::from_value(json!(-1)).unwrap();
        let neg_float: Price = serde_json::from_value(json!(-0.01)).unwrap();
        let zero: Price = serde_json::from_value(json!(0)).unwrap();
        let huge: Price = serde_json::from_value(json!(u64::MAX)).unwrap();

        assert!(neg.is_negative());
        assert!(neg_float.is_negative());
        assert!(!zero.is_negative());
        assert!(!huge.is_negative());
    }

    #[test]
    fn product_serializes_with_plain_field_names() {
        let product = Product {
            id: 1,
            name: "Chair".into(),
            price: Price::from_u64(50),
        };
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 1, "name": "Chair", "price": 50})
        );
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(Price::from_f64(f64::NAN).is_none());
        assert_eq!(Price::from_f64(9.5).unwrap().as_f64(), 9.5);
    }
}
