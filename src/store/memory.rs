//! In-memory product collection.
//!
//! # Responsibilities
//! - Hold products in creation order
//! - Allocate ids from a counter that only moves forward
//! - Expose positional replace/remove for the terminal actions
//!
//! # Design Decisions
//! - Callers validate input before `create`, so it never fails
//! - Removal shifts later records down; lookups are by id, so only the
//!   length is observable

use parking_lot::Mutex;
use std::sync::Arc;

use crate::store::product::{Price, Product, ProductId};

/// Store handle shared between request handlers.
///
/// Handlers hold the lock for a whole request so an index found during
/// lookup is still valid when the terminal action uses it.
pub type SharedStore = Arc<Mutex<ProductStore>>;

/// Authoritative product collection plus the next-id counter.
#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: ProductId,
}

impl ProductStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Wrap a fresh store for sharing across handlers.
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Allocate the next id, append a product and return it.
    pub fn create(&mut self, name: String, price: Price) -> Product {
        let product = Product {
            id: self.next_id,
            name,
            price,
        };
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    /// All products in creation order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Linear search by id, yielding the position alongside the record.
    pub fn find_by_id(&self, id: ProductId) -> Option<(usize, &Product)> {
        self.products
            .iter()
            .enumerate()
            .find(|(_, p)| p.id == id)
    }

    /// Overwrite the record at `index`, keeping its position.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn replace_at(&mut self, index: usize, product: Product) {
        self.products[index] = product;
    }

    /// Remove the record at `index`, shifting later records down.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Product {
        self.products.remove(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> ProductId {
        self.next_id
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
