//! Advisory read cache for products.
//!
//! The cache is deliberately unbounded with no expiry and no invalidation:
//! products are append-only, so a cached record can only go stale if the
//! store is modified out of band. The database remains the sole source of
//! truth; this map is a best-effort shortcut for repeated reads.

use catalog_core::ProductId;
use moka::future::Cache;

use crate::models::Product;

/// Concurrent product-by-ID cache.
///
/// Cheap to clone; clones share the same underlying map.
#[derive(Clone)]
pub struct ProductCache {
    inner: Cache<ProductId, Product>,
}

impl ProductCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        // No max_capacity and no TTL: entries live for the process lifetime.
        Self {
            inner: Cache::builder().build(),
        }
    }

    /// Look up a product. Never errors.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.get(&id).await
    }

    /// Store a product, unconditionally overwriting any previous entry.
    pub async fn insert(&self, product: Product) {
        self.inner.insert(product.id, product).await;
    }
}

impl Default for ProductCache {
    fn default() -> Self {
        Self::new()
    }
}
