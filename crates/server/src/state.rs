//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::ProductCache;
use crate::config::AppConfig;
use crate::services::ImageQueue;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources: the connection pool, the read cache, and the image queue. All
/// of them are created here at startup and dropped together at shutdown -
/// there are no ambient globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: PgPool,
    cache: ProductCache,
    images: ImageQueue,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Spawns the image-queue worker on the current runtime.
    #[must_use]
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                cache: ProductCache::new(),
                images: ImageQueue::start(),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the product read cache.
    #[must_use]
    pub fn cache(&self) -> &ProductCache {
        &self.inner.cache
    }

    /// Get a reference to the image-processing queue.
    #[must_use]
    pub fn images(&self) -> &ImageQueue {
        &self.inner.images
    }
}
