//! Product repository for database operations.
//!
//! Queries use the runtime-checked sqlx API so the crate builds without a
//! live database. Each statement is its own implicit transaction; failures
//! are logged here and propagated without retry.

use catalog_core::{ProductId, UserId};
use sqlx::PgPool;
use tracing::instrument;

use super::RepositoryError;
use crate::models::{NewProduct, Product};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product and return its database-assigned ID.
    ///
    /// `compressed_product_images` is written as the empty string; no
    /// compression pipeline exists yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails. The caller
    /// must not assume partial success.
    #[instrument(skip(self, draft), fields(user_id = %draft.user_id))]
    pub async fn create(&self, draft: &NewProduct) -> Result<ProductId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO products
                (user_id, product_name, product_description, product_images,
                 product_price, compressed_product_images)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(draft.user_id)
        .bind(&draft.product_name)
        .bind(&draft.product_description)
        .bind(&draft.product_images)
        .bind(draft.product_price)
        .bind("")
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to insert product");
            RepositoryError::Database(e)
        })?;

        Ok(ProductId::new(id))
    }

    /// Get a product by its ID.
    ///
    /// Returns `Ok(None)` when no row matches, which is distinct from a
    /// query failure.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, user_id, product_name, product_description,
                   product_images, product_price, compressed_product_images
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, product_id = %id, "failed to fetch product");
            RepositoryError::Database(e)
        })?;

        Ok(product)
    }

    /// List products, optionally filtered by owning user.
    ///
    /// With no filter, every product is returned. Results are ordered by ID
    /// so listings are deterministic.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_by_owner(
        &self,
        owner: Option<UserId>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let result = match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Product>(
                    r"
                    SELECT id, user_id, product_name, product_description,
                           product_images, product_price, compressed_product_images
                    FROM products
                    WHERE user_id = $1
                    ORDER BY id
                    ",
                )
                .bind(user_id)
                .fetch_all(self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Product>(
                    r"
                    SELECT id, user_id, product_name, product_description,
                           product_images, product_price, compressed_product_images
                    FROM products
                    ORDER BY id
                    ",
                )
                .fetch_all(self.pool)
                .await
            }
        };

        result.map_err(|e| {
            tracing::error!(error = %e, "failed to list products");
            RepositoryError::Database(e)
        })
    }
}
