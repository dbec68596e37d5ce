//! Product route handlers.
//!
//! Thin translation layer between HTTP and the repository / cache / image
//! queue. Extractor rejections are handled explicitly so every parse
//! failure becomes a 400 with the standard `{"error": ...}` body instead of
//! axum's default plain-text rejection.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use catalog_core::{ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: ProductId,
}

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one owner. Absent or empty means all
    /// products; anything else must parse as a user ID.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl ListQuery {
    /// Resolve the raw query value into an owner filter.
    fn owner(&self) -> Result<Option<UserId>, AppError> {
        match self.user_id.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<UserId>()
                .map(Some)
                .map_err(|_| AppError::BadRequest("invalid query parameters".to_string())),
        }
    }
}

/// Create a new product.
///
/// On success the product's images are handed to the image queue one by one,
/// in order. Dispatch is best effort and never affects the response.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<CreateProductResponse>, AppError> {
    let Json(draft) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected product create body");
        AppError::BadRequest("invalid request body".to_string())
    })?;

    let repo = ProductRepository::new(state.pool());
    let product_id = repo.create(&draft).await?;

    for image in &draft.product_images {
        state.images().enqueue(image.clone(), product_id);
    }

    tracing::info!(%product_id, user_id = %draft.user_id, "product created");

    Ok(Json(CreateProductResponse {
        message: "Product created successfully".to_string(),
        product_id,
    }))
}

/// Get a product by ID, consulting the read cache first.
///
/// A cache hit is served as-is, even if the store has changed since it was
/// populated; the cache has no invalidation by design.
pub async fn show(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected product id");
        AppError::BadRequest("invalid product id".to_string())
    })?;

    if let Some(product) = state.cache().get(id).await {
        tracing::debug!(product_id = %id, "serving product from cache");
        return Ok(Json(product));
    }

    let repo = ProductRepository::new(state.pool());
    let product = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

    state.cache().insert(product.clone()).await;

    Ok(Json(product))
}

/// List products, optionally filtered by owner.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected product list query");
        AppError::BadRequest("invalid query parameters".to_string())
    })?;
    let owner = query.owner()?;

    let repo = ProductRepository::new(state.pool());
    let products = repo.list_by_owner(owner).await?;

    Ok(Json(products))
}
