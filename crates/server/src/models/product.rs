//! Product domain types.
//!
//! `Product` doubles as the database row type and the wire type: the JSON
//! field names are part of the public API contract, and the column names
//! match them one-to-one.

use catalog_core::{ProductId, UserId};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Products are append-only from the service's perspective: created once,
/// then only read. The identifier is assigned by the database on insert and
/// is never client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID, assigned by the database.
    pub id: ProductId,
    /// Owning user. Stored as-is; no referential integrity is enforced.
    pub user_id: UserId,
    /// Free-form product name.
    pub product_name: String,
    /// Free-form product description.
    pub product_description: String,
    /// Ordered image references (URLs), as submitted by the client.
    pub product_images: Vec<String>,
    /// Price as a plain number; no currency unit.
    pub product_price: f64,
    /// Placeholder for a derived compressed representation of the images.
    /// Always empty until the image pipeline exists.
    pub compressed_product_images: String,
}

/// A product draft as submitted by a client, before an ID is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub user_id: UserId,
    pub product_name: String,
    pub product_description: String,
    pub product_images: Vec<String>,
    pub product_price: f64,
}
