//! Core types for the product catalog.

pub mod id;

pub use id::*;
