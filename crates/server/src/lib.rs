//! Catalog server library.
//!
//! Exposes the server's modules so integration tests can drive the router
//! directly. The binary entry point lives in `main.rs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
