//! Background services for the catalog server.

pub mod images;

pub use images::ImageQueue;
