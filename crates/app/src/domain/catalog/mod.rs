//! Catalog
//!
//! Categories and products with live prices and on-hand stock. The
//! conditional stock decrement used by checkout lives in this module's
//! repository so every stock mutation goes through one statement shape.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::CatalogServiceError;
pub use service::*;
