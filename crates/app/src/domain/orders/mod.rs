//! Orders
//!
//! Checkout commit and order inspection. Placing an order runs the quota
//! gate, the conditional stock decrements and the header/line inserts inside
//! one transaction; any refusal rolls the whole attempt back.

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
