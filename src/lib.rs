//! Ferragem
//!
//! Checkout domain for a small hardware storefront: the client-side cart
//! aggregate, monetary totals in integer cents, the calendar-month order
//! quota, the order lifecycle, and the printable receipt. This crate is
//! persistence-free; the `ferragem-app` crate binds these rules to
//! PostgreSQL.

pub mod cart;
pub mod money;
pub mod quota;
pub mod receipt;
pub mod status;
