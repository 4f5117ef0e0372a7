//! Orders service errors.

use ferragem::{money::TotalError, quota::QuotaError, status::OrderStatus};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::catalog::records::ProductUuid;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("cart lists product {product} more than once")]
    DuplicateLine { product: ProductUuid },

    #[error("monthly order limit reached ({placed} of {cap} used)")]
    QuotaExceeded { cap: u32, placed: u32 },

    #[error("insufficient stock for product {product}")]
    InsufficientStock { product: ProductUuid },

    #[error("product {product} is not available")]
    UnknownProduct { product: ProductUuid },

    #[error("order cannot move from {from} to {to}")]
    InvalidStatusChange { from: OrderStatus, to: OrderStatus },

    #[error("order not found")]
    NotFound,

    #[error("person not found")]
    PersonNotFound,

    #[error("order already exists")]
    AlreadyExists,

    #[error("order total out of range")]
    Total(#[from] TotalError),

    #[error("order month could not be determined")]
    Window(#[from] QuotaError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            // The only enforced foreign key reachable from checkout is the
            // order's person reference.
            Some(ErrorKind::ForeignKeyViolation) => Self::PersonNotFound,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
