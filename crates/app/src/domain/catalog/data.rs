//! Catalog input payloads.

use ferragem::money::Cents;

use crate::domain::catalog::records::{CategoryUuid, ProductUuid};

/// New category payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
}

/// New product payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price_cents: Cents,
    pub stock: u32,
    pub category_uuid: CategoryUuid,
}
