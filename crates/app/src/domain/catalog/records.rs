//! Catalog records.

use ferragem::money::Cents;
use jiff::Timestamp;

use crate::uuids::TypedUuid;

pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Product grouping. Every product references exactly one category row; the
/// category name is only ever stored here and joined in at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

pub type ProductUuid = TypedUuid<ProductRecord>;

/// Catalog product with live price and on-hand stock.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,

    pub name: String,

    /// Live unit price in integer cents. Orders snapshot this at commit
    /// time; changing it never touches committed orders.
    pub price_cents: Cents,

    /// Units on hand. Never negative.
    pub stock: u32,

    pub category_uuid: CategoryUuid,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,

    pub deleted_at: Option<Timestamp>,
}

/// Product row joined with its category name for storefront listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub uuid: ProductUuid,
    pub name: String,
    pub category_name: String,
    pub price_cents: Cents,
    pub stock: u32,
}

/// Live name, price and post-decrement stock captured by the conditional
/// stock update at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSnapshot {
    pub name: String,
    pub price_cents: Cents,
    pub remaining_stock: u32,
}
