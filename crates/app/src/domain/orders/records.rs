//! Order records.

use ferragem::{money::Cents, status::OrderStatus};
use jiff::Timestamp;

use crate::{
    domain::{catalog::records::ProductUuid, people::records::PersonUuid},
    uuids::TypedUuid,
};

pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order header row.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,

    pub person_uuid: PersonUuid,

    /// Contact details as typed on the checkout form for this purchase.
    pub customer_name: String,

    pub customer_email: String,

    pub department: String,

    pub notes: Option<String>,

    pub status: OrderStatus,

    /// Sum of the line totals, in integer cents.
    pub total_cents: Cents,

    /// Commit instant; also the instant quota windows are counted against.
    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// Order line with name and price snapshotted at commit time.
///
/// `product_uuid` is a loose reference: committed lines keep their snapshot
/// even when the catalog row is later renamed, repriced or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub unit_price_cents: Cents,
    pub quantity: u32,
    pub line_total_cents: Cents,
    pub created_at: Timestamp,
}

/// An order header together with its lines.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order: OrderRecord,
    pub lines: Vec<OrderLineRecord>,
}
