//! Order input payloads.

use ferragem::{money::Cents, status::OrderStatus};
use jiff::Timestamp;

use crate::domain::{
    catalog::records::ProductUuid,
    orders::records::{OrderLineUuid, OrderUuid},
    people::records::PersonUuid,
};

/// Contact details the buyer types on the checkout form.
///
/// Stored on the order itself; these describe one purchase and never update
/// the person row.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub department: String,
    pub notes: Option<String>,
}

/// Header insert payload, assembled by the service at commit time.
#[derive(Debug, Clone)]
pub(crate) struct NewOrder {
    pub uuid: OrderUuid,
    pub person_uuid: PersonUuid,
    pub customer: CustomerInfo,
    pub status: OrderStatus,
    pub total_cents: Cents,
    pub created_at: Timestamp,
}

/// Line insert payload carrying the commit-time snapshot.
#[derive(Debug, Clone)]
pub(crate) struct NewOrderLine {
    pub uuid: OrderLineUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub unit_price_cents: Cents,
    pub quantity: u32,
    pub line_total_cents: Cents,
    pub created_at: Timestamp,
}
