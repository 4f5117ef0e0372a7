//! Order lines repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{amount_to_db, try_get_amount, try_get_units, units_to_db},
    domain::{
        catalog::records::ProductUuid,
        orders::{
            data::NewOrderLine,
            records::{OrderLineRecord, OrderLineUuid, OrderUuid},
        },
    },
};

const CREATE_ORDER_LINE_SQL: &str = include_str!("../sql/create_order_line.sql");
const GET_ORDER_LINES_SQL: &str = include_str!("../sql/get_order_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderLinesRepository;

impl PgOrderLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: NewOrderLine,
    ) -> Result<OrderLineRecord, sqlx::Error> {
        query_as::<Postgres, OrderLineRecord>(CREATE_ORDER_LINE_SQL)
            .bind(line.uuid.into_uuid())
            .bind(line.order_uuid.into_uuid())
            .bind(line.product_uuid.into_uuid())
            .bind(line.product_name)
            .bind(amount_to_db(line.unit_price_cents)?)
            .bind(units_to_db(line.quantity)?)
            .bind(amount_to_db(line.line_total_cents)?)
            .bind(SqlxTimestamp::from(line.created_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        query_as::<Postgres, OrderLineRecord>(GET_ORDER_LINES_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            product_name: row.try_get("product_name")?,
            unit_price_cents: try_get_amount(row, "unit_price_cents")?,
            quantity: try_get_units(row, "quantity")?,
            line_total_cents: try_get_amount(row, "line_total_cents")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
