//! Order header repository.

use ferragem::{quota::MonthWindow, status::OrderStatus};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::{amount_to_db, try_get_amount},
    domain::{
        orders::{
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
        },
        people::records::PersonUuid,
    },
};

const COUNT_ORDERS_IN_WINDOW_SQL: &str = include_str!("../sql/count_orders_in_window.sql");
const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_FOR_PERSON_SQL: &str = include_str!("../sql/list_orders_for_person.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("../sql/update_order_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Orders the person committed inside the window, counted on the same
    /// transaction that will insert the next one.
    pub(crate) async fn count_in_window(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
        window: &MonthWindow,
    ) -> Result<u32, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_ORDERS_IN_WINDOW_SQL)
            .bind(person.into_uuid())
            .bind(SqlxTimestamp::from(window.start()))
            .bind(SqlxTimestamp::from(window.end()))
            .fetch_one(&mut **tx)
            .await?;

        u32::try_from(count).map_err(|error| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(error),
        })
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.person_uuid.into_uuid())
            .bind(order.customer.name)
            .bind(order.customer.email)
            .bind(order.customer.department)
            .bind(order.customer.notes)
            .bind(order.status.as_str())
            .bind(amount_to_db(order.total_cents)?)
            .bind(SqlxTimestamp::from(order.created_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_for_person_in_window(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
        window: &MonthWindow,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_FOR_PERSON_SQL)
            .bind(person.into_uuid())
            .bind(SqlxTimestamp::from(window.start()))
            .bind(SqlxTimestamp::from(window.end()))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<OrderStatus>()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(error),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            person_uuid: PersonUuid::from_uuid(row.try_get("person_uuid")?),
            customer_name: row.try_get("customer_name")?,
            customer_email: row.try_get("customer_email")?,
            department: row.try_get("department")?,
            notes: row.try_get("notes")?,
            status,
            total_cents: try_get_amount(row, "total_cents")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
