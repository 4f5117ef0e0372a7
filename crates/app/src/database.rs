//! Database access.

use sqlx::{
    PgPool, Postgres, Row, Transaction,
    migrate::Migrator,
    postgres::{PgPoolOptions, PgRow},
};

/// Embedded migrations, applied by `db migrate` and by the test harness.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Shared handle to the application database.
///
/// Checkout work happens inside explicit transactions; [`Db::begin`] is the
/// only way service code obtains one.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begins a transaction on the underlying pool.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] when no connection is
    /// available.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connects a pool to the given PostgreSQL URL.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] when the connection fails.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Reads a BIGINT money column into the unsigned cents representation.
pub(crate) fn try_get_amount(row: &PgRow, index: &str) -> Result<u64, sqlx::Error> {
    let value: i64 = row.try_get(index)?;

    u64::try_from(value).map_err(|error| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(error),
    })
}

/// Reads an INTEGER unit-count column into `u32`.
pub(crate) fn try_get_units(row: &PgRow, index: &str) -> Result<u32, sqlx::Error> {
    let value: i32 = row.try_get(index)?;

    u32::try_from(value).map_err(|error| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(error),
    })
}

/// Converts unsigned cents to the signed BIGINT storage type.
pub(crate) fn amount_to_db(amount: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|error| sqlx::Error::Encode(Box::new(error)))
}

/// Converts an unsigned unit count to the signed INTEGER storage type.
pub(crate) fn units_to_db(units: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(units).map_err(|error| sqlx::Error::Encode(Box::new(error)))
}
