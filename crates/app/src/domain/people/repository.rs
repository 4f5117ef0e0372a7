//! People repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::people::{
    data::NewPerson,
    records::{PersonKind, PersonRecord, PersonUuid},
};

const CREATE_PERSON_SQL: &str = include_str!("sql/create_person.sql");
const FIND_PERSON_BY_KEY_SQL: &str = include_str!("sql/find_person_by_key.sql");
const GET_PERSON_SQL: &str = include_str!("sql/get_person.sql");

/// PostgreSQL-backed people repository.
#[derive(Debug, Clone)]
pub(crate) struct PgPeopleRepository {
    pool: PgPool,
}

impl PgPeopleRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_person(
        &self,
        person: NewPerson,
    ) -> Result<PersonRecord, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(CREATE_PERSON_SQL)
            .bind(person.uuid.into_uuid())
            .bind(person.kind.as_str())
            .bind(person.external_key)
            .bind(person.display_name)
            .bind(person.contact_email)
            .bind(person.sector)
            .bind(person.phone)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_by_external_key(
        &self,
        kind: PersonKind,
        external_key: &str,
    ) -> Result<Option<PersonRecord>, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(FIND_PERSON_BY_KEY_SQL)
            .bind(kind.as_str())
            .bind(external_key)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn get_person(&self, person: PersonUuid) -> Result<PersonRecord, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(GET_PERSON_SQL)
            .bind(person.into_uuid())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PersonRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;

        let kind = match kind.as_str() {
            "collaborator" => PersonKind::Collaborator,
            "customer" => PersonKind::Customer,
            other => {
                return Err(sqlx::Error::ColumnDecode {
                    index: "kind".to_string(),
                    source: format!("unknown person kind: {other}").into(),
                });
            }
        };

        Ok(Self {
            uuid: PersonUuid::from_uuid(row.try_get("uuid")?),
            kind,
            external_key: row.try_get("external_key")?,
            display_name: row.try_get("display_name")?,
            contact_email: row.try_get("contact_email")?,
            sector: row.try_get("sector")?,
            phone: row.try_get("phone")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
