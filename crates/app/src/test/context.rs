//! Test context for service-level integration tests.

use ferragem::quota::QuotaPolicy;

use crate::{
    database::Db,
    domain::{
        catalog::{CatalogService, PgCatalogService, data::NewCategory, records::CategoryUuid},
        orders::PgOrdersService,
        people::PgPeopleService,
    },
};

use super::db::TestDb;

/// An isolated database plus the three services wired against it, with one
/// catalog category already in place so product helpers have somewhere to
/// hang their rows.
pub struct TestContext {
    pub db: TestDb,
    pub category_uuid: CategoryUuid,
    pub people: PgPeopleService,
    pub catalog: PgCatalogService,
    pub orders: PgOrdersService,
}

impl TestContext {
    /// Context with the stock monthly quota.
    pub async fn new() -> Self {
        Self::with_quota(QuotaPolicy::default()).await
    }

    /// Context with a custom quota policy, for cap and window-boundary tests.
    pub async fn with_quota(quota: QuotaPolicy) -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let catalog = PgCatalogService::new(db.clone());
        let category_uuid = CategoryUuid::new();

        catalog
            .create_category(NewCategory {
                uuid: category_uuid,
                name: "Ferramentas".to_string(),
            })
            .await
            .expect("Failed to create default test category");

        Self {
            people: PgPeopleService::new(test_db.pool().clone()),
            orders: PgOrdersService::with_quota(db, quota),
            catalog,
            category_uuid,
            db: test_db,
        }
    }
}
