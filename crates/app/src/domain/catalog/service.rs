//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::catalog::{
        data::{NewCategory, NewProduct},
        errors::CatalogServiceError,
        records::{CategoryRecord, ProductListing, ProductRecord, ProductUuid},
        repository::PgCatalogRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError> {
        if category.name.trim().is_empty() {
            return Err(CatalogServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;
        let record = self.repository.create_category(&mut tx, category).await?;
        tx.commit().await?;

        Ok(record)
    }

    #[tracing::instrument(
        name = "catalog.create_product",
        skip_all,
        fields(product = %product.uuid, price_cents = product.price_cents),
        err
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError> {
        if product.name.trim().is_empty() {
            return Err(CatalogServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;
        let record = self.repository.create_product(&mut tx, product).await?;
        tx.commit().await?;

        info!(product = %record.uuid, "product created");

        Ok(record)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;
        let record = self.repository.get_product(&mut tx, product).await?;
        tx.commit().await?;

        Ok(record)
    }

    async fn list_products(&self) -> Result<Vec<ProductListing>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;
        let listings = self.repository.list_products(&mut tx).await?;
        tx.commit().await?;

        Ok(listings)
    }

    #[tracing::instrument(
        name = "catalog.restock_product",
        skip_all,
        fields(product = %product, additional_units),
        err
    )]
    async fn restock_product(
        &self,
        product: ProductUuid,
        additional_units: u32,
    ) -> Result<ProductRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .restock_product(&mut tx, product, additional_units)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        tx.commit().await?;

        info!(product = %record.uuid, stock = record.stock, "product restocked");

        Ok(record)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(CatalogServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Catalog management operations.
pub trait CatalogService: Send + Sync {
    /// Creates a category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError>;

    /// Creates a product in an existing category.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError>;

    /// Fetches a product that has not been deleted.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, CatalogServiceError>;

    /// Lists available products joined with their category names.
    async fn list_products(&self) -> Result<Vec<ProductListing>, CatalogServiceError>;

    /// Adds units to a product's on-hand stock.
    async fn restock_product(
        &self,
        product: ProductUuid,
        additional_units: u32,
    ) -> Result<ProductRecord, CatalogServiceError>;

    /// Soft-deletes a product. Committed order lines keep their snapshots.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), CatalogServiceError>;
}
