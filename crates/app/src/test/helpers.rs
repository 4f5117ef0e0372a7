//! Test Helpers

use ferragem::cart::{CartError, CartLine};
use jiff::Zoned;

use crate::{
    domain::{
        catalog::{
            CatalogService, CatalogServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        orders::data::CustomerInfo,
        people::{PeopleService, PeopleServiceError, data::CandidateProfile, records::PersonRecord},
    },
    test::TestContext,
};

/// Resolves a collaborator with a canned directory profile.
pub(crate) async fn create_collaborator(
    ctx: &TestContext,
    matricula: &str,
) -> Result<PersonRecord, PeopleServiceError> {
    ctx.people
        .resolve_collaborator(
            matricula,
            CandidateProfile {
                display_name: "Ana Souza".to_string(),
                contact_email: "ana.souza@example.com".to_string(),
                sector: Some("Maintenance".to_string()),
                phone: None,
            },
        )
        .await
}

/// Creates a product in the context's default category.
pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price_cents: u64,
    stock: u32,
) -> Result<ProductRecord, CatalogServiceError> {
    ctx.catalog
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            price_cents,
            stock,
            category_uuid: ctx.category_uuid,
        })
        .await
}

/// A filled-in checkout form.
pub(crate) fn checkout_form() -> CustomerInfo {
    CustomerInfo {
        name: "Ana Souza".to_string(),
        email: "ana.souza@example.com".to_string(),
        department: "Maintenance".to_string(),
        notes: None,
    }
}

/// Cart line for `quantity` units of `product`, carrying its listed price.
pub(crate) fn line(product: &ProductRecord, quantity: u32) -> Result<CartLine, CartError> {
    CartLine::new(
        product.uuid.into_uuid(),
        product.name.clone(),
        Some(product.price_cents),
        quantity,
    )
}

/// Parses an RFC 9557 string such as `2025-04-10T09:00:00[America/Sao_Paulo]`.
pub(crate) fn zoned(datetime: &str) -> Zoned {
    datetime.parse().expect("valid test datetime")
}
