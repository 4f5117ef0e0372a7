use clap::Args;
use ferragem::money::format_amount;
use ferragem_app::{
    database::{self, Db},
    domain::catalog::{CatalogService, PgCatalogService, data::NewProduct, records::ProductUuid},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct AddProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Unit price in cents
    #[arg(long)]
    price_cents: u64,

    /// Initial stock in units
    #[arg(long, default_value_t = 0)]
    stock: u32,

    /// Category the product lists under
    #[arg(long)]
    category_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: AddProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCatalogService::new(Db::new(pool));

    let product = service
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: args.name,
            price_cents: args.price_cents,
            stock: args.stock,
            category_uuid: args.category_uuid.into(),
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);
    println!("price: {}", format_amount(product.price_cents));
    println!("stock: {}", product.stock);

    Ok(())
}
