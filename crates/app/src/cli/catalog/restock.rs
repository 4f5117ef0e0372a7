use clap::Args;
use ferragem_app::{
    database::{self, Db},
    domain::catalog::{CatalogService, PgCatalogService},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RestockProductArgs {
    /// Product UUID to restock
    #[arg(long)]
    product_uuid: Uuid,

    /// Units to add to the current stock
    #[arg(long)]
    quantity: u32,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: RestockProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCatalogService::new(Db::new(pool));

    let product = service
        .restock_product(args.product_uuid.into(), args.quantity)
        .await
        .map_err(|error| format!("failed to restock product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);
    println!("stock: {}", product.stock);

    Ok(())
}
