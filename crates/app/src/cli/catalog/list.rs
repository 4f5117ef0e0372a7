use clap::Args;
use ferragem::money::format_amount;
use ferragem_app::{
    database::{self, Db},
    domain::catalog::{CatalogService, PgCatalogService},
};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCatalogService::new(Db::new(pool));

    let products = service
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products in the catalog");
        return Ok(());
    }

    for product in products {
        println!("product_uuid: {}", product.uuid);
        println!("name: {}", product.name);
        println!("category: {}", product.category_name);
        println!("price: {}", format_amount(product.price_cents));
        println!("stock: {}", product.stock);
        println!();
    }

    Ok(())
}
