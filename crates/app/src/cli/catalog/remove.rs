use clap::Args;
use ferragem_app::{
    database::{self, Db},
    domain::catalog::{CatalogService, PgCatalogService},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RemoveProductArgs {
    /// Product UUID to remove from the storefront
    #[arg(long)]
    product_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: RemoveProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCatalogService::new(Db::new(pool));

    service
        .delete_product(args.product_uuid.into())
        .await
        .map_err(|error| format!("failed to remove product: {error}"))?;

    println!("product removed: {}", args.product_uuid);
    println!("existing order lines keep their copy of its name and price");

    Ok(())
}
