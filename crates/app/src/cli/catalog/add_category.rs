use clap::Args;
use ferragem_app::{
    database::{self, Db},
    domain::catalog::{CatalogService, PgCatalogService, data::NewCategory, records::CategoryUuid},
};

#[derive(Debug, Args)]
pub(crate) struct AddCategoryArgs {
    /// Category display name
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: AddCategoryArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCatalogService::new(Db::new(pool));

    let category = service
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    println!("category_uuid: {}", category.uuid);
    println!("category_name: {}", category.name);

    Ok(())
}
