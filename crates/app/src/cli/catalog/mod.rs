use clap::{Args, Subcommand};

mod add;
mod add_category;
mod list;
mod remove;
mod restock;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    AddCategory(add_category::AddCategoryArgs),
    Add(add::AddProductArgs),
    List(list::ListProductsArgs),
    Restock(restock::RestockProductArgs),
    Remove(remove::RemoveProductArgs),
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::AddCategory(args) => add_category::run(args).await,
        CatalogSubcommand::Add(args) => add::run(args).await,
        CatalogSubcommand::List(args) => list::run(args).await,
        CatalogSubcommand::Restock(args) => restock::run(args).await,
        CatalogSubcommand::Remove(args) => remove::run(args).await,
    }
}
