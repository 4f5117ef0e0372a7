use clap::{Parser, Subcommand};
use jiff::{Timestamp, Zoned, tz::TimeZone};

mod cart;
mod catalog;
mod db;
mod order;
mod people;

#[derive(Debug, Parser)]
#[command(name = "ferragem-app", about = "Ferragem storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(cart::CartCommand),
    Catalog(catalog::CatalogCommand),
    Db(db::DbCommand),
    Order(order::OrderCommand),
    People(people::PeopleCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Cart(command) => cart::run(command),
            Commands::Catalog(command) => catalog::run(command).await,
            Commands::Db(command) => db::run(command).await,
            Commands::Order(command) => order::run(command).await,
            Commands::People(command) => people::run(command).await,
        }
    }
}

/// Current wall-clock time in `time_zone`, or the system zone when omitted.
pub(crate) fn now_in(time_zone: Option<&str>) -> Result<Zoned, String> {
    match time_zone {
        Some(name) => {
            let tz = TimeZone::get(name)
                .map_err(|error| format!("unknown time zone {name}: {error}"))?;

            Ok(Timestamp::now().to_zoned(tz))
        }
        None => Ok(Zoned::now()),
    }
}
