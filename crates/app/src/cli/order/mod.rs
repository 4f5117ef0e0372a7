use clap::{Args, Subcommand};

mod place;
mod quota;
mod set_status;
mod show;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    Place(place::PlaceOrderArgs),
    Quota(quota::QuotaArgs),
    Show(show::ShowOrderArgs),
    SetStatus(set_status::SetStatusArgs),
}

pub(crate) async fn run(command: OrderCommand) -> Result<(), String> {
    match command.command {
        OrderSubcommand::Place(args) => place::run(args).await,
        OrderSubcommand::Quota(args) => quota::run(args).await,
        OrderSubcommand::Show(args) => show::run(args).await,
        OrderSubcommand::SetStatus(args) => set_status::run(args).await,
    }
}
