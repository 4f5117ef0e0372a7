use clap::{Args, Subcommand};

mod login;
mod register;
mod resolve;

#[derive(Debug, Args)]
pub(crate) struct PeopleCommand {
    #[command(subcommand)]
    command: PeopleSubcommand,
}

#[derive(Debug, Subcommand)]
enum PeopleSubcommand {
    Register(register::RegisterCustomerArgs),
    Login(login::LoginArgs),
    Resolve(resolve::ResolveCollaboratorArgs),
}

pub(crate) async fn run(command: PeopleCommand) -> Result<(), String> {
    match command.command {
        PeopleSubcommand::Register(args) => register::run(args).await,
        PeopleSubcommand::Login(args) => login::run(args).await,
        PeopleSubcommand::Resolve(args) => resolve::run(args).await,
    }
}
