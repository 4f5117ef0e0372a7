use clap::{Args, Subcommand};

mod add;
mod clear;
pub(crate) mod file;
mod remove;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    Add(add::AddLineArgs),
    Remove(remove::RemoveLineArgs),
    Show(show::ShowCartArgs),
    Clear(clear::ClearCartArgs),
}

pub(crate) fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Add(args) => add::run(args),
        CartSubcommand::Remove(args) => remove::run(args),
        CartSubcommand::Show(args) => show::run(args),
        CartSubcommand::Clear(args) => clear::run(args),
    }
}
