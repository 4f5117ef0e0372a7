use std::path::PathBuf;

use clap::Args;

use super::file;

#[derive(Debug, Args)]
pub(crate) struct ClearCartArgs {
    /// Cart file to remove
    #[arg(long, env = "FERRAGEM_CART", default_value = "cart.json")]
    cart_file: PathBuf,
}

pub(crate) fn run(args: ClearCartArgs) -> Result<(), String> {
    file::clear(&args.cart_file)?;

    println!("cart cleared");

    Ok(())
}
