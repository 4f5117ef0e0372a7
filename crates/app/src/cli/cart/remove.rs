use std::path::PathBuf;

use clap::Args;
use uuid::Uuid;

use super::file;

#[derive(Debug, Args)]
pub(crate) struct RemoveLineArgs {
    /// Product UUID to remove
    #[arg(long)]
    product_uuid: Uuid,

    /// Cart file to update
    #[arg(long, env = "FERRAGEM_CART", default_value = "cart.json")]
    cart_file: PathBuf,
}

pub(crate) fn run(args: RemoveLineArgs) -> Result<(), String> {
    let mut cart = file::load(&args.cart_file)?;

    if !cart.remove(args.product_uuid) {
        return Err(format!("no cart line for product {}", args.product_uuid));
    }

    file::save(&args.cart_file, &cart)?;

    println!("line removed");
    println!("lines: {}", cart.len());

    Ok(())
}
