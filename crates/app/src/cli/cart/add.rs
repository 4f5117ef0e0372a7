use std::path::PathBuf;

use clap::Args;
use ferragem::{cart::CartLine, money::format_amount};
use uuid::Uuid;

use super::file;

#[derive(Debug, Args)]
pub(crate) struct AddLineArgs {
    /// Product UUID to add
    #[arg(long)]
    product_uuid: Uuid,

    /// Product name as listed in the catalog
    #[arg(long)]
    name: String,

    /// Listed unit price in cents, when known
    #[arg(long)]
    price_cents: Option<u64>,

    /// Units to add
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Cart file to update
    #[arg(long, env = "FERRAGEM_CART", default_value = "cart.json")]
    cart_file: PathBuf,
}

pub(crate) fn run(args: AddLineArgs) -> Result<(), String> {
    let mut cart = file::load(&args.cart_file)?;

    let line = CartLine::new(args.product_uuid, args.name, args.price_cents, args.quantity)
        .map_err(|error| format!("invalid cart line: {error}"))?;

    cart.add(line)
        .map_err(|error| format!("failed to add line: {error}"))?;

    file::save(&args.cart_file, &cart)?;

    println!("lines: {}", cart.len());

    let subtotal = cart
        .display_subtotal()
        .map_err(|error| format!("failed to total cart: {error}"))?;

    if let Some(subtotal) = subtotal {
        println!("display_subtotal: {}", format_amount(subtotal));
    }

    Ok(())
}
