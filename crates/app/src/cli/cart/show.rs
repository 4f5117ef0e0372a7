use std::path::PathBuf;

use clap::Args;
use ferragem::money::format_amount;

use super::file;

#[derive(Debug, Args)]
pub(crate) struct ShowCartArgs {
    /// Cart file to read
    #[arg(long, env = "FERRAGEM_CART", default_value = "cart.json")]
    cart_file: PathBuf,
}

pub(crate) fn run(args: ShowCartArgs) -> Result<(), String> {
    let cart = file::load(&args.cart_file)?;

    if cart.is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        println!("product_uuid: {}", line.product_uuid());
        println!("name: {}", line.product_name());
        println!(
            "price: {}",
            line.unit_price()
                .map_or_else(|| "unknown".to_string(), format_amount)
        );
        println!("quantity: {}", line.quantity());
        println!();
    }

    let subtotal = cart
        .display_subtotal()
        .map_err(|error| format!("failed to total cart: {error}"))?;

    match subtotal {
        Some(subtotal) => println!("display_subtotal: {}", format_amount(subtotal)),
        None => println!("display_subtotal: unknown until checkout"),
    }

    Ok(())
}
