//! Cart persistence between CLI invocations.
//!
//! The cart lives in a JSON file on the operator's machine, standing in for
//! the browser-side storage the storefront uses. Nothing in it is trusted at
//! checkout beyond product identity and quantity.

use std::{fs, io, path::Path};

use ferragem::cart::Cart;

/// Reads the cart file, or returns an empty cart when none exists yet.
pub(crate) fn load(path: &Path) -> Result<Cart, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Cart::new()),
        Err(error) => return Err(format!("failed to read cart file: {error}")),
    };

    serde_json::from_str(&contents).map_err(|error| format!("failed to parse cart file: {error}"))
}

/// Writes the cart back to disk.
pub(crate) fn save(path: &Path, cart: &Cart) -> Result<(), String> {
    let contents = serde_json::to_string_pretty(cart)
        .map_err(|error| format!("failed to serialize cart: {error}"))?;

    fs::write(path, contents).map_err(|error| format!("failed to write cart file: {error}"))
}

/// Removes the cart file if present.
pub(crate) fn clear(path: &Path) -> Result<(), String> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(format!("failed to remove cart file: {error}")),
    }
}
