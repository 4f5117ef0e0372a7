//! Shopping cart
//!
//! The cart is a client-side aggregate: it lives with the shopper (the CLI
//! persists it as a JSON file) and is only ever read by checkout. Prices on
//! cart lines are display hints; the committer snapshots authoritative
//! prices from the catalog at commit time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::money::{Cents, TotalError, line_total, order_total};

/// Errors raised while building or editing a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Line quantity must be at least one.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// Merging a repeated product overflowed the line quantity.
    #[error("quantity for product {0} overflowed")]
    QuantityOverflow(Uuid),
}

/// One product the shopper intends to purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCartLine")]
pub struct CartLine {
    product_uuid: Uuid,
    product_name: String,
    unit_price: Option<Cents>,
    quantity: u32,
}

impl CartLine {
    /// Creates a cart line for `quantity` units of a product.
    ///
    /// `unit_price` is the client-side display price, if one is known.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] when `quantity` is zero.
    pub fn new(
        product_uuid: Uuid,
        product_name: impl Into<String>,
        unit_price: Option<Cents>,
        quantity: u32,
    ) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        Ok(Self {
            product_uuid,
            product_name: product_name.into(),
            unit_price,
            quantity,
        })
    }

    /// The product this line refers to.
    pub fn product_uuid(&self) -> Uuid {
        self.product_uuid
    }

    /// Product name as shown to the shopper when the line was added.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Client-side display price, when one was captured.
    pub fn unit_price(&self) -> Option<Cents> {
        self.unit_price
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Serde mirror so deserialised lines pass the same validation as built ones.
#[derive(Debug, Deserialize)]
struct RawCartLine {
    product_uuid: Uuid,
    product_name: String,
    unit_price: Option<Cents>,
    quantity: u32,
}

impl TryFrom<RawCartLine> for CartLine {
    type Error = CartError;

    fn try_from(raw: RawCartLine) -> Result<Self, Self::Error> {
        Self::new(
            raw.product_uuid,
            raw.product_name,
            raw.unit_price,
            raw.quantity,
        )
    }
}

/// Client-side cart aggregate.
///
/// Supports exactly the operations checkout relies on: append, remove and
/// clear. Appending a product already in the cart merges by summing the
/// quantities; the first-seen name and price are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line, merging with an existing line for the same product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] when the merged quantity does
    /// not fit in a `u32`.
    pub fn add(&mut self, line: CartLine) -> Result<(), CartError> {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_uuid == line.product_uuid)
        {
            existing.quantity = existing
                .quantity
                .checked_add(line.quantity)
                .ok_or(CartError::QuantityOverflow(line.product_uuid))?;

            return Ok(());
        }

        self.lines.push(line);

        Ok(())
    }

    /// Removes the line for `product_uuid`; returns whether one was present.
    pub fn remove(&mut self, product_uuid: Uuid) -> bool {
        let before = self.lines.len();

        self.lines.retain(|l| l.product_uuid != product_uuid);

        self.lines.len() != before
    }

    /// Empties the cart. Callers invoke this only after a confirmed
    /// successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct product lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Display subtotal over the client-side prices.
    ///
    /// Returns `None` when any line lacks a price; the authoritative total
    /// only exists once checkout snapshots catalog prices.
    ///
    /// # Errors
    ///
    /// Returns [`TotalError::Overflow`] when the subtotal exceeds range.
    pub fn display_subtotal(&self) -> Result<Option<Cents>, TotalError> {
        let mut totals = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            match line.unit_price {
                Some(price) => totals.push(line_total(price, line.quantity)?),
                None => return Ok(None),
            }
        }

        order_total(totals).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn line_rejects_zero_quantity() {
        let result = CartLine::new(product(1), "Claw Hammer", Some(10_00), 0);

        assert_eq!(result, Err(CartError::ZeroQuantity));
    }

    #[test]
    fn add_keeps_distinct_products_in_order() -> TestResult {
        let mut cart = Cart::new();

        cart.add(CartLine::new(product(1), "Claw Hammer", Some(10_00), 2)?)?;
        cart.add(CartLine::new(product(2), "Wood Screws", Some(3_50), 1)?)?;

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product_name(), "Claw Hammer");
        assert_eq!(cart.lines()[1].product_name(), "Wood Screws");

        Ok(())
    }

    #[test]
    fn add_merges_repeat_product_by_summing_quantity() -> TestResult {
        let mut cart = Cart::new();

        cart.add(CartLine::new(product(1), "Claw Hammer", Some(10_00), 2)?)?;
        cart.add(CartLine::new(product(1), "Claw Hammer", Some(12_00), 3)?)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 5);
        // First-seen price wins on merge.
        assert_eq!(cart.lines()[0].unit_price(), Some(10_00));

        Ok(())
    }

    #[test]
    fn add_merge_overflow_is_reported() -> TestResult {
        let mut cart = Cart::new();

        cart.add(CartLine::new(product(1), "Claw Hammer", None, u32::MAX)?)?;

        let result = cart.add(CartLine::new(product(1), "Claw Hammer", None, 1)?);

        assert_eq!(result, Err(CartError::QuantityOverflow(product(1))));

        Ok(())
    }

    #[test]
    fn remove_and_clear() -> TestResult {
        let mut cart = Cart::new();

        cart.add(CartLine::new(product(1), "Claw Hammer", Some(10_00), 1)?)?;
        cart.add(CartLine::new(product(2), "Wood Screws", Some(3_50), 4)?)?;

        assert!(cart.remove(product(1)), "line should have been present");
        assert!(!cart.remove(product(1)), "line already removed");
        assert_eq!(cart.len(), 1);

        cart.clear();

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn display_subtotal_requires_every_price() -> TestResult {
        let mut cart = Cart::new();

        cart.add(CartLine::new(product(1), "Claw Hammer", Some(10_00), 2)?)?;

        assert_eq!(cart.display_subtotal()?, Some(20_00));

        cart.add(CartLine::new(product(2), "Wood Screws", None, 1)?)?;

        assert_eq!(cart.display_subtotal()?, None);

        Ok(())
    }

    #[test]
    fn deserialised_lines_are_validated() {
        let zero_quantity = r#"{"lines":[{"product_uuid":"00000000-0000-0000-0000-000000000001","product_name":"Claw Hammer","unit_price":1000,"quantity":0}]}"#;

        let result: Result<Cart, _> = serde_json::from_str(zero_quantity);

        assert!(result.is_err(), "zero quantity must fail deserialisation");
    }

    #[test]
    fn cart_round_trips_through_json() -> TestResult {
        let mut cart = Cart::new();

        cart.add(CartLine::new(product(1), "Claw Hammer", Some(10_00), 2)?)?;
        cart.add(CartLine::new(product(2), "Wood Screws", None, 7)?)?;

        let json = serde_json::to_string(&cart)?;
        let restored: Cart = serde_json::from_str(&json)?;

        assert_eq!(restored, cart);

        Ok(())
    }
}
