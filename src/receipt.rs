//! Receipt
//!
//! Printable view of a committed order. The CLI shows the same thing the
//! storefront does after checkout: the snapshotted lines and the committed
//! total, never a recomputation from the live catalog.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::money::{Cents, format_amount};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output sink failed.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

/// One committed order line, as it should appear on the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Product name at the moment the order was placed.
    pub name: String,

    /// Units purchased.
    pub quantity: u32,

    /// Unit price charged, in cents.
    pub unit_price: Cents,

    /// Line total charged, in cents.
    pub line_total: Cents,
}

/// Final receipt for a placed order.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    total: Cents,
}

impl Receipt {
    /// Create a receipt from committed lines and the committed order total.
    #[must_use]
    pub fn new(lines: Vec<ReceiptLine>, total: Cents) -> Self {
        Self { lines, total }
    }

    /// Committed order total in cents.
    #[must_use]
    pub fn total(&self) -> Cents {
        self.total
    }

    /// Lines in the order they were committed.
    #[must_use]
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Render the line-item table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if writing to `out` fails.
    pub fn write_to(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Qty", "Unit", "Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("{}", idx + 1),
                line.name.clone(),
                line.quantity.to_string(),
                format_amount(line.unit_price),
                format_amount(line.line_total),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, "Total: {}", format_amount(self.total))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn sample() -> Receipt {
        Receipt::new(
            vec![
                ReceiptLine {
                    name: "Claw Hammer".to_string(),
                    quantity: 2,
                    unit_price: 35_90,
                    line_total: 71_80,
                },
                ReceiptLine {
                    name: "Wood Screws".to_string(),
                    quantity: 3,
                    unit_price: 8_90,
                    line_total: 26_70,
                },
            ],
            98_50,
        )
    }

    #[test]
    fn renders_each_line_and_the_total() -> TestResult {
        let mut out = Vec::new();

        sample().write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Claw Hammer"), "missing first line");
        assert!(rendered.contains("35.90"), "missing unit price");
        assert!(rendered.contains("26.70"), "missing line total");
        assert!(rendered.contains("Total: 98.50"), "missing order total");

        Ok(())
    }

    #[test]
    fn empty_receipt_still_shows_a_zero_total() -> TestResult {
        let mut out = Vec::new();

        Receipt::new(Vec::new(), 0).write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Total: 0.00"), "missing zero total");

        Ok(())
    }
}
