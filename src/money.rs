//! Monetary amounts
//!
//! Every amount in the system is a whole number of cents. Totals computed
//! here are exact; the order-total invariant holds without any rounding
//! tolerance.

use thiserror::Error;

/// A monetary amount in integer cents.
pub type Cents = u64;

/// Errors that can occur while totalling monetary amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalError {
    /// A line or order total exceeded the representable range.
    #[error("monetary total overflowed")]
    Overflow,
}

/// Calculates the total of one order line: unit price times quantity.
///
/// # Errors
///
/// Returns [`TotalError::Overflow`] if the product exceeds [`Cents`] range.
pub fn line_total(unit_price: Cents, quantity: u32) -> Result<Cents, TotalError> {
    unit_price
        .checked_mul(Cents::from(quantity))
        .ok_or(TotalError::Overflow)
}

/// Sums line totals into an order total.
///
/// # Errors
///
/// Returns [`TotalError::Overflow`] if the running sum exceeds [`Cents`] range.
pub fn order_total<I>(line_totals: I) -> Result<Cents, TotalError>
where
    I: IntoIterator<Item = Cents>,
{
    line_totals
        .into_iter()
        .try_fold(0, |acc: Cents, total| {
            acc.checked_add(total).ok_or(TotalError::Overflow)
        })
}

/// Formats cents as a decimal amount, e.g. `1999` becomes `"19.99"`.
pub fn format_amount(cents: Cents) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn line_total_multiplies_price_by_quantity() -> TestResult {
        assert_eq!(line_total(10_00, 2)?, 20_00);
        assert_eq!(line_total(0, 10)?, 0);
        assert_eq!(line_total(33, 3)?, 99);

        Ok(())
    }

    #[test]
    fn line_total_overflow_is_reported() {
        assert_eq!(line_total(Cents::MAX, 2), Err(TotalError::Overflow));
    }

    #[test]
    fn order_total_sums_lines() -> TestResult {
        assert_eq!(order_total([20_00, 5_50, 0])?, 25_50);
        assert_eq!(order_total([])?, 0);

        Ok(())
    }

    #[test]
    fn order_total_overflow_is_reported() {
        assert_eq!(
            order_total([Cents::MAX, 1]),
            Err(TotalError::Overflow),
            "sum past u64::MAX must not wrap"
        );
    }

    #[test]
    fn format_amount_pads_cents() {
        assert_eq!(format_amount(19_99), "19.99");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(100), "1.00");
        assert_eq!(format_amount(0), "0.00");
    }
}
