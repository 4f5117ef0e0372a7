//! Integration tests for the pure checkout policy: cart arithmetic feeding
//! the monthly quota across realistic month boundaries.

use jiff::Zoned;
use testresult::TestResult;
use uuid::Uuid;

use ferragem::{
    cart::{Cart, CartLine},
    money::{line_total, order_total},
    quota::{MonthWindow, QuotaPolicy},
};

#[test]
fn priced_cart_produces_exact_order_total() -> TestResult {
    let mut cart = Cart::new();

    cart.add(CartLine::new(
        Uuid::from_u128(1),
        "Claw Hammer",
        Some(10_00),
        2,
    )?)?;

    cart.add(CartLine::new(
        Uuid::from_u128(2),
        "Wood Screws 4x40 (100)",
        Some(8_90),
        3,
    )?)?;

    let hammer = line_total(10_00, 2)?;
    let screws = line_total(8_90, 3)?;

    assert_eq!(order_total([hammer, screws])?, 46_70);
    assert_eq!(cart.display_subtotal()?, Some(46_70));

    Ok(())
}

#[test]
fn quota_refuses_fifth_order_within_one_window() -> TestResult {
    let policy = QuotaPolicy::default();

    let first: Zoned = "2025-05-02T09:00:00[America/Sao_Paulo]".parse()?;
    let last: Zoned = "2025-05-31T23:00:00[America/Sao_Paulo]".parse()?;

    let window = MonthWindow::containing(&first)?;

    // Both attempts land in the same window even a month apart in days.
    assert!(window.contains(first.timestamp()));
    assert!(window.contains(last.timestamp()));

    assert!(policy.assess(3).allowed, "fourth order is within the cap");
    assert!(!policy.assess(4).allowed, "fifth order exceeds the cap");

    Ok(())
}

#[test]
fn orders_on_either_side_of_midnight_fall_in_different_windows() -> TestResult {
    let before: Zoned = "2025-04-30T23:59:59[America/Sao_Paulo]".parse()?;
    let after: Zoned = "2025-05-01T00:00:00[America/Sao_Paulo]".parse()?;

    let april = MonthWindow::containing(&before)?;
    let may = MonthWindow::containing(&after)?;

    assert!(april.contains(before.timestamp()));
    assert!(!april.contains(after.timestamp()));
    assert!(may.contains(after.timestamp()));
    assert_eq!(april.end(), may.start());

    Ok(())
}

#[test]
fn window_is_zone_aware_not_utc_naive() -> TestResult {
    // 21:30 in São Paulo on the last day of April is already May 1st in UTC.
    // The window must still count it as April.
    let late_evening: Zoned = "2025-04-30T21:30:00-03:00[America/Sao_Paulo]".parse()?;

    let april = MonthWindow::containing(&late_evening)?;

    assert!(april.contains(late_evening.timestamp()));

    let utc_may: Zoned = "2025-05-01T00:30:00[UTC]".parse()?;

    // The same instant viewed from UTC; membership is decided by the zone
    // the window was built in.
    assert_eq!(late_evening.timestamp(), utc_may.timestamp());

    Ok(())
}
