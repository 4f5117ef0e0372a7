//! Monthly order quota
//!
//! A person may place a fixed number of orders per calendar month. The
//! window is computed in the store's display time zone; the count against it
//! comes from storage. [`QuotaPolicy::assess`] is advisory — authoritative
//! enforcement re-runs inside the checkout transaction, because a
//! count-then-act sequence outside it races.

use jiff::{Timestamp, Zoned};
use thiserror::Error;

/// Orders a person may place per calendar month unless configured otherwise.
pub const DEFAULT_MONTHLY_CAP: u32 = 4;

/// Errors raised while evaluating the quota.
#[derive(Debug, Error)]
pub enum QuotaError {
    /// A cap of zero would refuse every order.
    #[error("monthly cap must be at least 1")]
    ZeroCap,

    /// A month boundary fell outside the representable datetime range.
    #[error("month window out of range")]
    Window(#[from] jiff::Error),
}

/// Half-open interval covering one calendar month in a fixed time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    start: Timestamp,
    end: Timestamp,
}

impl MonthWindow {
    /// Window of the calendar month containing `moment`, in `moment`'s zone.
    ///
    /// The window runs from the first instant of the month up to, but not
    /// including, the first instant of the following month.
    ///
    /// # Errors
    ///
    /// Returns [`QuotaError::Window`] when a boundary cannot be represented,
    /// which only happens at the edges of the supported datetime range.
    pub fn containing(moment: &Zoned) -> Result<Self, QuotaError> {
        let zone = moment.time_zone();
        let first = moment.date().first_of_month();
        let next = first.last_of_month().tomorrow()?;

        Ok(Self {
            start: first.to_zoned(zone.clone())?.timestamp(),
            end: next.to_zoned(zone.clone())?.timestamp(),
        })
    }

    /// First instant of the month (inclusive).
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// First instant of the following month (exclusive).
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Whether `moment` falls inside the window.
    pub fn contains(&self, moment: Timestamp) -> bool {
        self.start <= moment && moment < self.end
    }
}

/// Fixed cap on orders per person per calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaPolicy {
    cap: u32,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            cap: DEFAULT_MONTHLY_CAP,
        }
    }
}

impl QuotaPolicy {
    /// Creates a policy with the given cap.
    ///
    /// # Errors
    ///
    /// Returns [`QuotaError::ZeroCap`] when `cap` is zero.
    pub fn new(cap: u32) -> Result<Self, QuotaError> {
        if cap == 0 {
            return Err(QuotaError::ZeroCap);
        }

        Ok(Self { cap })
    }

    /// The configured cap.
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Assesses a month's order count against the cap.
    pub fn assess(&self, placed: u32) -> QuotaDecision {
        QuotaDecision {
            cap: self.cap,
            placed,
            remaining: self.cap.saturating_sub(placed),
            allowed: placed < self.cap,
        }
    }
}

/// Verdict of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaDecision {
    /// The configured monthly cap.
    pub cap: u32,

    /// Orders already placed in the window.
    pub placed: u32,

    /// Orders still available this month, saturating at zero.
    pub remaining: u32,

    /// Whether another order may be placed.
    pub allowed: bool,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn window_spans_exactly_one_month() -> TestResult {
        let moment: Zoned = "2025-03-15T10:30:00[America/Sao_Paulo]".parse()?;

        let window = MonthWindow::containing(&moment)?;

        let start: Zoned = "2025-03-01T00:00:00[America/Sao_Paulo]".parse()?;
        let end: Zoned = "2025-04-01T00:00:00[America/Sao_Paulo]".parse()?;

        assert_eq!(window.start(), start.timestamp());
        assert_eq!(window.end(), end.timestamp());

        Ok(())
    }

    #[test]
    fn window_end_is_exclusive() -> TestResult {
        let moment: Zoned = "2025-03-31T23:59:59[America/Sao_Paulo]".parse()?;

        let window = MonthWindow::containing(&moment)?;

        assert!(window.contains(moment.timestamp()));

        let next_month: Zoned = "2025-04-01T00:00:00[America/Sao_Paulo]".parse()?;

        assert!(
            !window.contains(next_month.timestamp()),
            "first instant of the next month belongs to the next window"
        );

        Ok(())
    }

    #[test]
    fn december_window_rolls_into_next_year() -> TestResult {
        let moment: Zoned = "2024-12-25T12:00:00[America/Sao_Paulo]".parse()?;

        let window = MonthWindow::containing(&moment)?;
        let end: Zoned = "2025-01-01T00:00:00[America/Sao_Paulo]".parse()?;

        assert_eq!(window.end(), end.timestamp());

        Ok(())
    }

    #[test]
    fn february_leap_year_window() -> TestResult {
        let moment: Zoned = "2024-02-29T08:00:00[America/Sao_Paulo]".parse()?;

        let window = MonthWindow::containing(&moment)?;
        let end: Zoned = "2024-03-01T00:00:00[America/Sao_Paulo]".parse()?;

        assert!(window.contains(moment.timestamp()));
        assert_eq!(window.end(), end.timestamp());

        Ok(())
    }

    #[test]
    fn policy_rejects_zero_cap() {
        assert!(matches!(QuotaPolicy::new(0), Err(QuotaError::ZeroCap)));
    }

    #[test]
    fn default_cap_is_four() {
        assert_eq!(QuotaPolicy::default().cap(), 4);
    }

    #[test]
    fn assess_boundary() -> TestResult {
        let policy = QuotaPolicy::new(4)?;

        let under = policy.assess(3);

        assert!(under.allowed);
        assert_eq!(under.remaining, 1);

        let at_cap = policy.assess(4);

        assert!(!at_cap.allowed);
        assert_eq!(at_cap.remaining, 0);

        Ok(())
    }

    #[test]
    fn assess_past_cap_saturates() -> TestResult {
        let policy = QuotaPolicy::new(4)?;

        let over = policy.assess(9);

        assert!(!over.allowed);
        assert_eq!(over.remaining, 0, "remaining must not wrap below zero");

        Ok(())
    }

    #[test]
    fn fresh_person_has_full_allowance() -> TestResult {
        let policy = QuotaPolicy::default();

        let decision = policy.assess(0);

        assert!(decision.allowed);
        assert_eq!(decision.remaining, decision.cap);

        Ok(())
    }
}
