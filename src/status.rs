//! Order lifecycle
//!
//! Checkout only ever produces [`OrderStatus::Pending`]; later transitions
//! belong to the fulfilment side. The transition table lives here so every
//! writer agrees on which moves are legal.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed by checkout; awaiting fulfilment.
    Pending,

    /// Picked up by fulfilment.
    Processing,

    /// Handed over; terminal.
    Completed,

    /// Abandoned before processing; terminal.
    Canceled,
}

impl OrderStatus {
    /// Stored representation, matching the database CHECK constraint.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Whether fulfilment may move an order from `self` to `next`.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing)
                | (Self::Pending, Self::Canceled)
                | (Self::Processing, Self::Completed)
        )
    }

    /// Whether no further transition is possible.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status string is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised order status: {0}")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}
