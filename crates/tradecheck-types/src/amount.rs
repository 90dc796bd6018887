//! Monetary amounts.
//!
//! An [`Amount`] is a non-negative dollar figure backed by
//! [`rust_decimal::Decimal`], so band thresholds such as `$7,501,817.73`
//! compare exactly instead of drifting through binary floating point.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{Result, TradeCheckError};

/// A non-negative dollar amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(pub(crate) Decimal);

impl Amount {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap a decimal, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(TradeCheckError::NegativeAmount(value));
        }
        // Strip a negative zero so equality and display stay canonical.
        Ok(Self(value.abs()))
    }

    /// Whole dollars.
    #[must_use]
    pub fn from_dollars(dollars: u64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// The underlying decimal value.
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Whether this is exactly zero dollars.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// `self + other`, or `None` on decimal overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `self - other`, floored at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }

    /// Sum a slice of amounts.
    pub fn total(amounts: &[Self]) -> Result<Self> {
        amounts.iter().try_fold(Self::ZERO, |acc, a| {
            acc.checked_add(*a)
                .ok_or(TradeCheckError::ArithmeticOverflow {
                    operation: "salary total",
                })
        })
    }

    /// Render as a dollar figure with thousands separators and cents,
    /// e.g. `$7,501,817.73`.
    ///
    /// The output is accepted back by the salary parser.
    #[must_use]
    pub fn to_dollars(self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{rounded:.2}");
        let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("${grouped}.{cents}")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = TradeCheckError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Amount {
    /// Build an amount from cents (`from_cents(750_181_773)` is `$7,501,817.73`).
    ///
    /// # Panics
    /// Panics on negative input. Test-only.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2)).expect("test amounts are non-negative")
    }
}
