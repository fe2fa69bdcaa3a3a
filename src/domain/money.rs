//! Monetary values held in minor units.
//!
//! Prices and totals are integer cents so order totals add up exactly. The only
//! place rounding happens is [`Money::discounted`], which rounds half up to the
//! nearest cent. Arithmetic that can leave the `i64` range is checked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// `from_major_minor(10, 99)` is 10.99. For negative amounts only the
    /// major part carries the sign.
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    #[cfg(test)]
    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Price of `quantity` units at this unit price.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Takes `percent` off this amount, rounding half up to the cent.
    ///
    /// The result never exceeds the original in magnitude, so only the
    /// intermediate product needs the wider type.
    pub fn discounted(self, percent: u32) -> Money {
        let keep = 100 - i128::from(percent.min(100));
        let scaled = i128::from(self.0) * keep;
        let rounded = if scaled >= 0 { (scaled + 50) / 100 } else { (scaled - 50) / 100 };
        Money(rounded as i64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
