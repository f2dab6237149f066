use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-rupee amount. Fares are quoted without paise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u32);

impl Money {
    pub const CURRENCY: &'static str = "INR";
    pub const SYMBOL: &'static str = "₹";

    pub fn amount(self) -> u32 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.0)
    }
}
