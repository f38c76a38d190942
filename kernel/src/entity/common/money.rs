use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::Quantity;

/// Exact decimal amount. Prices, subtotals and totals all use it so that
/// `59.8 * 3` stays `179.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: impl Into<Decimal>) -> Self {
        Self(amount.into())
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn times(&self, quantity: &Quantity) -> Self {
        Self(self.0 * Decimal::from(*quantity.as_ref()))
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
