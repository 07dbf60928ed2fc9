use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Currency per kilowatt-hour.
///
/// Tariffs may go negative, so no sign is assumed anywhere.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
)]
#[from(f64, OrderedFloat<f64>)]
#[must_use]
pub struct KilowattHourRate(pub OrderedFloat<f64>);

impl KilowattHourRate {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    /// Round up to the nearest multiple of `1 / steps_per_unit`.
    pub fn ceil_to_fraction(self, steps_per_unit: f64) -> Self {
        // Adding zero turns `-0.0` into `0.0`:
        Self(OrderedFloat((self.0.0 * steps_per_unit).ceil() / steps_per_unit + 0.0))
    }
}

impl Mul<f64> for KilowattHourRate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}/kWh", self.0)
    }
}
