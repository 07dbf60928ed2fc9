use std::fmt::{Display, Formatter};

use crate::{
    core::{rate::RatePoint, selector::Selection},
    quantity::rate::KilowattHourRate,
};

/// Price ceiling up to which grid charging is authorized.
#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[must_use]
pub struct ChargeLimit(pub KilowattHourRate);

impl ChargeLimit {
    /// Do not charge from the grid.
    pub const ZERO: Self = Self(KilowattHourRate::ZERO);

    /// Limits are published in 0.05 increments.
    const STEPS_PER_UNIT: f64 = 20.0;

    /// Authorize charging at the specified price, rounded up so that it is never under-authorized.
    pub fn at_least(price: KilowattHourRate) -> Self {
        Self(price.ceil_to_fraction(Self::STEPS_PER_UNIT))
    }

    #[must_use]
    pub fn is_charging(self) -> bool {
        self != Self::ZERO
    }
}

/// Shortest decimal representation: `0`, `0.1`, `1.25`.
impl Display for ChargeLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.0.0)
    }
}

/// Tells whether charging at the low price pays off against the later peak.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Rule {
    /// The peak must exceed the low price times the factor.
    Ratio { factor: f64 },

    /// The peak must exceed the low price by more than the delta.
    Difference { delta: KilowattHourRate },
}

impl Rule {
    #[must_use]
    pub fn is_worthwhile(self, low: KilowattHourRate, high: KilowattHourRate) -> bool {
        match self {
            Self::Ratio { factor } => high > low * factor,
            Self::Difference { delta } => high - low > delta,
        }
    }

    pub fn decide(self, low: &RatePoint, high: Option<&RatePoint>) -> ChargeLimit {
        match high {
            Some(high) if self.is_worthwhile(low.price, high.price) => {
                ChargeLimit::at_least(low.price)
            }
            _ => ChargeLimit::ZERO,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Decision {
    pub low: RatePoint,
    pub high: Option<RatePoint>,
    pub charge_limit: ChargeLimit,
}

impl Decision {
    pub fn new(selection: Selection, rule: Rule) -> Self {
        let charge_limit = rule.decide(&selection.low, selection.high.as_ref());
        Self { low: selection.low, high: selection.high, charge_limit }
    }
}
