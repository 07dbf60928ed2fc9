use chrono::{DateTime, Local};

use crate::{core::interval::Interval, quantity::rate::KilowattHourRate};

/// Tariff price valid for one time interval.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Constructor)]
pub struct RatePoint {
    pub interval: Interval,
    pub price: KilowattHourRate,
}

impl RatePoint {
    pub const fn start(&self) -> DateTime<Local> {
        self.interval.start
    }
}
