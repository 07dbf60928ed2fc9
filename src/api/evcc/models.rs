use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::{
    core::{interval::Interval, rate::RatePoint},
    quantity::rate::KilowattHourRate,
};

/// `GET /api/tariff/grid` body, in any of the shapes served by different evcc versions.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RatesResponse {
    Enveloped { result: Rates },
    Unwrapped(Rates),
    Bare(Vec<Rate>),
}

impl RatesResponse {
    pub fn into_rates(self) -> Vec<Rate> {
        match self {
            Self::Enveloped { result: Rates { rates } } | Self::Unwrapped(Rates { rates }) => {
                rates
            }
            Self::Bare(rates) => rates,
        }
    }
}

#[derive(Deserialize)]
pub struct Rates {
    rates: Vec<Rate>,
}

#[derive(Deserialize)]
pub struct Rate {
    start: DateTime<Local>,
    end: DateTime<Local>,

    #[serde(alias = "value")]
    price: KilowattHourRate,
}

impl From<Rate> for RatePoint {
    fn from(rate: Rate) -> Self {
        Self::new(Interval::new(rate.start, rate.end), rate.price)
    }
}
