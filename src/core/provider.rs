use async_trait::async_trait;

use crate::{
    core::{decision::ChargeLimit, rate::RatePoint},
    prelude::*,
};

/// Source of the upcoming tariff rates.
#[async_trait]
pub trait RateProvider: Sync {
    async fn get_rates(&self) -> Result<Vec<RatePoint>>;
}

/// Battery controller accepting the grid charging limit.
#[async_trait]
pub trait LimitPublisher: Sync {
    async fn publish(&self, charge_limit: ChargeLimit) -> Result;
}
