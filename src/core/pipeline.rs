use std::num::NonZeroUsize;

use bon::Builder;
use chrono::{DateTime, Local};

use crate::{
    core::{
        decision::{Decision, Rule},
        provider::{LimitPublisher, RateProvider},
        selector::Selector,
    },
    prelude::*,
    tables::build_rates_table,
};

/// One decision run: fetch the rates, decide on the charge limit, and publish it.
#[derive(Builder)]
pub struct Pipeline<'a> {
    provider: &'a dyn RateProvider,
    publisher: &'a dyn LimitPublisher,
    now: DateTime<Local>,
    rank: NonZeroUsize,
    rule: Rule,

    /// Decide without publishing (dry run).
    #[builder(default)]
    scout: bool,
}

impl Pipeline<'_> {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result<Decision> {
        let rates = self.provider.get_rates().await?;
        info!(n_rates = rates.len(), "fetched the rates");

        let selection =
            Selector::builder().rates(&rates).now(self.now).rank(self.rank).build().select()?;
        let decision = Decision::new(selection, self.rule);
        info!(
            low.start = ?decision.low.interval.start,
            low.price = %decision.low.price,
            high.start = ?decision.high.map(|high| high.interval.start),
            high.price = ?decision.high.map(|high| high.price),
            charge_limit = %decision.charge_limit,
            "decided",
        );
        println!("{}", build_rates_table(&rates, self.now, &decision));

        if self.scout {
            warn!("scouting, the charge limit is not published");
        } else {
            self.publisher.publish(decision.charge_limit).await?;
        }
        Ok(decision)
    }
}
