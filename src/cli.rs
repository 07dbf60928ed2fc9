mod hunt;

use std::num::NonZeroUsize;

use clap::Parser;
use reqwest::Url;

pub use self::hunt::hunt;
use crate::{
    api::{client, evcc},
    core::decision::Rule,
    prelude::*,
    quantity::rate::KilowattHourRate,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub evcc: EvccArgs,

    #[clap(flatten)]
    pub decision: DecisionArgs,

    /// Do not push the charge limit to evcc (dry run).
    #[clap(long)]
    pub scout: bool,
}

#[derive(Parser)]
pub struct EvccArgs {
    /// evcc base URL. For example: `http://localhost:7070`.
    #[clap(long = "evcc-url", env = "EVCC_URL")]
    pub base_url: Url,

    /// Tariff rates URL, defaults to the evcc grid tariff.
    #[clap(long = "rates-url", env = "RATES_URL")]
    pub rates_url: Option<Url>,

    /// Timeout of each HTTP request.
    #[clap(long = "timeout", env = "HTTP_TIMEOUT", default_value = "10s")]
    pub timeout: humantime::Duration,
}

impl EvccArgs {
    pub fn new_client(&self) -> Result<evcc::Api> {
        evcc::Api::new(
            client::try_new(self.timeout.into())?,
            self.base_url.clone(),
            self.rates_url.clone(),
        )
    }
}

#[derive(Parser)]
pub struct DecisionArgs {
    /// Rank of the upcoming rate to charge at: it takes about four hours to charge the battery,
    /// hence the fifth cheapest by default.
    #[clap(long, env = "RANK", default_value = "5")]
    pub rank: NonZeroUsize,

    #[clap(long, env = "RULE", default_value = "ratio")]
    pub rule: RuleKind,

    /// Minimal ratio between the later peak and the charging rate.
    #[clap(long, env = "RATIO", default_value = "2")]
    pub ratio: f64,

    /// Minimal difference between the later peak and the charging rate.
    #[clap(long = "threshold-delta", env = "THRESHOLD_DELTA", default_value = "2")]
    pub threshold_delta: KilowattHourRate,
}

impl DecisionArgs {
    pub const fn rule(&self) -> Rule {
        match self.rule {
            RuleKind::Ratio => Rule::Ratio { factor: self.ratio },
            RuleKind::Difference => Rule::Difference { delta: self.threshold_delta },
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum RuleKind {
    /// Charge when the peak exceeds the charging rate times `--ratio`.
    Ratio,

    /// Charge when the peak exceeds the charging rate by more than `--threshold-delta`.
    Difference,
}
