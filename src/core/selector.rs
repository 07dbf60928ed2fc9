use std::{cmp::Reverse, num::NonZeroUsize};

use bon::Builder;
use chrono::{DateTime, Local};
use itertools::Itertools;

use crate::{core::rate::RatePoint, prelude::*};

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
#[display("not enough upcoming rates: {available} available, at least {required} required")]
pub struct InsufficientData {
    pub required: usize,
    pub available: usize,
}

/// Charging reference and the peak that follows it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Selection {
    /// Rank-th cheapest upcoming rate.
    pub low: RatePoint,

    /// Most expensive rate starting after [`Selection::low`], if any.
    pub high: Option<RatePoint>,
}

#[derive(Builder)]
pub struct Selector<'a> {
    /// Rates in arrival order, not necessarily sorted.
    rates: &'a [RatePoint],

    /// Rates starting at or before this moment are ignored.
    now: DateTime<Local>,

    /// Charging takes a few hours, so the rank-th cheapest rate stands in for the cheapest
    /// charging window. Contiguity of that window is not checked.
    rank: NonZeroUsize,
}

impl Selector<'_> {
    #[instrument(skip_all, fields(rank = self.rank.get()))]
    pub fn select(self) -> Result<Selection, InsufficientData> {
        let upcoming = self.rates.iter().filter(|point| point.start() > self.now).collect_vec();
        let required = self.rank.get();
        debug!(n_upcoming = upcoming.len(), "filtered");

        let low = **upcoming
            .iter()
            .sorted_by_key(|point| (point.price, point.start()))
            .nth(required - 1)
            .ok_or(InsufficientData { required, available: upcoming.len() })?;

        // Equal peaks resolve to the earliest one:
        let high = upcoming
            .iter()
            .filter(|point| point.start() > low.start())
            .max_by_key(|point| (point.price, Reverse(point.start())))
            .map(|point| **point);

        Ok(Selection { low, high })
    }
}
