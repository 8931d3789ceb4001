use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator as _;

use crate::TICKET_PRICE;
use crate::error::{LottoError, Result};
use crate::lotto::PrizeTier;

const PROFIT_RATE_SCALE: u32 = 2;

/// Per-tier results of one run and the money they add up to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    counts: BTreeMap<PrizeTier, usize>,
    ticket_count: usize,
}

impl Statistics {
    /// Missing tiers are filled in with zero.
    ///
    /// # Errors
    /// [`LottoError::InconsistentCounts`] when the counts add up to more than `ticket_count`.
    pub fn new(mut counts: BTreeMap<PrizeTier, usize>, ticket_count: usize) -> Result<Self> {
        for tier in PrizeTier::iter() {
            counts.entry(tier).or_insert(0);
        }

        let counted = counts.values().sum::<usize>();
        if counted > ticket_count {
            return Err(LottoError::InconsistentCounts {
                counted,
                purchased: ticket_count,
            });
        }

        Ok(Self {
            counts,
            ticket_count,
        })
    }

    pub fn count(&self, tier: PrizeTier) -> usize {
        self.counts.get(&tier).copied().unwrap_or_default()
    }

    pub fn counts(&self) -> &BTreeMap<PrizeTier, usize> {
        &self.counts
    }

    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    pub fn total_payout(&self) -> u64 {
        self.counts
            .iter()
            .map(|(tier, &count)| tier.prize() * count as u64)
            .sum()
    }

    pub fn total_cost(&self) -> u64 {
        self.ticket_count as u64 * TICKET_PRICE
    }

    /// `total_payout / total_cost`, rounded half-up to two decimal places.
    ///
    /// # Errors
    /// [`LottoError::NoTicketsPurchased`] when nothing was spent.
    pub fn profit_rate(&self) -> Result<Decimal> {
        let cost = self.total_cost();
        if cost == 0 {
            return Err(LottoError::NoTicketsPurchased);
        }

        let mut rate = (Decimal::from(self.total_payout()) / Decimal::from(cost))
            .round_dp_with_strategy(PROFIT_RATE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        // pad exact ratios such as `1` to `1.00`
        rate.rescale(PROFIT_RATE_SCALE);
        Ok(rate)
    }

    /// [`Self::profit_rate`] as a percentage.
    pub fn profit_rate_percent(&self) -> Result<Decimal> {
        Ok(self.profit_rate()? * Decimal::ONE_HUNDRED)
    }
}
