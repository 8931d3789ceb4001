use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use console::style;
use lotto_core::{
    LottoNumber, PrizeTier, Purchase, Statistics, Ticket, TicketCollection, WinningTicket,
};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub purchase: Purchase,
    pub tickets: Vec<Ticket>,
    pub winning: WinningTicket,
    pub bonus: LottoNumber,
    pub counts: BTreeMap<PrizeTier, usize>,
    pub total_payout: u64,
    pub total_cost: u64,
    pub profit_rate: Decimal,
}

impl Report {
    pub fn new(
        purchase: Purchase,
        collection: &TicketCollection,
        winning: WinningTicket,
        statistics: &Statistics,
    ) -> Result<Self> {
        Ok(Self {
            purchase,
            tickets: collection.tickets().to_vec(),
            winning,
            bonus: winning.bonus(),
            counts: statistics.counts().clone(),
            total_payout: statistics.total_payout(),
            total_cost: statistics.total_cost(),
            profit_rate: statistics.profit_rate()?,
        })
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn print_purchase<W: Write>(
    out: &mut W,
    purchase: &Purchase,
    collection: &TicketCollection,
) -> Result<()> {
    writeln!(
        out,
        "Bought {} manual and {} automatic tickets.",
        collection.manual_count(),
        collection.auto_count()
    )?;
    if purchase.change() > 0 {
        writeln!(out, "Change: {}", group_thousands(purchase.change()))?;
    }
    for ticket in collection {
        writeln!(out, "{ticket}")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn print_statistics<W: Write>(out: &mut W, statistics: &Statistics) -> Result<()> {
    writeln!(out, "Winning statistics")?;
    writeln!(out, "---------")?;
    for tier in PrizeTier::winning_tiers() {
        let count = statistics.count(tier);
        let line = format!(
            "{} ({} won) - {count} tickets",
            tier.description(),
            group_thousands(tier.prize())
        );
        if count > 0 {
            writeln!(out, "{}", style(line).green())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    let rate = statistics.profit_rate()?;
    let summary = format!(
        "Total profit rate is {rate} ({}%).",
        statistics.profit_rate_percent()?
    );
    if rate < Decimal::ONE {
        writeln!(out, "{} (below 1 means a loss)", style(summary).red())?;
    } else {
        writeln!(out, "{}", style(summary).green().bold())?;
    }
    Ok(())
}

pub fn print_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
