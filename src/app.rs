pub mod cli;
pub mod config;
pub mod input;
pub mod output;

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use lotto_core::{Generator, LottoNumber, Purchase, Ticket, TicketCollection, WinningTicket};

use config::RunConfig;
use input::InputView;
use output::{OutputFormat, Report};

/// One full run: purchase, draw, statistics.
///
/// Values present in `config` are used as is and abort the run when invalid;
/// everything else is asked for through `input`.
pub fn run<R: BufRead, P: Write, W: Write>(
    config: &RunConfig,
    input: &mut InputView<R, P>,
    out: &mut W,
    format: OutputFormat,
) -> Result<Report> {
    let amount = match config.amount {
        Some(amount) => amount,
        None => input.purchase_amount()?,
    };
    let manual_count = match &config.manual {
        Some(manual) => manual.len(),
        None => input.manual_count(Purchase::affordable(amount)?)?,
    };
    let purchase = Purchase::new(amount, manual_count).context("Invalid purchase")?;
    log::info!(
        "Purchased {} tickets ({} manual)",
        purchase.ticket_count(),
        purchase.manual_count()
    );

    let manual = match &config.manual {
        Some(manual) => manual
            .iter()
            .enumerate()
            .map(|(i, values)| {
                Ticket::from_values(values)
                    .with_context(|| format!("Invalid manual ticket #{}", i + 1))
            })
            .collect::<Result<Vec<_>>>()?,
        None => input.manual_tickets(purchase.manual_count())?,
    };

    let mut generator = Generator::create_generator(Generator::Uniform { seed: config.seed });
    let collection = TicketCollection::purchase(&purchase, manual, generator.as_mut())?;
    if format == OutputFormat::Text {
        output::print_purchase(out, &purchase, &collection)?;
    }

    let winning = winning_ticket(config, input)?;
    log::info!("Winning numbers: {winning}");

    let statistics = collection.evaluate_all(&winning)?;
    let report = Report::new(purchase, &collection, winning, &statistics)?;
    log::debug!(
        "Paid out {} for {} spent",
        report.total_payout,
        report.total_cost
    );

    match format {
        OutputFormat::Text => output::print_statistics(out, &statistics)?,
        OutputFormat::Json => output::print_json(out, &report)?,
    }
    Ok(report)
}

fn winning_ticket<R: BufRead, P: Write>(
    config: &RunConfig,
    input: &mut InputView<R, P>,
) -> Result<WinningTicket> {
    let ticket = match &config.winning {
        Some(values) => Ticket::from_values(values).context("Invalid winning numbers")?,
        None => input.winning_ticket()?,
    };

    match config.bonus {
        Some(bonus) => {
            let bonus = LottoNumber::new(bonus).context("Invalid bonus number")?;
            WinningTicket::new(ticket, bonus).context("Invalid bonus number")
        }
        None => input.bonus_number(ticket),
    }
}
