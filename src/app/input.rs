use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use console::style;
use lotto_core::{LottoNumber, Purchase, Ticket, WinningTicket};

/// Split `" 1, 2,3 ,4,5, 6 "` into numbers.
pub fn parse_numbers(line: &str) -> Result<Vec<i64>> {
    line.split(',')
        .map(str::trim)
        .map(|value| {
            value
                .parse::<i64>()
                .with_context(|| format!("'{value}' is not a number"))
        })
        .collect()
}

pub fn parse_ticket(line: &str) -> Result<Ticket> {
    Ok(Ticket::from_values(&parse_numbers(line)?)?)
}

fn parse_number(line: &str) -> Result<i64> {
    line.trim()
        .parse::<i64>()
        .with_context(|| format!("'{}' is not a number", line.trim()))
}

/// Prompts on `prompt` and reads answers from `reader`, asking again on bad input.
pub struct InputView<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> InputView<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input ended before the run was complete");
        }
        Ok(line)
    }

    fn ask<T>(&mut self, question: &str, mut parse: impl FnMut(&str) -> Result<T>) -> Result<T> {
        loop {
            writeln!(self.prompt, "{question}")?;
            let line = self.read_line()?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("Rejected input {:?}: {e:#}", line.trim());
                    writeln!(self.prompt, "{} {e:#}", style("Invalid input:").red())?;
                }
            }
        }
    }

    pub fn purchase_amount(&mut self) -> Result<u64> {
        self.ask("Enter the purchase amount.", |line| {
            let amount = u64::try_from(parse_number(line)?).context("amount must be positive")?;
            Purchase::affordable(amount)?;
            Ok(amount)
        })
    }

    pub fn manual_count(&mut self, ticket_count: usize) -> Result<usize> {
        self.ask("Enter how many tickets you want to pick manually.", |line| {
            let count =
                usize::try_from(parse_number(line)?).context("count must not be negative")?;
            anyhow::ensure!(
                count <= ticket_count,
                "only {ticket_count} tickets were purchased"
            );
            Ok(count)
        })
    }

    pub fn manual_tickets(&mut self, count: usize) -> Result<Vec<Ticket>> {
        if count > 0 {
            writeln!(self.prompt, "Enter the numbers of your manual tickets.")?;
        }
        (1..=count)
            .map(|i| self.ask(&format!("Manual ticket {i}/{count}:"), parse_ticket))
            .collect()
    }

    pub fn winning_ticket(&mut self) -> Result<Ticket> {
        self.ask("Enter last week's winning numbers.", parse_ticket)
    }

    pub fn bonus_number(&mut self, ticket: Ticket) -> Result<WinningTicket> {
        self.ask("Enter the bonus number.", |line| {
            let bonus = LottoNumber::new(parse_number(line)?)?;
            Ok(WinningTicket::new(ticket, bonus)?)
        })
    }
}
