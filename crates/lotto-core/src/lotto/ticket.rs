use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{LottoNumber, TicketBits};
use crate::error::{LottoError, Result};

pub const TICKET_SIZE: usize = 6;

/// One lotto entry: six distinct numbers, kept in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<LottoNumber>", into = "Vec<LottoNumber>")]
pub struct Ticket {
    numbers: [LottoNumber; TICKET_SIZE],
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}, {}, {}]",
            self.numbers[0],
            self.numbers[1],
            self.numbers[2],
            self.numbers[3],
            self.numbers[4],
            self.numbers[5]
        )
    }
}

impl Ticket {
    /// Build a ticket from exactly six distinct numbers, in any order.
    ///
    /// # Errors
    /// [`LottoError::InvalidTicketSize`] for any other length,
    /// [`LottoError::DuplicateNumber`] when a number repeats.
    pub fn new(numbers: &[LottoNumber]) -> Result<Self> {
        let mut numbers: [LottoNumber; TICKET_SIZE] = numbers
            .try_into()
            .map_err(|_e| LottoError::InvalidTicketSize(numbers.len()))?;

        numbers.sort_unstable();
        if let Some(w) = numbers.windows(2).find(|w| w[0] == w[1]) {
            return Err(LottoError::DuplicateNumber(w[0]));
        }

        Ok(Self { numbers })
    }

    /// Validate raw values as numbers, then as a ticket.
    pub fn from_values(values: &[i64]) -> Result<Self> {
        let numbers = values
            .iter()
            .map(|&v| LottoNumber::new(v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&numbers)
    }

    /// Wrap numbers already known to be ascending and distinct.
    pub(crate) fn from_sorted_unique(numbers: [LottoNumber; TICKET_SIZE]) -> Self {
        debug_assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "numbers must be strictly ascending"
        );
        Self { numbers }
    }

    pub fn numbers(&self) -> &[LottoNumber; TICKET_SIZE] {
        &self.numbers
    }

    pub fn contains(&self, number: LottoNumber) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Number of values this ticket shares with `other`.
    pub fn count_matches(&self, other: &Self) -> u32 {
        self.bits().shared_ones(&other.bits())
    }

    pub fn bits(&self) -> TicketBits {
        TicketBits::from_ticket(self)
    }
}

impl TryFrom<Vec<LottoNumber>> for Ticket {
    type Error = LottoError;

    fn try_from(numbers: Vec<LottoNumber>) -> Result<Self> {
        Self::new(&numbers)
    }
}

impl From<Ticket> for Vec<LottoNumber> {
    fn from(ticket: Ticket) -> Self {
        ticket.numbers.to_vec()
    }
}
