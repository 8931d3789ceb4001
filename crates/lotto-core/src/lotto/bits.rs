use super::{LottoNumber, MIN_NUMBER, Ticket};

/// one-hot bits display for a ticket
/// bit `n - 1` is set for every number `n` on the ticket
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TicketBits {
    bits: u64,
}

impl TicketBits {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        let bits = ticket
            .numbers()
            .iter()
            .fold(0u64, |bits, &n| bits | Self::bit(n));
        Self { bits }
    }

    fn bit(number: LottoNumber) -> u64 {
        1u64 << u32::from(number.value() - MIN_NUMBER)
    }

    pub fn contains(&self, number: LottoNumber) -> bool {
        self.bits & Self::bit(number) != 0
    }

    /// shared ones: 0-6
    pub fn shared_ones(&self, other: &Self) -> u32 {
        (self.bits & other.bits).count_ones()
    }

    #[cfg(test)]
    fn bits(&self) -> u64 {
        self.bits
    }
}
