use serde::Serialize;

use crate::{MAX_TICKETS, TICKET_PRICE};
use crate::error::{LottoError, Result};

/// Money handed over for one run and how it splits into tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Purchase {
    amount: u64,
    ticket_count: usize,
    manual_count: usize,
}

impl Purchase {
    /// # Errors
    /// [`LottoError::InsufficientAmount`] when `amount` buys no ticket,
    /// [`LottoError::PurchaseLimitExceeded`] when it buys more than [`MAX_TICKETS`],
    /// [`LottoError::TooManyManualTickets`] when `manual_count` exceeds what was bought.
    pub fn new(amount: u64, manual_count: usize) -> Result<Self> {
        let ticket_count = Self::affordable(amount)?;
        if manual_count > ticket_count {
            return Err(LottoError::TooManyManualTickets {
                manual: manual_count,
                total: ticket_count,
            });
        }

        let purchase = Self {
            amount,
            ticket_count,
            manual_count,
        };
        if purchase.change() > 0 {
            log::warn!(
                "{} of {amount} is left over as change",
                purchase.change()
            );
        }
        Ok(purchase)
    }

    /// Tickets `amount` can pay for.
    ///
    /// # Errors
    /// [`LottoError::InsufficientAmount`] when not even one ticket is affordable,
    /// [`LottoError::PurchaseLimitExceeded`] past [`MAX_TICKETS`].
    pub fn affordable(amount: u64) -> Result<usize> {
        if amount < TICKET_PRICE {
            return Err(LottoError::InsufficientAmount {
                amount,
                price: TICKET_PRICE,
            });
        }
        let limit = MAX_TICKETS * TICKET_PRICE;
        let tickets = amount / TICKET_PRICE;
        if tickets > MAX_TICKETS {
            return Err(LottoError::PurchaseLimitExceeded { amount, limit });
        }
        usize::try_from(tickets).map_err(|_e| LottoError::PurchaseLimitExceeded { amount, limit })
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    pub fn manual_count(&self) -> usize {
        self.manual_count
    }

    pub fn auto_count(&self) -> usize {
        self.ticket_count - self.manual_count
    }

    pub fn spent(&self) -> u64 {
        self.amount - self.change()
    }

    pub fn change(&self) -> u64 {
        self.amount % TICKET_PRICE
    }
}
