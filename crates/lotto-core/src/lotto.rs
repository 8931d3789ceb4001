//! Numbers, tickets, the winning draw and its prize tiers.

mod bits;
mod check;
mod number;
mod rank;
mod ticket;

pub use bits::TicketBits;
pub use check::WinningTicket;
pub use number::{LottoNumber, MAX_NUMBER, MIN_NUMBER, POOL_SIZE};
pub use rank::{PrizeTier, RANK_RULES};
pub use ticket::{TICKET_SIZE, Ticket};
