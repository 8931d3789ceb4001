//! Domain model of the lotto simulator: numbers, tickets, the winning draw,
//! prize tiers, purchases and the statistics of a run.

pub mod collection;
pub mod error;
pub mod generator;
pub mod lotto;
pub mod purchase;
pub mod statistics;

pub use collection::TicketCollection;
pub use error::{LottoError, Result};
pub use generator::{Generator, NumberGenerator};
pub use lotto::{LottoNumber, PrizeTier, Ticket, WinningTicket};
pub use purchase::Purchase;
pub use statistics::Statistics;

/// Price of a single ticket, in currency units.
pub const TICKET_PRICE: u64 = 1_000;
/// Most tickets a single run may buy.
pub const MAX_TICKETS: u64 = 100_000;
