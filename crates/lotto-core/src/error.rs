use crate::lotto::LottoNumber;

/// Errors raised while building or evaluating lotto values.
///
/// Every variant is produced at construction time, so a value that exists is
/// always internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LottoError {
    #[error("Lotto number {0} is out of range (1-45)")]
    InvalidNumber(i64),

    #[error("Invalid number of lotto numbers: expected 6, got {0}")]
    InvalidTicketSize(usize),

    #[error("Duplicate lotto number found: {0}")]
    DuplicateNumber(LottoNumber),

    #[error("Bonus number {0} is already one of the winning numbers")]
    BonusConflict(LottoNumber),

    #[error("Match count {0} does not map to any prize tier")]
    InvalidRank(u32),

    #[error("Purchase amount {amount} cannot buy a single ticket at {price} each")]
    InsufficientAmount { amount: u64, price: u64 },

    #[error("Purchase amount {amount} exceeds the limit of {limit} per run")]
    PurchaseLimitExceeded { amount: u64, limit: u64 },

    #[error("Cannot pick {manual} manual tickets out of {total} purchased")]
    TooManyManualTickets { manual: usize, total: usize },

    #[error("Expected {expected} manual tickets, got {actual}")]
    ManualCountMismatch { expected: usize, actual: usize },

    #[error("Tier counts add up to {counted} but only {purchased} tickets were purchased")]
    InconsistentCounts { counted: usize, purchased: usize },

    #[error("Profit rate is undefined when no tickets were purchased")]
    NoTicketsPurchased,
}

impl LottoError {
    /// Whether the error rejects the shape of a ticket (size or duplicates).
    pub fn is_invalid_ticket(&self) -> bool {
        matches!(self, Self::InvalidTicketSize(_) | Self::DuplicateNumber(_))
    }
}

pub type Result<T, E = LottoError> = std::result::Result<T, E>;
