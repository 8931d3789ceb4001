use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{LottoError, Result};

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Every valid number, indexed by `value - MIN_NUMBER`.
static NUMBER_POOL: [LottoNumber; POOL_SIZE] = {
    let mut pool = [LottoNumber(MIN_NUMBER); POOL_SIZE];
    let mut i = 0;
    while i < POOL_SIZE {
        pool[i] = LottoNumber(MIN_NUMBER + i as u8);
        i += 1;
    }
    pool
};

/// A single lotto number in `1..=45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct LottoNumber(u8);

impl LottoNumber {
    /// Look up the canonical number for `value`.
    ///
    /// # Errors
    /// [`LottoError::InvalidNumber`] when `value` is outside `1..=45`.
    pub fn new(value: i64) -> Result<Self> {
        let index = value
            .checked_sub(i64::from(MIN_NUMBER))
            .and_then(|i| usize::try_from(i).ok())
            .ok_or(LottoError::InvalidNumber(value))?;
        NUMBER_POOL
            .get(index)
            .copied()
            .ok_or(LottoError::InvalidNumber(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The full pool, ascending.
    pub fn all() -> &'static [Self; POOL_SIZE] {
        &NUMBER_POOL
    }
}

impl TryFrom<i64> for LottoNumber {
    type Error = LottoError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LottoNumber> for u8 {
    fn from(number: LottoNumber) -> Self {
        number.0
    }
}

impl Display for LottoNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
