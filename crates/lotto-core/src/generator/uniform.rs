use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::{Rng, SeedableRng as _};

use super::{NumberGenerator, Ticket};
use crate::lotto::{LottoNumber, TICKET_SIZE};

/// Draws six distinct numbers uniformly from the whole pool, without replacement.
pub struct UniformGenerator<R> {
    rng: R,
}

impl UniformGenerator<StdRng> {
    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        log::debug!("Generating tickets with seed {seed}");
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberGenerator for UniformGenerator<R> {
    fn generate(&mut self) -> Ticket {
        let mut numbers = [LottoNumber::all()[0]; TICKET_SIZE];
        for (slot, &number) in numbers
            .iter_mut()
            .zip(LottoNumber::all().choose_multiple(&mut self.rng, TICKET_SIZE))
        {
            *slot = number;
        }
        numbers.sort_unstable();

        Ticket::from_sorted_unique(numbers)
    }
}
