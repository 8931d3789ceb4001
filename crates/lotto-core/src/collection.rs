use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator as _;

use crate::error::{LottoError, Result};
use crate::generator::NumberGenerator;
use crate::lotto::{PrizeTier, Ticket, WinningTicket};
use crate::purchase::Purchase;
use crate::statistics::Statistics;

/// Tickets bought in one run, manual picks first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketCollection {
    tickets: Vec<Ticket>,
    manual_count: usize,
}

impl TicketCollection {
    pub fn build(
        manual: Vec<Ticket>,
        auto_count: usize,
        generator: &mut dyn NumberGenerator,
    ) -> Self {
        let manual_count = manual.len();
        let mut tickets = manual;
        tickets.reserve(auto_count);
        tickets.extend(generator.generate_many(auto_count));
        log::debug!("Collected {manual_count} manual and {auto_count} automatic tickets");

        Self {
            tickets,
            manual_count,
        }
    }

    /// Build the collection a [`Purchase`] paid for.
    ///
    /// # Errors
    /// [`LottoError::ManualCountMismatch`] when `manual` differs from the purchased manual count.
    pub fn purchase(
        purchase: &Purchase,
        manual: Vec<Ticket>,
        generator: &mut dyn NumberGenerator,
    ) -> Result<Self> {
        if manual.len() != purchase.manual_count() {
            return Err(LottoError::ManualCountMismatch {
                expected: purchase.manual_count(),
                actual: manual.len(),
            });
        }
        Ok(Self::build(manual, purchase.auto_count(), generator))
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn manual_count(&self) -> usize {
        self.manual_count
    }

    pub fn auto_count(&self) -> usize {
        self.tickets.len() - self.manual_count
    }

    /// Count tickets per tier against `winning`; every tier is present.
    pub fn evaluate_all(&self, winning: &WinningTicket) -> Result<Statistics> {
        let mut counts: BTreeMap<PrizeTier, usize> =
            PrizeTier::iter().map(|tier| (tier, 0)).collect();

        for (_, tier) in winning.evaluate_multiple(&self.tickets)? {
            *counts.entry(tier).or_insert(0) += 1;
        }

        Statistics::new(counts, self.tickets.len())
    }
}

impl<'a> IntoIterator for &'a TicketCollection {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::uniform::UniformGenerator;
    use crate::lotto::LottoNumber;

    fn create_test_ticket(values: [i64; 6]) -> Ticket {
        Ticket::from_values(&values).unwrap()
    }

    fn winning() -> WinningTicket {
        WinningTicket::new(
            create_test_ticket([1, 2, 3, 4, 5, 6]),
            LottoNumber::new(7).unwrap(),
        )
        .unwrap()
    }

    /// Replays fixed tickets.
    struct Replay(Vec<Ticket>);

    impl NumberGenerator for Replay {
        fn generate(&mut self) -> Ticket {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_manual_tickets_come_first() {
        let manual = vec![create_test_ticket([40, 41, 42, 43, 44, 45])];
        let auto = create_test_ticket([1, 2, 3, 4, 5, 6]);
        let collection = TicketCollection::build(manual.clone(), 1, &mut Replay(vec![auto]));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.manual_count(), 1);
        assert_eq!(collection.auto_count(), 1);
        assert_eq!(collection.tickets(), &[manual[0], auto]);
    }

    #[test]
    fn test_purchase_builds_auto_tickets() {
        let purchase = Purchase::new(5_000, 2).unwrap();
        let manual = vec![
            create_test_ticket([1, 2, 3, 4, 5, 6]),
            create_test_ticket([7, 8, 9, 10, 11, 12]),
        ];
        let collection =
            TicketCollection::purchase(&purchase, manual, &mut UniformGenerator::seeded(1))
                .unwrap();
        assert_eq!(collection.len(), 5);
        assert_eq!(collection.auto_count(), 3);
    }

    #[test]
    fn test_purchase_manual_mismatch() {
        let purchase = Purchase::new(5_000, 2).unwrap();
        let result = TicketCollection::purchase(&purchase, vec![], &mut UniformGenerator::seeded(1));
        assert_eq!(
            result,
            Err(LottoError::ManualCountMismatch {
                expected: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn test_evaluate_all_counts_every_tier() {
        let manual = vec![
            create_test_ticket([1, 2, 3, 4, 5, 6]),       // First
            create_test_ticket([1, 2, 3, 4, 5, 7]),       // Second
            create_test_ticket([1, 2, 3, 4, 5, 8]),       // Third
            create_test_ticket([1, 2, 3, 4, 5, 9]),       // Third
            create_test_ticket([1, 2, 3, 10, 11, 12]),    // Fifth
            create_test_ticket([20, 21, 22, 23, 24, 25]), // Miss
        ];
        let collection = TicketCollection::build(manual, 0, &mut Replay(vec![]));
        let statistics = collection.evaluate_all(&winning()).unwrap();

        assert_eq!(statistics.count(PrizeTier::First), 1);
        assert_eq!(statistics.count(PrizeTier::Second), 1);
        assert_eq!(statistics.count(PrizeTier::Third), 2);
        assert_eq!(statistics.count(PrizeTier::Fourth), 0);
        assert_eq!(statistics.count(PrizeTier::Fifth), 1);
        assert_eq!(statistics.count(PrizeTier::Miss), 1);
        assert_eq!(statistics.counts().len(), 6);
        assert_eq!(statistics.ticket_count(), 6);
    }

    #[test]
    fn test_evaluate_all_empty() {
        let collection = TicketCollection::build(vec![], 0, &mut Replay(vec![]));
        let statistics = collection.evaluate_all(&winning()).unwrap();
        assert!(collection.is_empty());
        assert_eq!(statistics.counts().values().sum::<usize>(), 0);
        assert_eq!(statistics.profit_rate(), Err(LottoError::NoTicketsPurchased));
    }
}
