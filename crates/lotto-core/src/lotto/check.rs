use serde::Serialize;
use std::fmt::Display;

use crate::error::{LottoError, Result};
use crate::lotto::{LottoNumber, PrizeTier, Ticket};

/// The drawn ticket plus its bonus number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningTicket {
    ticket: Ticket,
    bonus: LottoNumber,
}

impl WinningTicket {
    /// # Errors
    /// [`LottoError::BonusConflict`] when `bonus` is one of the drawn numbers.
    pub fn new(ticket: Ticket, bonus: LottoNumber) -> Result<Self> {
        if ticket.contains(bonus) {
            return Err(LottoError::BonusConflict(bonus));
        }
        Ok(Self { ticket, bonus })
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn bonus(&self) -> LottoNumber {
        self.bonus
    }

    /// Check prize tier
    ///
    /// # Parameters
    /// * `candidate` - Ticket numbers
    ///
    /// # Returns
    /// Returns the prize tier of `candidate` against this draw
    pub fn evaluate(&self, candidate: &Ticket) -> Result<PrizeTier> {
        let match_count = self.ticket.count_matches(candidate);
        let has_bonus = candidate.contains(self.bonus);

        let tier = PrizeTier::resolve(match_count, has_bonus)?;
        log::trace!("{candidate}: {match_count} matches, bonus {has_bonus} -> {tier:?}");
        Ok(tier)
    }

    /// Check multiple tickets against this draw
    pub fn evaluate_multiple(&self, tickets: &[Ticket]) -> Result<Vec<(usize, PrizeTier)>> {
        tickets
            .iter()
            .enumerate()
            .map(|(index, ticket)| self.evaluate(ticket).map(|tier| (index, tier)))
            .collect()
    }
}

impl Display for WinningTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.ticket, self.bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_ticket(values: [i64; 6]) -> Ticket {
        Ticket::from_values(&values).unwrap()
    }

    fn create_winning_ticket() -> WinningTicket {
        WinningTicket::new(
            create_test_ticket([1, 2, 3, 4, 5, 6]),
            LottoNumber::new(7).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_first_prize() {
        let result = create_winning_ticket().evaluate(&create_test_ticket([1, 2, 3, 4, 5, 6]));
        assert_eq!(result, Ok(PrizeTier::First));
        assert_eq!(PrizeTier::First.prize(), 2_000_000_000);
    }

    #[test]
    fn test_second_prize() {
        let result = create_winning_ticket().evaluate(&create_test_ticket([1, 2, 3, 4, 5, 7]));
        assert_eq!(result, Ok(PrizeTier::Second));
        assert_eq!(PrizeTier::Second.prize(), 30_000_000);
    }

    #[test]
    fn test_third_prize() {
        let result = create_winning_ticket().evaluate(&create_test_ticket([1, 2, 3, 4, 5, 8]));
        assert_eq!(result, Ok(PrizeTier::Third));
        assert_eq!(PrizeTier::Third.prize(), 1_500_000);
    }

    #[test]
    fn test_fourth_prize() {
        let result = create_winning_ticket().evaluate(&create_test_ticket([1, 2, 3, 4, 9, 10]));
        assert_eq!(result, Ok(PrizeTier::Fourth));
    }

    #[test]
    fn test_fourth_prize_ignores_bonus() {
        let result = create_winning_ticket().evaluate(&create_test_ticket([1, 2, 3, 4, 7, 10]));
        assert_eq!(result, Ok(PrizeTier::Fourth));
    }

    #[test]
    fn test_fifth_prize() {
        let result =
            create_winning_ticket().evaluate(&create_test_ticket([1, 2, 3, 10, 11, 12]));
        assert_eq!(result, Ok(PrizeTier::Fifth));
        assert_eq!(PrizeTier::Fifth.prize(), 5_000);
    }

    #[test]
    fn test_no_win() {
        let result =
            create_winning_ticket().evaluate(&create_test_ticket([1, 2, 7, 13, 14, 15]));
        assert_eq!(result, Ok(PrizeTier::Miss));
        assert_eq!(PrizeTier::Miss.prize(), 0);
    }

    #[test]
    fn test_bonus_conflict() {
        let bonus = LottoNumber::new(6).unwrap();
        let result = WinningTicket::new(create_test_ticket([1, 2, 3, 4, 5, 6]), bonus);
        assert_eq!(result, Err(LottoError::BonusConflict(bonus)));
    }

    #[test]
    fn test_multiple_tickets_check() {
        let winning_ticket = create_winning_ticket();
        let tickets = vec![
            create_test_ticket([1, 2, 3, 4, 5, 6]),       // First prize
            create_test_ticket([1, 2, 3, 4, 5, 7]),       // Second prize
            create_test_ticket([10, 11, 12, 13, 14, 15]), // No win
        ];

        let results = winning_ticket.evaluate_multiple(&tickets).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], (0, PrizeTier::First));
        assert_eq!(results[1], (1, PrizeTier::Second));
        assert_eq!(results[2], (2, PrizeTier::Miss));
    }

    #[test]
    fn test_display() {
        assert_eq!(create_winning_ticket().to_string(), "[1, 2, 3, 4, 5, 6] + 7");
    }
}
