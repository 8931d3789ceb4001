use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;
use strum_macros::EnumIter;

use super::TICKET_SIZE;
use crate::error::{LottoError, Result};

const WINNING_MIN_COUNT: u32 = 3;

/// Prize tiers, declared from the lowest to the highest reward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum PrizeTier {
    Miss,
    Fifth,
    Fourth,
    Third,
    Second,
    First,
}

/// Winning tiers in resolution order.
///
/// No two rules claim the same (match count, bonus hit) pair: `Second` needs
/// the bonus and `Third` needs it to miss.
pub const RANK_RULES: [PrizeTier; 5] = [
    PrizeTier::Second,
    PrizeTier::First,
    PrizeTier::Third,
    PrizeTier::Fourth,
    PrizeTier::Fifth,
];

impl PrizeTier {
    pub fn match_count(self) -> u32 {
        match self {
            Self::First => 6,
            Self::Second | Self::Third => 5,
            Self::Fourth => 4,
            Self::Fifth => 3,
            Self::Miss => 0,
        }
    }

    pub fn bonus_required(self) -> bool {
        matches!(self, Self::Second)
    }

    /// `Some(hit)` when the tier depends on the bonus number, `None` otherwise.
    pub fn bonus_condition(self) -> Option<bool> {
        match self {
            Self::Second => Some(true),
            Self::Third => Some(false),
            _ => None,
        }
    }

    /// get the prize amount
    pub fn prize(self) -> u64 {
        match self {
            Self::First => 2_000_000_000,
            Self::Second => 30_000_000,
            Self::Third => 1_500_000,
            Self::Fourth => 50_000,
            Self::Fifth => 5_000,
            Self::Miss => 0,
        }
    }

    pub fn is_winning(self) -> bool {
        self != Self::Miss
    }

    /// get the tier description
    pub fn description(self) -> &'static str {
        match self {
            Self::First => "6 matches",
            Self::Second => "5 matches + bonus",
            Self::Third => "5 matches",
            Self::Fourth => "4 matches",
            Self::Fifth => "3 matches",
            Self::Miss => "no match",
        }
    }

    /// Paying tiers, lowest reward first.
    pub fn winning_tiers() -> impl Iterator<Item = Self> {
        Self::iter().filter(|tier| tier.is_winning())
    }

    fn matches(self, match_count: u32, has_bonus: bool) -> bool {
        self.match_count() == match_count
            && self
                .bonus_condition()
                .is_none_or(|required| required == has_bonus)
    }

    /// Resolve a match count and bonus hit to exactly one tier.
    ///
    /// # Errors
    /// [`LottoError::InvalidRank`] when `match_count` exceeds the ticket size.
    pub fn resolve(match_count: u32, has_bonus: bool) -> Result<Self> {
        if match_count as usize > TICKET_SIZE {
            return Err(LottoError::InvalidRank(match_count));
        }
        if match_count < WINNING_MIN_COUNT {
            return Ok(Self::Miss);
        }

        RANK_RULES
            .into_iter()
            .find(|tier| tier.matches(match_count, has_bonus))
            .ok_or(LottoError::InvalidRank(match_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_examples() {
        assert_eq!(PrizeTier::resolve(6, false), Ok(PrizeTier::First));
        assert_eq!(PrizeTier::resolve(6, true), Ok(PrizeTier::First));
        assert_eq!(PrizeTier::resolve(5, true), Ok(PrizeTier::Second));
        assert_eq!(PrizeTier::resolve(5, false), Ok(PrizeTier::Third));
        assert_eq!(PrizeTier::resolve(4, true), Ok(PrizeTier::Fourth));
        assert_eq!(PrizeTier::resolve(3, false), Ok(PrizeTier::Fifth));
        assert_eq!(PrizeTier::resolve(2, true), Ok(PrizeTier::Miss));
        assert_eq!(PrizeTier::resolve(0, false), Ok(PrizeTier::Miss));
    }

    #[test]
    fn test_resolve_invalid_rank() {
        assert_eq!(PrizeTier::resolve(7, false), Err(LottoError::InvalidRank(7)));
        assert_eq!(
            PrizeTier::resolve(u32::MAX, true),
            Err(LottoError::InvalidRank(u32::MAX))
        );
    }

    #[test]
    fn test_resolution_is_total_and_exclusive() {
        for count in 0..=6 {
            for has_bonus in [false, true] {
                let claimed: Vec<_> = RANK_RULES
                    .into_iter()
                    .filter(|tier| tier.matches(count, has_bonus))
                    .collect();
                let resolved = PrizeTier::resolve(count, has_bonus).unwrap();

                if count < WINNING_MIN_COUNT {
                    assert!(claimed.is_empty(), "{count}/{has_bonus} claimed by {claimed:?}");
                    assert_eq!(resolved, PrizeTier::Miss);
                } else {
                    assert_eq!(claimed, [resolved], "claimed ({count}, {has_bonus})");
                }
            }
        }
    }

    #[test]
    fn test_five_matches_split_on_bonus() {
        let with_bonus: Vec<_> = RANK_RULES
            .into_iter()
            .filter(|tier| tier.matches(5, true))
            .collect();
        let without_bonus: Vec<_> = RANK_RULES
            .into_iter()
            .filter(|tier| tier.matches(5, false))
            .collect();

        assert_eq!(with_bonus, [PrizeTier::Second]);
        assert_eq!(without_bonus, [PrizeTier::Third]);
    }

    #[test]
    fn test_rule_order_does_not_matter() {
        for count in WINNING_MIN_COUNT..=6 {
            for has_bonus in [false, true] {
                let reversed = RANK_RULES
                    .into_iter()
                    .rev()
                    .find(|tier| tier.matches(count, has_bonus));
                assert_eq!(reversed, PrizeTier::resolve(count, has_bonus).ok());
            }
        }
    }

    #[test]
    fn test_tiers_are_ordered_by_prize() {
        let tiers: Vec<_> = PrizeTier::iter().collect();
        assert_eq!(tiers.first(), Some(&PrizeTier::Miss));
        assert_eq!(tiers.last(), Some(&PrizeTier::First));
        assert!(tiers.windows(2).all(|w| w[0].prize() < w[1].prize()));
        assert_eq!(PrizeTier::winning_tiers().count(), 5);
    }
}
