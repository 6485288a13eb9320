use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by every category check and the weight formula.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted ascending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = cards.map(Card::rank);
        ranks.sort_unstable();

        let mut rank_counts = [0u8; 15];
        for &rank in ranks.iter() {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }

    pub fn distinct_ranks(&self) -> usize {
        self.rank_groups.len()
    }

    pub fn is_single_suit(&self) -> bool {
        self.suit_info.is_single_suit()
    }

    pub fn max_rank(&self) -> Rank {
        self.straight_info.high
    }
}
