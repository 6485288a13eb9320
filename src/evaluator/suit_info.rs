use crate::cards::{Card, Suit};

/// How many different suits a hand holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub distinct_suits: usize,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let distinct_suits =
            Suit::ALL.iter().filter(|&&s| cards.iter().any(|c| c.suit() == s)).count();

        SuitInfo { distinct_suits }
    }

    pub fn is_single_suit(&self) -> bool {
        self.distinct_suits == 1
    }
}
