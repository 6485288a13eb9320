use crate::cards::Rank;

/// Lowest and highest rank of a hand and whether the five ranks form a run.
///
/// Aces only ever play high: A-2-3-4-5 spans 12 and is not a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub low: Rank,
    pub high: Rank,
    pub is_straight: bool,
}

impl StraightInfo {
    /// `ranks` must be sorted ascending.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let low = ranks[0];
        let high = ranks[4];
        let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
        let is_straight = distinct && high.value() - low.value() == 4;

        StraightInfo { low, high, is_straight }
    }

    /// Difference between the highest and lowest rank value.
    pub fn span(&self) -> u8 {
        self.high.value() - self.low.value()
    }
}
