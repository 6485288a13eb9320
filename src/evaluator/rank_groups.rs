use crate::cards::Rank;

/// Rank → count for a hand, kept in ascending rank order.
///
/// Example: K-A-A-A-Q groups as [(Queen, 1), (King, 1), (Ace, 3)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let groups = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        Self { groups }
    }

    /// Number of distinct ranks.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if some rank appears exactly `count` times.
    pub fn has_count(&self, count: u8) -> bool {
        self.groups.iter().any(|(_, c)| *c == count)
    }

    /// Groups in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.groups.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn test_quad() {
        let counts = make_counts(&[(14, 4), (13, 1)]); // AAAAK
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.len(), 2);
        assert!(groups.has_count(4));
        assert!(!groups.has_count(3));
    }

    #[test]
    fn test_full_house() {
        let counts = make_counts(&[(14, 3), (13, 2)]); // AAAKK
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.len(), 2);
        assert!(groups.has_count(3));
        assert!(groups.has_count(2));
    }

    #[test]
    fn test_two_pair() {
        let counts = make_counts(&[(14, 2), (13, 2), (10, 1)]); // AAKKT
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.len(), 3);
        assert!(groups.has_count(2));
        assert!(!groups.has_count(3));
    }

    #[test]
    fn test_high_card() {
        let counts = make_counts(&[(14, 1), (10, 1), (7, 1), (5, 1), (2, 1)]); // AT752
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.len(), 5);
        assert!(groups.has_count(1));
        assert!(!groups.has_count(2));
    }

    #[test]
    fn test_ascending_order() {
        let counts = make_counts(&[(5, 1), (14, 2), (10, 2)]);
        let groups = RankGroups::from_counts(&counts);
        let got: Vec<(Rank, u8)> = groups.iter().collect();
        assert_eq!(got, vec![(Rank::Five, 1), (Rank::Ten, 2), (Rank::Ace, 2)]);
    }
}
