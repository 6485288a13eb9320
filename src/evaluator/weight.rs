use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Positional radix: one more than the highest rank value.
pub const BASE: u64 = 15;

const fn base_pow(exp: usize) -> u64 {
    BASE.pow(exp as u32)
}

/// Tie-break weight for a hand already known to be in `category`.
/// Weights are only comparable between hands of the same category.
pub fn weight(category: Category, analysis: &HandAnalysis) -> u64 {
    let groups = analysis.rank_groups.iter().enumerate().map(|(position, (rank, count))| {
        (position, u64::from(rank.value()), count)
    });

    match category {
        Category::RoyalFlush => 0,
        Category::StraightFlush | Category::Straight => u64::from(analysis.max_rank().value()),
        Category::Flush | Category::HighCard => analysis
            .ranks
            .iter()
            .enumerate()
            .map(|(i, r)| u64::from(r.value()) * base_pow(i))
            .sum(),
        Category::FourOfAKind => {
            groups.map(|(_, rank, count)| if count == 4 { rank * 100 } else { rank }).sum()
        }
        Category::FullHouse => {
            groups.map(|(_, rank, count)| if count == 3 { rank * 100 } else { rank }).sum()
        }
        Category::ThreeOfAKind => groups
            .map(|(pos, rank, count)| if count == 3 { rank * 10_000 } else { rank * base_pow(pos) })
            .sum(),
        Category::TwoPair => groups
            .map(|(pos, rank, count)| if count == 2 { rank * base_pow(pos) * 100 } else { rank })
            .sum(),
        Category::Pair => groups
            .map(|(pos, rank, count)| {
                if count == 2 {
                    rank * base_pow(5) * 100
                } else {
                    rank * base_pow(pos)
                }
            })
            .sum(),
    }
}
