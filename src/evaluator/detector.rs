use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Category;

/// Categories in the order they are checked. The first match wins. Priority
/// comes from this list, not from category strength: Flush and Straight are
/// checked before FourOfAKind and FullHouse.
pub const DETECTION_ORDER: [Category; 10] = [
    Category::RoyalFlush,
    Category::StraightFlush,
    Category::Flush,
    Category::Straight,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::Pair,
    Category::HighCard,
];

/// Whether `analysis` satisfies the predicate for `category` on its own,
/// ignoring the categories checked before it.
pub fn satisfies(category: Category, analysis: &HandAnalysis) -> bool {
    let distinct = analysis.distinct_ranks();
    let groups = &analysis.rank_groups;
    let run = analysis.straight_info.is_straight;

    match category {
        Category::RoyalFlush => {
            run && analysis.is_single_suit() && analysis.max_rank() == Rank::Ace
        }
        Category::StraightFlush => run && analysis.is_single_suit(),
        Category::Flush => analysis.is_single_suit() && analysis.straight_info.span() > 4,
        Category::Straight => run && !analysis.is_single_suit(),
        Category::FourOfAKind => groups.has_count(4),
        Category::FullHouse => distinct == 2 && groups.has_count(2),
        Category::ThreeOfAKind => distinct == 3 && groups.has_count(3),
        Category::TwoPair => distinct == 3 && groups.has_count(2),
        Category::Pair => distinct == 4,
        Category::HighCard => distinct == 5,
    }
}

/// Returns the strongest matching category, or `None` when no predicate holds.
pub fn detect(analysis: &HandAnalysis) -> Option<Category> {
    DETECTION_ORDER.iter().copied().find(|&category| satisfies(category, analysis))
}
