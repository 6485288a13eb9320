pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod weight;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use std::fmt;

pub use weight::BASE;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Strength of the category, 1 (high card) to 10 (royal flush).
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand bound to its category and tie-break weight.
/// Ordering and equality look at `(category, weight)` only, never at the cards.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct ClassifiedHand {
    pub category: Category,
    hand: Hand,
    weight: u64,
}

impl ClassifiedHand {
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Tie-break weight; only meaningful against hands of the same category.
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    /// Compare by category first, then by weight.
    pub fn compare(&self, other: &ClassifiedHand) -> Ordering {
        self.cmp(other)
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then(self.weight.cmp(&other.weight))
    }
}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ClassifiedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ClassifiedHand {}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = *self.hand.cards();
        cards.sort();
        let hand = Hand::new(cards);
        write!(f, "{hand} {} (weight {})", self.category, self.weight)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("hand matches no category: {0}")]
    UnclassifiableHand(Hand),
}

/// Classify a five-card hand: detect its category, then weigh it.
///
/// ```
/// use poker_hands::evaluator::{classify, Category};
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "2C 2D KH QD JH".parse().unwrap();
/// let classified = classify(&hand).unwrap();
/// assert_eq!(classified.category, Category::Pair);
/// ```
pub fn classify(hand: &Hand) -> Result<ClassifiedHand, EvalError> {
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(hand.cards());
    let category = detector::detect(&analysis).ok_or(EvalError::UnclassifiableHand(*hand))?;
    let weight = weight::weight(category, &analysis);

    Ok(ClassifiedHand { category, hand: *hand, weight })
}

/// Classify a slice of cards, checking first that it holds exactly five.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::{classify_cards, EvalError};
/// use poker_hands::hand::HandError;
///
/// let cards = parse_cards("AH KH").unwrap();
/// let err = classify_cards(&cards).unwrap_err();
/// assert_eq!(err, EvalError::InvalidHand(HandError::InvalidHandSize(2)));
/// ```
pub fn classify_cards(cards: &[Card]) -> Result<ClassifiedHand, EvalError> {
    let hand = Hand::try_new(cards)?;
    classify(&hand)
}

/// Classify two hands and compare them.
///
/// ```
/// use poker_hands::evaluator::compare;
/// use poker_hands::hand::Hand;
/// use std::cmp::Ordering;
///
/// let a: Hand = "4C 4D 4H 4S AD".parse().unwrap();
/// let b: Hand = "5D 5H 5S 5C 2H".parse().unwrap();
/// assert_eq!(compare(&a, &b).unwrap(), Ordering::Less);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Result<Ordering, EvalError> {
    let ca = classify(a)?;
    let cb = classify(b)?;
    Ok(ca.compare(&cb))
}
