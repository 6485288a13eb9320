use crate::cards::{parse_cards, Card, CardParseError};
use crate::evaluator::{self, ClassifiedHand, EvalError};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Exactly five cards belonging to one player.
///
/// ```
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "AH TH JH QH KH".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert_eq!(hand.to_string(), "AH TH JH QH KH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// Classify this hand; see [`evaluator::classify`].
    pub fn classify(&self) -> Result<ClassifiedHand, EvalError> {
        evaluator::classify(self)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::try_new(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Hand::try_new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
