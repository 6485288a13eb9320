//! poker-hands: five-card poker hand classification
//!
//! Goals:
//! - Classify any five cards into one of ten categories, high card to royal flush
//! - Break ties inside a category with a deterministic integer weight
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! Aces always play high; A-2-3-4-5 is not a straight.
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_hands::evaluator::Category;
//! use poker_hands::hand::Hand;
//!
//! let a: Hand = "2C 3C 4C 5C 6C".parse().unwrap();
//! let b: Hand = "5D 6D 7D 8D 9D".parse().unwrap();
//!
//! let a = a.classify().unwrap();
//! let b = b.classify().unwrap();
//! assert_eq!(a.category, Category::StraightFlush);
//! assert!(a < b);
//! ```
//!
//! ## CLI
//! Tally a file of rounds (ten cards per line, five per player) with:
//! ```sh
//! cargo run --bin poker-hands -- rounds.txt
//! ```

pub mod cards;
pub mod evaluator;
pub mod hand;
pub mod rounds;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
