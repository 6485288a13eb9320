//! Two-player rounds: one line of ten cards, five per player.
use crate::cards::parse_cards;
use crate::evaluator::{compare, EvalError};
use crate::hand::{Hand, HandError, HAND_SIZE};
use core::cmp::Ordering;
use log::{debug, info, warn};
use std::fmt;
use std::io::{self, BufRead};
use std::str::{FromStr, Utf8Error};

/// Seat in a round: player one holds the first five cards of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("expected ten cards, got {0}")]
    TokenCount(usize),
    #[error("invalid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// One head-to-head round.
///
/// ```
/// use poker_hands::rounds::{Player, Round};
///
/// let round: Round = "AH TH JH QH KH 2C 3C 4C 5C 7C".parse().unwrap();
/// assert_eq!(round.winner().unwrap(), Some(Player::One));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub first: Hand,
    pub second: Hand,
}

impl Round {
    /// The winning player, or `None` when both hands are equal.
    pub fn winner(&self) -> Result<Option<Player>, EvalError> {
        let winner = match compare(&self.first, &self.second)? {
            Ordering::Greater => Some(Player::One),
            Ordering::Less => Some(Player::Two),
            Ordering::Equal => None,
        };
        Ok(winner)
    }
}

impl FromStr for Round {
    type Err = RoundError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().count();
        if tokens != 2 * HAND_SIZE {
            return Err(RoundError::TokenCount(tokens));
        }
        let cards = parse_cards(s).map_err(HandError::from)?;
        let (first, second) = cards.split_at(HAND_SIZE);
        Ok(Round { first: Hand::try_new(first)?, second: Hand::try_new(second)? })
    }
}

/// What to do with a line that cannot be parsed or classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnInvalid {
    /// Stop and report the line.
    #[default]
    Abort,
    /// Log a warning and carry on.
    Skip,
}

/// Win counts over many rounds. Ties go to neither player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub player_one: u64,
    pub player_two: u64,
    pub ties: u64,
    pub skipped: u64,
}

impl Tally {
    pub fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::One) => self.player_one = self.player_one.saturating_add(1),
            Some(Player::Two) => self.player_two = self.player_two.saturating_add(1),
            None => self.ties = self.ties.saturating_add(1),
        }
    }

    /// Rounds that produced a result. Saturates rather than wrapping.
    pub fn rounds(&self) -> u64 {
        self.player_one.saturating_add(self.player_two).saturating_add(self.ties)
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TallyError {
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: RoundError,
    },
}

/// Plays one raw line. `Ok(None)` for a blank line.
fn play(raw: &[u8]) -> Result<Option<(Round, Option<Player>)>, RoundError> {
    let line = std::str::from_utf8(raw)?;
    if line.trim().is_empty() {
        return Ok(None);
    }
    let round: Round = line.parse()?;
    let winner = round.winner()?;
    Ok(Some((round, winner)))
}

/// Play every round in `reader`, one per line. Blank lines are ignored.
///
/// Lines are read as bytes so that a line with invalid UTF-8 goes through
/// `on_invalid` like any other malformed line. Only read failures surface as
/// [`TallyError::Io`].
///
/// ```
/// use poker_hands::rounds::{tally_reader, OnInvalid};
///
/// let input = "AH TH JH QH KH 2C 3C 4C 5C 7C\n\n2C 3D 4H 5S 7C 2H 2S AD 5C 4D\n";
/// let tally = tally_reader(input.as_bytes(), OnInvalid::Abort).unwrap();
/// assert_eq!((tally.player_one, tally.player_two), (1, 1));
/// ```
pub fn tally_reader<R: BufRead>(reader: R, on_invalid: OnInvalid) -> Result<Tally, TallyError> {
    let mut tally = Tally::default();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_no = idx + 1;
        let raw = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);

        match play(raw) {
            Ok(None) => {}
            Ok(Some((round, winner))) => {
                match winner {
                    Some(player) => {
                        debug!("line {line_no}: {} vs {}: {player} wins", round.first, round.second)
                    }
                    None => debug!("line {line_no}: {} vs {}: tie", round.first, round.second),
                }
                tally.record(winner);
            }
            Err(source) => match on_invalid {
                OnInvalid::Abort => return Err(TallyError::Line { line: line_no, source }),
                OnInvalid::Skip => {
                    warn!("Skipping line {line_no}: {source}");
                    tally.skipped = tally.skipped.saturating_add(1);
                }
            },
        }
    }

    info!(
        "Played {} rounds: player 1 won {}, player 2 won {}, {} ties, {} skipped",
        tally.rounds(),
        tally.player_one,
        tally.player_two,
        tally.ties,
        tally.skipped
    );
    Ok(tally)
}
