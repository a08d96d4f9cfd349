use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit};

/// One of the two seats at the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Ai => f.write_str("computer"),
        }
    }
}

/// Move available to a side during its turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from the hand onto the discard pile. Eights carry the
    /// declared suit; every other card carries `None`.
    Play { card: Card, suit: Option<Suit> },
    /// Draw the top card of the deck and pass the turn.
    Draw,
}

impl Action {
    /// Returns the card being played, if any.
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Play { card, .. } => Some(*card),
            Action::Draw => None,
        }
    }
}
