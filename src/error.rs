use thiserror::Error;

use crate::card::{Card, CardId};

/// Errors that can occur when driving the game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("not the specified side's turn")]
    NotPlayersTurn,
    #[error("no round is in progress")]
    NotInProgress,
    #[error("game is already over")]
    GameOver,
    #[error("a suit must be chosen for the pending eight first")]
    AwaitingSuitSelection,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of rejected moves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("card {0} is not in the acting hand")]
    CardNotInHand(CardId),
    #[error("{card} cannot be played on {top}")]
    Unplayable { card: Card, top: Card },
    #[error("{0} is wild and needs a declared suit")]
    MissingSuit(Card),
    #[error("{0} is not wild and cannot declare a suit")]
    UnexpectedSuit(Card),
    #[error("no eight is waiting for a suit")]
    NoPendingSuitSelection,
}
