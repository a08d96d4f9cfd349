use serde::{Deserialize, Serialize};

use crate::action::Side;
use crate::card::{Card, Suit, is_standard_deck};

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    /// Created but not dealt yet.
    Waiting,
    Playing,
    /// A hand emptied; only a new game may follow.
    GameOver,
}

/// Authoritative state of a round.
///
/// `deck` is drawn from its tail and the last card of `discard_pile` is the
/// card in play. Between them and the two hands every card of the standard
/// deck appears exactly once while a round is running.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub deck: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    pub turn: Side,
    pub status: GameStatus,
    pub winner: Option<Side>,
    /// Suit declared with the last eight; overrides the top card's suit.
    pub current_suit: Option<Suit>,
}

impl GameState {
    /// Fresh, undealt state.
    pub fn new() -> Self {
        Self {
            deck: Vec::new(),
            discard_pile: Vec::new(),
            player_hand: Vec::new(),
            ai_hand: Vec::new(),
            turn: Side::Player,
            status: GameStatus::Waiting,
            winner: None,
            current_suit: None,
        }
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Player => &self.player_hand,
            Side::Ai => &self.ai_hand,
        }
    }

    pub(crate) fn hand_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Ai => &mut self.ai_hand,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Iterates over every card the round accounts for.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(&self.discard_pile)
            .chain(&self.player_hand)
            .chain(&self.ai_hand)
    }

    /// Deck, discard pile and both hands together form the standard deck.
    pub fn holds_full_deck(&self) -> bool {
        is_standard_deck(self.all_cards())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// What one side may observe of the table: its own hand and public counts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub self_side: Side,
    pub turn: Side,
    pub status: GameStatus,
    pub winner: Option<Side>,
    pub hand: Vec<Card>,
    pub top_card: Option<Card>,
    pub current_suit: Option<Suit>,
    pub opponent_hand_size: usize,
    pub deck_count: usize,
    pub discard_count: usize,
}

impl GameStateView {
    pub fn from_state(state: &GameState, side: Side) -> Self {
        Self {
            self_side: side,
            turn: state.turn,
            status: state.status,
            winner: state.winner,
            hand: state.hand(side).to_vec(),
            top_card: state.top_card().copied(),
            current_suit: state.current_suit,
            opponent_hand_size: state.hand(side.opponent()).len(),
            deck_count: state.deck.len(),
            discard_count: state.discard_pile.len(),
        }
    }

    pub fn is_own_turn(&self) -> bool {
        self.status == GameStatus::Playing && self.turn == self.self_side
    }
}
