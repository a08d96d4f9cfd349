use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Card, Suit};
use crate::rules::{is_playable, most_common_suit};
use crate::state::GameStateView;

/// Picks the computer opponent's move.
///
/// - Draw when nothing in the hand is playable.
/// - Otherwise play a random playable non-eight.
/// - Fall back to the first playable eight, declaring the suit the hand holds
///   the most of (the eight itself included).
///
/// The choice is one-ply and greedy; nothing is inferred about the opponent.
pub fn choose_move<R: Rng + ?Sized>(
    hand: &[Card],
    top: &Card,
    current_suit: Option<Suit>,
    rng: &mut R,
) -> Action {
    let (wild, plain): (Vec<&Card>, Vec<&Card>) = hand
        .iter()
        .filter(|card| is_playable(card, top, current_suit))
        .partition(|card| card.is_wild());

    if let Some(card) = plain.choose(rng) {
        return Action::Play {
            card: **card,
            suit: None,
        };
    }
    match wild.first() {
        Some(card) => Action::Play {
            card: **card,
            suit: Some(most_common_suit(hand)),
        },
        None => Action::Draw,
    }
}

/// The computer opponent as a [`Bot`].
pub struct HeuristicBot<R: Rng> {
    rng: R,
}

impl<R: Rng> HeuristicBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for HeuristicBot<R> {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        let Some(top) = state.top_card else {
            return Action::Draw;
        };
        let action = choose_move(&state.hand, &top, state.current_suit, &mut self.rng);
        debug_assert!(
            legal_actions.is_empty() || legal_actions.contains(&action),
            "heuristic picked an action outside the legal set"
        );
        action
    }
}
