use std::fmt::Write;

use crate::action::{Action, Side};
use crate::state::{GameStateView, GameStatus};

/// Customize state rendering for terminal front-ends.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_hand_indices: bool,
    pub show_pile_counts: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hand_indices: true,
            show_pile_counts: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match (state.status, state.winner) {
        (GameStatus::Waiting, _) => String::from("Waiting to deal"),
        (GameStatus::Playing, _) => String::from("Playing"),
        (GameStatus::GameOver, Some(winner)) => format!("Game over (winner: {winner})"),
        (GameStatus::GameOver, None) => String::from("Game over"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(
        out,
        "Turn: {}{}",
        state.turn,
        if state.turn == state.self_side { " (You)" } else { "" }
    );
    let top = state
        .top_card
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"));
    let declared = state
        .current_suit
        .map(|suit| format!("  (suit called: {} {})", suit, suit.name()))
        .unwrap_or_default();
    let _ = writeln!(out, "Top card: {top}{declared}");
    if options.show_pile_counts {
        let _ = writeln!(
            out,
            "Deck: {}  |  Discard pile: {}",
            state.deck_count, state.discard_count
        );
    }
    let opponent = match state.self_side.opponent() {
        Side::Player => "Player",
        Side::Ai => "Computer",
    };
    let _ = writeln!(out, "{opponent} hand size: {}", state.opponent_hand_size);
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = state
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                if options.show_hand_indices {
                    format!("{idx}:{card}")
                } else {
                    card.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

pub fn describe_action(action: &Action) -> String {
    match action {
        Action::Play {
            card,
            suit: Some(suit),
        } => format!("Play {card}, calling {}", suit.name()),
        Action::Play { card, suit: None } => format!("Play {card}"),
        Action::Draw => String::from("Draw a card"),
    }
}
