//! Crazy Eights rules engine for a human-versus-computer table.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod game;
pub mod rules;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, Side};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{HeuristicBot, RandomBot, choose_move};
pub use crate::card::{Card, CardId, Rank, Suit, full_deck, shuffle};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{DEFAULT_AI_DELAY, DEFAULT_SEED, Game, GameBuilder, GameConfig};
pub use crate::rules::{is_playable, most_common_suit};
pub use crate::scheduler::{AiTurnScheduler, ScheduledTurn};
pub use crate::session::{Interaction, Session};
pub use crate::state::{GameState, GameStateView, GameStatus};
pub use crate::visualize::{
    VisualOptions, describe_action, render_state, render_state_with_options,
};
