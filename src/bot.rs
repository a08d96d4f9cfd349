use crate::action::Action;
use crate::state::GameStateView;

/// Interface for anything that picks moves for a side.
pub trait Bot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action;
}
