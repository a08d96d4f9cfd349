pub mod heuristic;
pub mod random;
pub mod registry;

pub use heuristic::{HeuristicBot, choose_move};
pub use random::RandomBot;
