//! Command surface for front-ends: the human's two-phase moves plus the
//! delayed computer turn.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{Action, Side};
use crate::bot::Bot;
use crate::bots::HeuristicBot;
use crate::bots::registry::seat_seed;
use crate::card::{Card, CardId, Suit};
use crate::error::{GameError, InvalidAction};
use crate::game::{Game, GameConfig};
use crate::scheduler::AiTurnScheduler;
use crate::state::{GameState, GameStatus};

/// Where the human's current move stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    #[default]
    Idle,
    /// An eight was picked and waits for its suit before it is played.
    AwaitingSuit(Card),
}

/// A human-versus-computer table.
pub struct Session {
    game: Game,
    interaction: Interaction,
    scheduler: AiTurnScheduler,
    opponent: HeuristicBot<StdRng>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self::with_game(Game::new(config))
    }

    /// Wraps an already built game, e.g. one from [`crate::GameBuilder`].
    pub fn with_game(game: Game) -> Self {
        let config = game.config();
        Self {
            game,
            interaction: Interaction::Idle,
            scheduler: AiTurnScheduler::new(config.ai_delay),
            opponent: HeuristicBot::new(StdRng::seed_from_u64(seat_seed(config.seed, 1))),
        }
    }

    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn epoch(&self) -> u64 {
        self.game.epoch()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_pending_suit_selection(&self) -> bool {
        matches!(self.interaction, Interaction::AwaitingSuit(_))
    }

    pub fn pending_card(&self) -> Option<Card> {
        match self.interaction {
            Interaction::AwaitingSuit(card) => Some(card),
            Interaction::Idle => None,
        }
    }

    /// When the scheduled computer move comes due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.deadline()
    }

    /// Throws away the current round and deals a new one.
    pub fn start_game(&mut self) -> &GameState {
        self.scheduler.cancel();
        self.interaction = Interaction::Idle;
        self.game.start_game()
    }

    /// Human picks a card. Eights wait for [`Session::handle_suit_selection`];
    /// any other playable card is played at once.
    pub fn handle_player_play(&mut self, card_id: CardId) -> Result<&GameState, GameError> {
        self.ensure_player_can_act()?;
        let card = self.find_player_card(card_id)?;
        let card = self.game.check_play(Side::Player, &card)?;
        if card.is_wild() {
            debug!(%card, "eight picked, awaiting suit");
            self.interaction = Interaction::AwaitingSuit(card);
            return Ok(self.game.state());
        }
        Ok(self.game.play_card(card, Side::Player, None))
    }

    /// Completes a pending eight with the declared suit.
    pub fn handle_suit_selection(&mut self, suit: Suit) -> Result<&GameState, GameError> {
        let Interaction::AwaitingSuit(card) = self.interaction else {
            return Err(InvalidAction::NoPendingSuitSelection.into());
        };
        self.interaction = Interaction::Idle;
        Ok(self.game.play_card(card, Side::Player, Some(suit)))
    }

    /// Human draws a card, ending their turn.
    pub fn draw_card(&mut self) -> Result<&GameState, GameError> {
        self.ensure_player_can_act()?;
        Ok(self.game.draw_card(Side::Player))
    }

    /// Drives the computer's turn against the caller's clock.
    ///
    /// Schedules a move when the computer is to act and none is pending, and
    /// plays it once due unless the game moved on in the meantime. Returns the
    /// move that was played.
    pub fn tick(&mut self, now: Duration) -> Option<Action> {
        let mut taken = None;
        if let Some(turn) = self.scheduler.fire(now) {
            if turn.epoch == self.game.epoch() && self.is_ai_to_move() {
                taken = Some(self.play_ai_turn());
            } else {
                debug!(
                    scheduled = turn.epoch,
                    current = self.game.epoch(),
                    "dropping stale computer move"
                );
            }
        }
        if self.is_ai_to_move() && !self.scheduler.is_pending() {
            let turn = self.scheduler.schedule(self.game.epoch(), now);
            debug!(epoch = turn.epoch, due = ?turn.due, "scheduled computer move");
        }
        taken
    }

    fn play_ai_turn(&mut self) -> Action {
        let view = self.game.state_view(Side::Ai);
        let legal_actions = self.game.legal_actions(Side::Ai).unwrap_or_default();
        let action = self.opponent.select_action(&view, &legal_actions);
        match &action {
            Action::Play { card, suit } => {
                self.game.play_card(*card, Side::Ai, *suit);
            }
            Action::Draw => {
                self.game.draw_card(Side::Ai);
            }
        }
        action
    }

    fn is_ai_to_move(&self) -> bool {
        let state = self.game.state();
        state.status == GameStatus::Playing && state.turn == Side::Ai
    }

    fn ensure_player_can_act(&self) -> Result<(), GameError> {
        if self.is_pending_suit_selection() {
            return Err(GameError::AwaitingSuitSelection);
        }
        let state = self.game.state();
        match state.status {
            GameStatus::Waiting => Err(GameError::NotInProgress),
            GameStatus::GameOver => Err(GameError::GameOver),
            GameStatus::Playing if state.turn != Side::Player => Err(GameError::NotPlayersTurn),
            GameStatus::Playing => Ok(()),
        }
    }

    fn find_player_card(&self, card_id: CardId) -> Result<Card, GameError> {
        self.game
            .state()
            .player_hand
            .iter()
            .find(|card| card.id == card_id)
            .copied()
            .ok_or_else(|| InvalidAction::CardNotInHand(card_id).into())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::full_deck;
    use crate::game::{DEFAULT_AI_DELAY, GameBuilder};

    /// Hearts table with the computer to move: 2♥ on top, the player holding
    /// 3♥ and the computer holding 4♥ through K♥.
    fn ai_to_move() -> Session {
        let deck = full_deck();
        let mut stock = deck[12..].to_vec();
        stock.push(deck[0]);
        let state = GameState {
            deck: stock,
            discard_pile: vec![deck[1]],
            player_hand: vec![deck[2]],
            ai_hand: deck[3..12].to_vec(),
            turn: Side::Ai,
            status: GameStatus::Playing,
            winner: None,
            current_suit: None,
        };
        let game = GameBuilder::new().with_state(state).build().expect("game");
        Session::with_game(game)
    }

    #[test]
    fn stale_scheduled_move_is_dropped_and_replanned() {
        let mut session = ai_to_move();
        let epoch = session.epoch();
        let hand = session.state().ai_hand.len();
        session
            .scheduler
            .schedule(epoch.wrapping_sub(1), Duration::ZERO);

        let due = DEFAULT_AI_DELAY;
        assert_eq!(session.tick(due), None);
        assert_eq!(session.state().ai_hand.len(), hand);
        assert_eq!(session.state().turn, Side::Ai);
        assert_eq!(session.epoch(), epoch);
        assert_eq!(session.next_deadline(), Some(due + due));

        assert!(session.tick(due + due).is_some());
        assert_eq!(session.state().turn, Side::Player);
    }
}
