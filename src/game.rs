use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::action::{Action, Side};
use crate::card::{Card, HAND_SIZE, Suit, full_deck, is_standard_deck, shuffle};
use crate::error::{GameError, InvalidAction};
use crate::rules::is_playable;
use crate::state::{GameState, GameStateView, GameStatus};

pub const DEFAULT_SEED: u64 = 0x5EED_C8A2_5EED_C8A2;
/// Pause before the computer opponent moves.
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(1500);

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
    pub ai_delay: Duration,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ai_delay: DEFAULT_AI_DELAY,
        }
    }

    pub fn with_ai_delay(mut self, ai_delay: Duration) -> Self {
        self.ai_delay = ai_delay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Builder that enables deterministic deck and state injection for tests.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
    state: Option<GameState>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            deck: None,
            state: None,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Deal the next round from `deck` in the given order instead of a
    /// freshly shuffled one. The first eight cards go to the player.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Resume from an existing mid-round state.
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Crazy Eights rules engine: owns the round state and applies transitions.
pub struct Game {
    config: GameConfig,
    state: GameState,
    preset_deck: Option<Vec<Card>>,
    rng: StdRng,
    epoch: u64,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
            preset_deck: None,
            rng: StdRng::seed_from_u64(config.seed),
            epoch: 0,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Counter bumped by every state transition.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn turn(&self) -> Side {
        self.state.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_over()
    }

    pub fn state_view(&self, side: Side) -> GameStateView {
        GameStateView::from_state(&self.state, side)
    }

    /// Deals a new round, replacing whatever state came before.
    pub fn start_game(&mut self) -> &GameState {
        let mut cards = match self.preset_deck.take() {
            Some(deck) => deck,
            None => shuffle(&full_deck(), &mut self.rng),
        };
        let mut rest = cards.split_off(2 * HAND_SIZE);
        let ai_hand = cards.split_off(HAND_SIZE);
        let player_hand = cards;
        let first = rest
            .iter()
            .position(|card| !card.is_wild())
            .expect("standard deck holds more than four cards outside the hands");
        let starter = rest.remove(first);

        self.state = GameState {
            deck: rest,
            discard_pile: vec![starter],
            player_hand,
            ai_hand,
            turn: Side::Player,
            status: GameStatus::Playing,
            winner: None,
            current_suit: None,
        };
        self.bump_epoch();
        info!(epoch = self.epoch, starter = %starter, "round started");
        &self.state
    }

    /// Draws the top card of the deck into `side`'s hand and passes the turn.
    ///
    /// An empty deck is rebuilt from the discard pile minus its top card. With
    /// nothing to rebuild from, no card is drawn but the turn still passes.
    pub fn draw_card(&mut self, side: Side) -> &GameState {
        assert!(self.state.is_playing(), "draw_card requires a round in progress");
        assert_eq!(side, self.state.turn, "draw_card out of turn");

        let drawn = match self.state.deck.pop() {
            Some(card) => Some(card),
            None if self.state.discard_pile.len() <= 1 => {
                debug!(%side, "deck and discard pile exhausted, passing without a draw");
                None
            }
            None => {
                self.recycle_discard_pile();
                self.state.deck.pop()
            }
        };
        if let Some(card) = drawn {
            self.state.hand_mut(side).push(card);
            debug!(%side, deck = self.state.deck.len(), "drew a card");
        }
        self.state.turn = side.opponent();
        self.bump_epoch();
        &self.state
    }

    /// Moves `card` from `side`'s hand onto the discard pile.
    ///
    /// Legality is the caller's business. `chosen_suit` only sticks when the
    /// card is an eight; any other play clears a declared suit.
    pub fn play_card(&mut self, card: Card, side: Side, chosen_suit: Option<Suit>) -> &GameState {
        assert!(self.state.is_playing(), "play_card requires a round in progress");
        assert_eq!(side, self.state.turn, "play_card out of turn");

        let hand = self.state.hand_mut(side);
        let Some(position) = hand.iter().position(|held| *held == card) else {
            panic!("{card} is not in the {side} hand");
        };
        let card = hand.remove(position);
        let emptied = hand.is_empty();

        self.state.discard_pile.push(card);
        self.state.current_suit = if card.is_wild() { chosen_suit } else { None };
        debug!(%side, %card, suit = ?self.state.current_suit, "played a card");

        if emptied {
            self.state.status = GameStatus::GameOver;
            self.state.winner = Some(side);
            info!(winner = %side, "round over");
        } else {
            self.state.turn = side.opponent();
        }
        self.bump_epoch();
        &self.state
    }

    pub fn legal_actions(&self, side: Side) -> Result<Vec<Action>, GameError> {
        match self.state.status {
            GameStatus::GameOver => return Ok(Vec::new()),
            GameStatus::Waiting => return Err(GameError::NotInProgress),
            GameStatus::Playing => {}
        }
        if side != self.state.turn {
            return Err(GameError::NotPlayersTurn);
        }
        let top = self.top_card();
        let mut actions = Vec::new();
        for card in self.state.hand(side) {
            if !is_playable(card, &top, self.state.current_suit) {
                continue;
            }
            if card.is_wild() {
                for suit in Suit::ALL {
                    actions.push(Action::Play {
                        card: *card,
                        suit: Some(suit),
                    });
                }
            } else {
                actions.push(Action::Play {
                    card: *card,
                    suit: None,
                });
            }
        }
        actions.push(Action::Draw);
        Ok(actions)
    }

    /// Validated counterpart of [`Game::play_card`] and [`Game::draw_card`].
    pub fn apply_action(&mut self, side: Side, action: Action) -> Result<(), GameError> {
        match self.state.status {
            GameStatus::GameOver => return Err(GameError::GameOver),
            GameStatus::Waiting => return Err(GameError::NotInProgress),
            GameStatus::Playing => {}
        }
        if side != self.state.turn {
            return Err(GameError::NotPlayersTurn);
        }
        match action {
            Action::Draw => {
                self.draw_card(side);
            }
            Action::Play { card, suit } => {
                let card = self.check_play(side, &card)?;
                match (card.is_wild(), suit) {
                    (true, None) => return Err(InvalidAction::MissingSuit(card).into()),
                    (false, Some(_)) => return Err(InvalidAction::UnexpectedSuit(card).into()),
                    _ => {}
                }
                self.play_card(card, side, suit);
            }
        }
        Ok(())
    }

    /// Finds `card` in `side`'s hand and checks it against the table.
    pub(crate) fn check_play(&self, side: Side, card: &Card) -> Result<Card, GameError> {
        let held = self
            .state
            .hand(side)
            .iter()
            .find(|held| held.id == card.id)
            .copied()
            .ok_or(InvalidAction::CardNotInHand(card.id))?;
        let top = self.top_card();
        if !is_playable(&held, &top, self.state.current_suit) {
            return Err(InvalidAction::Unplayable { card: held, top }.into());
        }
        Ok(held)
    }

    fn top_card(&self) -> Card {
        *self
            .state
            .top_card()
            .expect("discard pile is never empty during a round")
    }

    fn recycle_discard_pile(&mut self) {
        let Some(top) = self.state.discard_pile.pop() else {
            return;
        };
        let rest = std::mem::take(&mut self.state.discard_pile);
        self.state.deck = shuffle(&rest, &mut self.rng);
        self.state.discard_pile.push(top);
        debug!(cards = self.state.deck.len(), "reshuffled discard pile into deck");
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            deck,
            state,
        } = builder;
        if let Some(deck) = &deck {
            if !is_standard_deck(deck) {
                return Err(GameError::InvalidConfiguration(
                    "injected deck must be the 52-card standard deck",
                ));
            }
        }
        let mut game = Game::new(config);
        game.preset_deck = deck;
        if let Some(state) = state {
            if state.status == GameStatus::Waiting {
                return Err(GameError::InvalidConfiguration(
                    "injected state must be dealt",
                ));
            }
            if state.discard_pile.is_empty() {
                return Err(GameError::InvalidConfiguration(
                    "injected state needs a card in play",
                ));
            }
            if !state.holds_full_deck() {
                return Err(GameError::InvalidConfiguration(
                    "injected state must account for every card exactly once",
                ));
            }
            game.state = state;
            game.bump_epoch();
        }
        Ok(game)
    }
}
