use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crazy8::{
    Bot, Card, Game, GameConfig, HeuristicBot, RandomBot, Rank, Side, Suit, full_deck,
    is_playable, shuffle,
};

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_suit(), any_rank()).prop_map(|(suit, rank)| Card::new(suit, rank))
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = full_deck();
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle(&deck, &mut rng);
        prop_assert_eq!(shuffled.len(), deck.len());
        let before: HashSet<Card> = deck.into_iter().collect();
        let after: HashSet<Card> = shuffled.into_iter().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn eights_are_always_playable(
        suit in any_suit(),
        top in any_card(),
        active in prop::option::of(any_suit()),
    ) {
        prop_assert!(is_playable(&Card::new(suit, Rank::Eight), &top, active));
    }

    #[test]
    fn declared_suit_overrides_top_suit(
        declared in any_suit(),
        top in any_card(),
        rank in any_rank(),
    ) {
        prop_assume!(declared != top.suit);
        prop_assume!(rank != top.rank && rank != Rank::Eight);
        let off_suit = Card::new(top.suit, rank);
        let on_suit = Card::new(declared, rank);
        prop_assert!(!is_playable(&off_suit, &top, Some(declared)));
        prop_assert!(is_playable(&on_suit, &top, Some(declared)));
    }

    #[test]
    fn legality_is_deterministic(
        candidate in any_card(),
        top in any_card(),
        active in prop::option::of(any_suit()),
    ) {
        let first = is_playable(&candidate, &top, active);
        prop_assert_eq!(first, is_playable(&candidate, &top, active));
    }

    #[test]
    fn starter_is_never_wild(seed in any::<u64>()) {
        let mut game = Game::new(GameConfig::new(seed));
        let state = game.start_game();
        prop_assert_eq!(state.discard_pile.len(), 1);
        prop_assert!(!state.discard_pile[0].is_wild());
        prop_assert_eq!(state.deck.len(), 35);
    }

    #[test]
    fn every_card_stays_accounted_for(seed in any::<u64>()) {
        let mut game = Game::new(GameConfig::new(seed));
        game.start_game();
        let mut player = RandomBot::new(StdRng::seed_from_u64(seed ^ 1));
        let mut computer = HeuristicBot::new(StdRng::seed_from_u64(seed ^ 2));
        for _ in 0..400 {
            if game.is_finished() {
                break;
            }
            let side = game.turn();
            let view = game.state_view(side);
            let legal = game.legal_actions(side).expect("side to move has actions");
            let action = match side {
                Side::Player => player.select_action(&view, &legal),
                Side::Ai => computer.select_action(&view, &legal),
            };
            let before = game.state().hand(side).len();
            let emptied = action.card().is_some() && before == 1;
            game.apply_action(side, action).expect("legal action applies");
            prop_assert!(game.state().holds_full_deck());
            if emptied {
                prop_assert!(game.is_finished());
                prop_assert_eq!(game.winner(), Some(side));
                prop_assert_eq!(game.turn(), side);
            } else {
                prop_assert_eq!(game.turn(), side.opponent());
            }
        }
    }
}
