use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 8;
pub const SUIT_COUNT: usize = 4;
pub const RANK_COUNT: usize = 13;

/// One of the four French suits.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Fixed enumeration order, used for deck construction and tie-breaks.
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ace low.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unique identifier of a card within the standard deck (`0..52`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable playing card. Two cards are the same card when their ids match.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Builds the card occupying the standard-deck slot for `suit`/`rank`.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        let id = (suit.index() * RANK_COUNT + rank.index()) as u8;
        Self {
            id: CardId(id),
            suit,
            rank,
        }
    }

    /// Returns true for eights, which may be played on anything.
    #[inline]
    pub fn is_wild(&self) -> bool {
        self.rank == Rank::Eight
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Builds the 52-card standard deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Returns a uniformly random permutation of `cards`, leaving the input untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Checks that `cards` is exactly the standard deck, each card once.
pub fn is_standard_deck<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen = [false; DECK_SIZE];
    let mut count = 0usize;
    for card in cards {
        let slot = card.id.0 as usize;
        if slot >= DECK_SIZE || seen[slot] || Card::new(card.suit, card.rank) != *card {
            return false;
        }
        seen[slot] = true;
        count += 1;
    }
    count == DECK_SIZE
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn full_deck_has_one_card_per_suit_and_rank() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let pairs: HashSet<(Suit, Rank)> = deck.iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(pairs.len(), DECK_SIZE);
        let ids: HashSet<CardId> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
        assert!(is_standard_deck(&deck));
    }

    #[test]
    fn four_wild_cards_in_deck() {
        assert_eq!(full_deck().iter().filter(|c| c.is_wild()).count(), 4);
    }

    #[test]
    fn shuffle_leaves_input_untouched() {
        let deck = full_deck();
        let before = deck.clone();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle(&deck, &mut rng);
        assert_eq!(deck, before);
        assert!(is_standard_deck(&shuffled));
    }

    #[test]
    fn standard_deck_check_rejects_duplicates_and_gaps() {
        let mut deck = full_deck();
        deck[1] = deck[0];
        assert!(!is_standard_deck(&deck));
        let mut short = full_deck();
        short.pop();
        assert!(!is_standard_deck(&short));
    }

    #[test]
    fn display_uses_rank_label_and_suit_symbol() {
        assert_eq!(Card::new(Suit::Clubs, Rank::Eight).to_string(), "8♣");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Spades, Rank::Queen).to_string(), "Q♠");
    }
}
