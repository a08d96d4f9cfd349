use crate::card::{Card, SUIT_COUNT, Suit};

/// Checks whether `candidate` may be played onto `top`.
///
/// An eight is always playable. Otherwise the candidate must match the rank of
/// the top card, or its suit must match the suit in force: the declared
/// `active_suit` when an eight set one, the top card's own suit when not.
#[inline]
pub fn is_playable(candidate: &Card, top: &Card, active_suit: Option<Suit>) -> bool {
    if candidate.is_wild() || candidate.rank == top.rank {
        return true;
    }
    candidate.suit == active_suit.unwrap_or(top.suit)
}

/// Suit the hand holds the most of. On equal counts the later suit in
/// [`Suit::ALL`] wins.
pub fn most_common_suit(hand: &[Card]) -> Suit {
    let mut counts = [0usize; SUIT_COUNT];
    for card in hand {
        counts[card.suit.index()] += 1;
    }
    Suit::ALL
        .into_iter()
        .max_by_key(|suit| counts[suit.index()])
        .unwrap_or(Suit::Spades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn matches_top_suit_without_declaration() {
        let top = card(Suit::Hearts, Rank::Five);
        assert!(is_playable(&card(Suit::Hearts, Rank::King), &top, None));
        assert!(!is_playable(&card(Suit::Clubs, Rank::King), &top, None));
    }

    #[test]
    fn matches_rank_regardless_of_declaration() {
        let top = card(Suit::Hearts, Rank::Five);
        assert!(is_playable(&card(Suit::Clubs, Rank::Five), &top, None));
        assert!(is_playable(
            &card(Suit::Clubs, Rank::Five),
            &top,
            Some(Suit::Diamonds)
        ));
    }

    #[test]
    fn declared_suit_replaces_top_suit() {
        let top = card(Suit::Hearts, Rank::Eight);
        let active = Some(Suit::Spades);
        assert!(!is_playable(&card(Suit::Hearts, Rank::Five), &top, active));
        assert!(is_playable(&card(Suit::Spades, Rank::Five), &top, active));
    }

    #[test]
    fn eights_are_always_playable() {
        let top = card(Suit::Hearts, Rank::Five);
        for suit in Suit::ALL {
            assert!(is_playable(&card(Suit::Clubs, Rank::Eight), &top, Some(suit)));
        }
        assert!(is_playable(&card(Suit::Clubs, Rank::Eight), &top, None));
    }

    #[test]
    fn most_common_suit_counts_whole_hand() {
        let hand = [
            card(Suit::Clubs, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Hearts, Rank::Four),
            card(Suit::Clubs, Rank::Eight),
        ];
        assert_eq!(most_common_suit(&hand), Suit::Clubs);
    }

    #[test]
    fn most_common_suit_tie_goes_to_later_suit() {
        let hand = [
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
        ];
        assert_eq!(most_common_suit(&hand), Suit::Clubs);
        assert_eq!(most_common_suit(&[]), Suit::Spades);
    }
}
