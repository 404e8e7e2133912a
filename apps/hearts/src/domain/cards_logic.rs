//! Card helpers: vocabulary-order sort keys

use super::cards_types::Card;
use super::vocabulary::Vocabulary;

/// Sort key for a card's suit: its vocabulary position, or the mirrored
/// position when `reverse` is set.
pub fn card_sort_by_suit(card: &Card, suits: &Vocabulary, reverse: bool) -> usize {
    mirrored(card.suit().index(), suits.len(), reverse)
}

/// Sort key for a card's rank, see [`card_sort_by_suit`].
pub fn card_sort_by_rank(card: &Card, ranks: &Vocabulary, reverse: bool) -> usize {
    mirrored(card.rank().index(), ranks.len(), reverse)
}

fn mirrored(index: usize, len: usize, reverse: bool) -> usize {
    if reverse {
        len.saturating_sub(index + 1)
    } else {
        index
    }
}

/// Stable sort by suit position, then rank position.
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort();
}
