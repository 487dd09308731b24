use rand::seq::SliceRandom;
use rand::Rng;

use super::Card;

/// The full 52-card deck in its deterministic, unshuffled order.
pub fn create_deck() -> Vec<Card> {
    Card::all_cards()
}

pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Removes up to `count` cards from the front of the deck. A short or empty
/// deck yields fewer cards rather than an error.
pub fn draw(deck: &mut Vec<Card>, count: usize) -> Vec<Card> {
    let count = count.min(deck.len());
    deck.drain(..count).collect()
}

/// Splits a deck into two halves; the first half gets the extra card of an odd deck.
pub fn deal(mut deck: Vec<Card>) -> (Vec<Card>, Vec<Card>) {
    let second = deck.split_off(deck.len().div_ceil(2));
    (deck, second)
}
