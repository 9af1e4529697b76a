use rand::Rng;
use crate::tarot_engine::{cards, models::Card, shuffle::shuffle};

/// A shuffled working copy of the catalogue that cards are dealt from.
///
/// The catalogue itself is never reordered; the deck only holds references.
pub struct Deck {
    cards: Vec<&'static Card>,
    cursor: usize,
}

impl Deck {
    /// Take the full catalogue and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let ordered: Vec<&'static Card> = cards::all_cards().iter().collect();
        Deck { cards: shuffle(&ordered, rng), cursor: 0 }
    }

    /// Deal `n` cards from the top, or `None` if fewer than `n` remain.
    pub fn deal_n(&mut self, n: usize) -> Option<Vec<&'static Card>> {
        if n > self.remaining() {
            return None;
        }
        let dealt = self.cards[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        Some(dealt)
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }
}
