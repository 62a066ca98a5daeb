use crate::{Card, Rank, RngState, Suit};

/// The full 52-card set, face-down, in suit-then-rank order.
pub fn standard52() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::face_down(suit, rank));
        }
    }
    cards
}

/// A uniform-random permutation of the 52-card set.
pub fn shuffled(rng: &mut RngState) -> Vec<Card> {
    let mut cards = standard52();
    rng.shuffle(&mut cards);
    cards
}
