use crate::{Card, Suit};
use std::fmt;
use std::str::FromStr;

/// Address of one pile on the board, as named on the wire:
/// `stock`, `waste`, `foundation_hearts`, `tableau_0` .. `tableau_6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(Suit),
    Tableau(usize),
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
            PileId::Foundation(suit) => write!(f, "foundation_{}", suit.id()),
            PileId::Tableau(index) => write!(f, "tableau_{index}"),
        }
    }
}

impl FromStr for PileId {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "stock" => return Ok(PileId::Stock),
            "waste" => return Ok(PileId::Waste),
            _ => {}
        }
        if let Some(suit) = token.strip_prefix("foundation_") {
            let suit = match suit {
                "hearts" => Suit::Hearts,
                "diamonds" => Suit::Diamonds,
                "clubs" => Suit::Clubs,
                "spades" => Suit::Spades,
                _ => return Err(()),
            };
            return Ok(PileId::Foundation(suit));
        }
        if let Some(index) = token.strip_prefix("tableau_") {
            let index = index.parse::<usize>().map_err(|_| ())?;
            return Ok(PileId::Tableau(index));
        }
        Err(())
    }
}

/// Ordered stack of cards; the top is the last element.
#[derive(Debug, Default, Clone)]
pub struct Pile {
    pub cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes and returns the run from `index` to the top.
    pub fn split_off_run(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// The run from `index` to the top, without removing it.
    pub fn run_from(&self, index: usize) -> &[Card] {
        &self.cards[index..]
    }

    /// Flips the top card face-up if it is face-down.
    pub fn expose_top(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            if !top.face_up {
                top.flip();
            }
        }
    }
}
