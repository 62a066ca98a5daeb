use crate::{Card, Game, Suit, FOUNDATION_RUN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableauColumn {
    pub index: usize,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundationSlot {
    pub top_card: Option<Card>,
    pub complete: bool,
}

/// Full board state as the client sees it: tableau columns card by card,
/// foundations by their exposed top, stock as a count, waste in draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: String,
    pub tableau: Vec<TableauColumn>,
    pub foundations: BTreeMap<String, FoundationSlot>,
    pub stock: usize,
    pub waste: Vec<Card>,
    pub moves: u32,
    pub game_won: bool,
    pub elapsed_secs: u64,
}

impl GameSnapshot {
    pub fn of(game: &Game) -> Self {
        let tableau = game
            .tableau
            .iter()
            .enumerate()
            .map(|(index, pile)| TableauColumn {
                index,
                cards: pile.cards.clone(),
            })
            .collect();
        let foundations = Suit::ALL
            .iter()
            .map(|suit| {
                let pile = game.foundation(*suit);
                let slot = FoundationSlot {
                    top_card: pile.top().copied(),
                    complete: pile.len() == FOUNDATION_RUN,
                };
                (suit.id().to_string(), slot)
            })
            .collect();
        Self {
            game_id: game.id.clone(),
            tableau,
            foundations,
            stock: game.stock.len(),
            waste: game.waste.cards.clone(),
            moves: game.moves,
            game_won: game.is_won(),
            elapsed_secs: game.elapsed_secs(),
        }
    }
}

/// One line of the registry listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: String,
    pub moves: u32,
    pub game_won: bool,
    pub foundations_complete: usize,
}
