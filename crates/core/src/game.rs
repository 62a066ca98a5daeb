use crate::{deck, moves, Card, MoveError, MovePlan, Pile, PileId, RngState, Suit};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

pub const TABLEAU_COLUMNS: usize = 7;
pub const FOUNDATION_RUN: usize = 13;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// One Klondike game. All mutation goes through `draw_from_stock` and
/// `move_cards`; rejected requests leave every pile untouched.
#[derive(Debug)]
pub struct Game {
    pub id: String,
    pub tableau: Vec<Pile>,
    pub foundations: [Pile; 4],
    pub stock: Pile,
    pub waste: Pile,
    pub moves: u32,
    pub status: GameStatus,
    pub started_at: SystemTime,
}

impl Game {
    pub fn new(id: impl Into<String>, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut cards = deck::shuffled(&mut rng);

        // Column i takes i + 1 cards, only the last face-up.
        let mut tableau = vec![Pile::new(); TABLEAU_COLUMNS];
        for (i, column) in tableau.iter_mut().enumerate() {
            for j in 0..=i {
                if let Some(mut card) = cards.pop() {
                    card.face_up = j == i;
                    column.push(card);
                }
            }
        }

        // The remaining 24 stay face-down in stock.
        let mut stock = Pile::new();
        while let Some(card) = cards.pop() {
            stock.push(card);
        }

        let game = Self {
            id: id.into(),
            tableau,
            foundations: [Pile::new(), Pile::new(), Pile::new(), Pile::new()],
            stock,
            waste: Pile::new(),
            moves: 0,
            status: GameStatus::InProgress,
            started_at: SystemTime::now(),
        };
        debug_assert_eq!(game.card_count(), 52);
        game
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(suit) => Some(&self.foundations[suit.index()]),
            PileId::Tableau(index) => self.tableau.get(index),
        }
    }

    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.index()]
    }

    /// Draws one card from stock onto the waste, face-up. An empty stock
    /// recycles the waste back into it; a no-op only when both are empty.
    pub fn draw_from_stock(&mut self) -> Result<(), MoveError> {
        if self.status == GameStatus::Won {
            return Err(MoveError::GameFinished);
        }
        let before = self.card_count();
        if let Some(mut card) = self.stock.pop() {
            card.face_up = true;
            self.waste.push(card);
        } else {
            self.recycle_waste();
        }
        debug_assert_eq!(self.card_count(), before);
        Ok(())
    }

    /// Flips the waste back over as the new stock: top of waste lands at the
    /// bottom of stock, so cards come off in their original draw order again.
    fn recycle_waste(&mut self) {
        while let Some(mut card) = self.waste.pop() {
            card.face_up = false;
            self.stock.push(card);
        }
    }

    /// Validates and applies one move. Returns whether the game is now won.
    pub fn move_cards(
        &mut self,
        from: PileId,
        to: PileId,
        card_index: usize,
    ) -> Result<bool, MoveError> {
        let plan = moves::validate(self, from, to, card_index)?;
        let before = self.card_count();
        match plan {
            MovePlan::Draw => {
                self.draw_from_stock()?;
            }
            MovePlan::Transfer { from, to, start } => {
                let mut run = self.detach_run(from, start);
                self.attach_run(to, &mut run);
                if let PileId::Tableau(index) = from {
                    self.tableau[index].expose_top();
                }
                self.moves += 1;
                if self.foundations.iter().all(|pile| pile.len() == FOUNDATION_RUN) {
                    self.status = GameStatus::Won;
                }
            }
        }
        debug_assert_eq!(self.card_count(), before);
        Ok(self.status == GameStatus::Won)
    }

    // Both helpers are only reached with a validated plan, so the pile
    // addresses are known to resolve.
    fn detach_run(&mut self, from: PileId, start: usize) -> Vec<Card> {
        match from {
            PileId::Stock => self.stock.split_off_run(start),
            PileId::Waste => self.waste.split_off_run(start),
            PileId::Foundation(suit) => self.foundations[suit.index()].split_off_run(start),
            PileId::Tableau(index) => self.tableau[index].split_off_run(start),
        }
    }

    fn attach_run(&mut self, to: PileId, run: &mut Vec<Card>) {
        let dest = match to {
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
            PileId::Foundation(suit) => &mut self.foundations[suit.index()],
            PileId::Tableau(index) => &mut self.tableau[index],
        };
        dest.cards.append(run);
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Cards across every pile. Always 52; the partition invariant.
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    pub fn foundations_complete(&self) -> usize {
        self.foundations
            .iter()
            .filter(|pile| pile.len() == FOUNDATION_RUN)
            .count()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.started_at
            .elapsed()
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}
