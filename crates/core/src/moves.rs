use crate::{Card, Game, GameStatus, PileId, Rank, Suit};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no such pile")]
    NoSuchPile,
    #[error("source pile is empty")]
    EmptySource,
    #[error("move violates the rules")]
    RuleViolated,
    #[error("game is already won")]
    GameFinished,
}

/// A move that passed validation, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// Stock to waste, one card.
    Draw,
    /// The run starting at `start` in `from` lands on top of `to`.
    Transfer {
        from: PileId,
        to: PileId,
        start: usize,
    },
}

/// Pure legality check. Never mutates; rejections leave the game untouched.
pub fn validate(game: &Game, from: PileId, to: PileId, card_index: usize) -> Result<MovePlan, MoveError> {
    if game.status == GameStatus::Won {
        return Err(MoveError::GameFinished);
    }
    let source = game.pile(from).ok_or(MoveError::NoSuchPile)?;
    let dest = game.pile(to).ok_or(MoveError::NoSuchPile)?;

    if from == PileId::Stock {
        // Stock only feeds the waste, one card at a time.
        if to != PileId::Waste {
            return Err(MoveError::RuleViolated);
        }
        if source.is_empty() {
            return Err(MoveError::EmptySource);
        }
        return Ok(MovePlan::Draw);
    }
    if from == to {
        return Err(MoveError::RuleViolated);
    }
    if source.is_empty() {
        return Err(MoveError::EmptySource);
    }

    let start = match from {
        PileId::Tableau(_) => {
            if card_index >= source.len() {
                return Err(MoveError::RuleViolated);
            }
            card_index
        }
        // Waste and foundations expose only their top card.
        PileId::Waste | PileId::Foundation(_) => source.len() - 1,
        PileId::Stock => unreachable!(),
    };
    let run = source.run_from(start);
    if !is_movable_run(run) {
        return Err(MoveError::RuleViolated);
    }

    let legal = match to {
        PileId::Tableau(_) => fits_on_tableau(dest.top(), &run[0]),
        PileId::Foundation(suit) => run.len() == 1 && fits_on_foundation(suit, dest.top(), &run[0]),
        PileId::Stock | PileId::Waste => false,
    };
    if !legal {
        return Err(MoveError::RuleViolated);
    }
    Ok(MovePlan::Transfer { from, to, start })
}

/// A movable unit: contiguous face-up cards, strictly rank-descending,
/// alternating in color, ending at the pile top.
pub fn is_movable_run(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    if cards.iter().any(|card| !card.face_up) {
        return false;
    }
    cards.windows(2).all(|pair| {
        pair[1].rank.value() + 1 == pair[0].rank.value() && pair[1].color() != pair[0].color()
    })
}

/// Tableau rule: one rank down, opposite color; an empty column takes a King.
pub fn fits_on_tableau(dest_top: Option<&Card>, incoming: &Card) -> bool {
    match dest_top {
        None => incoming.rank == Rank::King,
        Some(top) => {
            top.face_up
                && top.color() != incoming.color()
                && incoming.rank.value() + 1 == top.rank.value()
        }
    }
}

/// Foundation rule: same suit, ascending from the Ace.
pub fn fits_on_foundation(suit: Suit, dest_top: Option<&Card>, incoming: &Card) -> bool {
    if incoming.suit != suit {
        return false;
    }
    match dest_top {
        None => incoming.rank == Rank::Ace,
        Some(top) => incoming.rank.value() == top.rank.value() + 1,
    }
}
