//! Core Klondike rules engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod game;
pub mod moves;
pub mod pile;
pub mod registry;
pub mod rng;
pub mod snapshot;

pub use cards::*;
pub use deck::*;
pub use game::*;
pub use moves::*;
pub use pile::*;
pub use registry::*;
pub use rng::*;
pub use snapshot::*;
