//! Board and rules of Connect Four: dropping pieces, legal moves
//! and four-in-a-row detection.

mod error;
pub mod game;

pub use error::IllegalMove;
pub use game::*;
