mod board;
mod board_utility;
mod compression;
mod moves;

use bincode::{Decode, Encode};

/// The number of rows on the board.
pub const NUM_ROWS: usize = 6;
/// The number of columns on the board.
pub const NUM_COLS: usize = 7;
/// four in a line
pub const FOUR: usize = 4;

/// The two sides of the game
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Encode, Decode)]
#[repr(u8)]
pub enum Player {
    Red = 1,
    Yellow = 2,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// the marker used when rendering a board
    pub fn glyph(&self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

pub use board::{Board, GameState};
pub use compression::{compress_board, decode_board, decompress_board, encode_board};
pub use moves::Move;
