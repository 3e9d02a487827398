use crate::game::Player;
use bincode::{Decode, Encode};

/// A piece of `player` dropped into `column`.
///
/// The column is not checked here; `Board::apply` rejects columns
/// that are full or off the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Encode, Decode)]
pub struct Move {
    player: Player,
    column: usize,
}

impl Move {
    #[inline(always)]
    pub fn new(player: Player, column: usize) -> Self {
        Move { player, column }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn column(&self) -> usize {
        self.column
    }
}
