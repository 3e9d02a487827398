use crate::error::IllegalMove;
use crate::game::board_utility::{win_locations, window_owner};
use crate::game::Player::{Red, Yellow};
use crate::game::{Move, Player, FOUR, NUM_COLS, NUM_ROWS};
use anyhow::Error;
#[cfg(debug_assertions)]
use log::trace;
use log::debug;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// where a board stands, derived from its cells on every call
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    InProgress,
    Won(Player),
    /// full board, nobody has four in a row
    Drawn,
}

/// A grid of pieces from two opposing players.
///
/// Rows are indexed from the top, columns from the left. Pieces only
/// enter through [`Board::apply`], which drops them to the lowest empty
/// cell of a column, so occupied cells of a column always form a block
/// anchored at the bottom.
///
/// `Board` is a plain array of cells: `clone()` (or a copy) is a full,
/// independent duplicate, which is how speculative moves should be tried
/// (see [`Board::with_move`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [[Option<Player>; NUM_COLS]; NUM_ROWS],
}

impl Board {
    #[inline(always)]
    pub fn new() -> Self {
        Board {
            cells: [[None; NUM_COLS]; NUM_ROWS],
        }
    }

    /// no gravity check, callers decide whether that matters
    pub(crate) fn from_cells(cells: [[Option<Player>; NUM_COLS]; NUM_ROWS]) -> Self {
        Board { cells }
    }

    /// a copy of this board with `mv` applied, this board is never modified
    pub fn with_move(&self, mv: Move) -> Result<Board, IllegalMove> {
        let mut next = *self;
        next.apply(mv)?;
        Ok(next)
    }

    /// The piece at (`row`, `col`), `None` for an empty cell.
    ///
    /// Panics if the position is off the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        debug_assert!(row < NUM_ROWS && col < NUM_COLS);
        self.cells[row][col]
    }

    /// read the internal representation of the board
    pub fn cells(&self) -> &[[Option<Player>; NUM_COLS]; NUM_ROWS] {
        &self.cells
    }

    /// Drop a piece of the move's player into the move's column.
    ///
    /// Fails if the column is full or does not exist, in which case
    /// nothing is changed. Winning boards are not rejected here, use
    /// [`Board::possible_moves`] to respect the end of the game.
    pub fn apply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        let column = mv.column();
        if column >= NUM_COLS {
            debug!("rejected {:?}: no such column", mv);
            return unlikely_error(Err(IllegalMove::NoSuchColumn { column }));
        }
        // an occupied top cell means full, even over gaps on a hand-built board
        let lowest_empty = (0..NUM_ROWS)
            .rev()
            .find(|&r| self.cells[r][column].is_none());
        let row = match lowest_empty {
            Some(row) if self.cells[0][column].is_none() => row,
            _ => {
                debug!("rejected {:?}: column full", mv);
                return unlikely_error(Err(IllegalMove::ColumnFull { column }));
            }
        };
        self.cells[row][column] = Some(mv.player());
        #[cfg(debug_assertions)]
        trace!("{:?} placed at ({}, {})", mv.player(), row, column);
        Ok(())
    }

    /// All moves `player` can make, in increasing column order.
    ///
    /// Empty once somebody has four in a row, or when the board is full.
    pub fn possible_moves(&self, player: Player) -> Vec<Move> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..NUM_COLS)
            .filter(|&c| !self.is_column_full(c))
            .map(|c| Move::new(player, c))
            .collect()
    }

    /// The player with four in a row, if any.
    ///
    /// Windows are checked vertical, horizontal, uphill then downhill, each
    /// from start cells in row-major order, and the first complete one wins.
    /// Only hand-built boards can hold two winners, so the order matters for
    /// nothing else.
    pub fn winner(&self) -> Option<Player> {
        win_locations(&self.cells).find_map(|w| window_owner(&w))
    }

    /// The contents of every run of four cells that lies on the board.
    pub fn win_locations(&self) -> impl Iterator<Item = [Option<Player>; FOUR]> + '_ {
        win_locations(&self.cells)
    }

    pub fn state(&self) -> GameState {
        match self.winner() {
            Some(p) => GameState::Won(p),
            None if self.is_full() => GameState::Drawn,
            None => GameState::InProgress,
        }
    }

    #[inline]
    pub fn is_column_full(&self, col: usize) -> bool {
        debug_assert!(col < NUM_COLS);
        self.cells[0][col].is_some()
    }

    /// number of pieces in `col`
    pub fn column_height(&self, col: usize) -> usize {
        debug_assert!(col < NUM_COLS);
        self.cells.iter().filter(|row| row[col].is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        (0..NUM_COLS).all(|c| self.is_column_full(c))
    }

    /// whether no piece sits above an empty cell
    pub fn is_settled(&self) -> bool {
        (0..NUM_COLS).all(|c| {
            (1..NUM_ROWS).all(|r| self.cells[r - 1][c].is_none() || self.cells[r][c].is_some())
        })
    }

    /// The board as text, one line per row with `prefix` in front of each,
    /// e.g. `"|R| |Y| | | | |"`.
    pub fn render(&self, prefix: &str) -> String {
        let mut out = String::with_capacity(NUM_ROWS * (prefix.len() + 2 * NUM_COLS + 2));
        for row in &self.cells {
            out.push_str(prefix);
            out.push('|');
            for spot in row {
                out.push(spot.map_or(' ', |p| p.glyph()));
                out.push('|');
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(""))
    }
}

/// parses the output of `render("")`
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != NUM_ROWS {
            Err(Error::msg(format!(
                "board parse error, expect {} rows, found {}",
                NUM_ROWS,
                lines.len()
            )))?
        }
        let mut cells = [[None; NUM_COLS]; NUM_ROWS];
        for (r, line) in lines.into_iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 2 * NUM_COLS + 1 {
                Err(Error::msg(format!(
                    "board parse error, incorrect length of row {}",
                    r
                )))?
            }
            for (i, ch) in chars.into_iter().enumerate() {
                if i % 2 == 0 {
                    if ch != '|' {
                        Err(Error::msg(format!(
                            "board parse error, expect '|' in row {}, found {:?}",
                            r, ch
                        )))?
                    }
                    continue;
                }
                cells[r][i / 2] = match ch {
                    ' ' => None,
                    'R' => Some(Red),
                    'Y' => Some(Yellow),
                    _ => Err(Error::msg(format!("board parse error, invalid char {:?}", ch)))?,
                };
            }
        }
        let board = Board::from_cells(cells);
        if !board.is_settled() {
            Err(Error::msg("board parse error, floating piece"))?
        }
        Ok(board)
    }
}

#[cold]
fn unlikely_error<T>(e: T) -> T {
    e
}
