use crate::game::Player::{Red, Yellow};
use crate::game::{Board, Player, NUM_COLS, NUM_ROWS};
use anyhow::{Error, Result};
use bincode::config::Configuration;
use bincode::{config, decode_from_slice, encode_to_vec};
use log::warn;
use unroll::unroll_for_loops;

const EMPTY_BIT_FLAG: u16 = 0b10;
const RED_BIT_FLAG: u16 = 0b01;
const YELLOW_BIT_FLAG: u16 = 0b00;
const CELL_MASK: u16 = 0b11;
const ROW_MASK: u16 = (1 << (2 * NUM_COLS)) - 1;

const BIN_CONFIG: Configuration = config::standard().with_variable_int_encoding();

/// Pack each row into 2 bits per cell, column 0 in the lowest bits.
#[inline]
#[unroll_for_loops]
pub fn compress_board(board: &Board) -> [u16; NUM_ROWS] {
    let cells = board.cells();
    let mut packed = [0u16; NUM_ROWS];
    for r in 0..6 {
        for c in 0..7 {
            packed[r] |= cell_to_bits(&cells[r][c]) << (2 * c);
        }
    }
    packed
}

/// Reverse of `compress_board`. Rejects bit patterns no board
/// compresses to, including boards with floating pieces.
pub fn decompress_board(packed: &[u16; NUM_ROWS]) -> Result<Board> {
    let mut cells = [[None; NUM_COLS]; NUM_ROWS];
    for (row, &bits) in cells.iter_mut().zip(packed.iter()) {
        if bits & !ROW_MASK != 0 {
            Err(Error::msg("board decompress error, bits beyond last column"))?
        }
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = bits_to_cell((bits >> (2 * c)) & CELL_MASK)?;
        }
    }
    let board = Board::from_cells(cells);
    if !board.is_settled() {
        Err(Error::msg("board decompress error, floating piece"))?
    }
    Ok(board)
}

pub fn encode_board(board: &Board) -> Result<Vec<u8>> {
    encode_to_vec(compress_board(board), BIN_CONFIG)
        .map_err(|e| Error::msg(format!("board encode error: {:?}", e)))
}

pub fn decode_board(bytes: &[u8]) -> Result<Board> {
    let packed: [u16; NUM_ROWS] = match decode_from_slice(bytes, BIN_CONFIG) {
        Ok((packed, read)) if read == bytes.len() => packed,
        Ok((_, read)) => {
            warn!(
                "board decode error: {} trailing bytes",
                bytes.len() - read
            );
            Err(Error::msg("board decode error, trailing bytes"))?
        }
        Err(e) => {
            warn!("board decode error: {:?}", e);
            Err(Error::msg("board decode error"))?
        }
    };
    decompress_board(&packed).map_err(|e| {
        warn!("{}", e);
        e
    })
}

#[inline(always)]
fn cell_to_bits(cell: &Option<Player>) -> u16 {
    match cell {
        None => EMPTY_BIT_FLAG,
        Some(Red) => RED_BIT_FLAG,
        Some(Yellow) => YELLOW_BIT_FLAG,
    }
}

#[inline(always)]
fn bits_to_cell(bits: u16) -> Result<Option<Player>> {
    match bits {
        EMPTY_BIT_FLAG => Ok(None),
        RED_BIT_FLAG => Ok(Some(Red)),
        YELLOW_BIT_FLAG => Ok(Some(Yellow)),
        _ => Err(Error::msg("board decompress error, invalid cell bits")),
    }
}
