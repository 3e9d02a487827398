use crate::game::{Player, FOUR, NUM_COLS, NUM_ROWS};

/// vertical, horizontal, uphill, downhill, as (row, col) steps
pub(crate) const DELTAS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 1), (1, 1)];

/// the four cells starting at (`row`, `col`) and stepping by `delta`,
/// or `None` if any of them falls off the board
#[inline]
pub(crate) fn possible_win(
    cells: &[[Option<Player>; NUM_COLS]; NUM_ROWS],
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
) -> Option<[Option<Player>; FOUR]> {
    let mut window = [None; FOUR];
    for (i, slot) in window.iter_mut().enumerate() {
        let r = row as isize + i as isize * dr;
        let c = col as isize + i as isize * dc;
        if !(0..NUM_ROWS as isize).contains(&r) || !(0..NUM_COLS as isize).contains(&c) {
            return None;
        }
        *slot = cells[r as usize][c as usize];
    }
    Some(window)
}

/// every on-board window of four, direction by direction,
/// start cells in row-major order within each direction
pub(crate) fn win_locations(
    cells: &[[Option<Player>; NUM_COLS]; NUM_ROWS],
) -> impl Iterator<Item = [Option<Player>; FOUR]> + '_ {
    DELTAS.into_iter().flat_map(move |delta| {
        (0..NUM_ROWS).flat_map(move |r| {
            (0..NUM_COLS).filter_map(move |c| possible_win(cells, r, c, delta))
        })
    })
}

/// the owner of a window whose four cells are the same player
#[inline(always)]
pub(crate) fn window_owner(window: &[Option<Player>; FOUR]) -> Option<Player> {
    let first = window[0]?;
    window[1..]
        .iter()
        .all(|s| *s == Some(first))
        .then(|| first)
}
