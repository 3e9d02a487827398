use connect_four::{
    decode_board, encode_board, Board, GameState, IllegalMove, Move, Player, NUM_COLS, NUM_ROWS,
};
use lazy_static::lazy_static;
use rand::prelude::*;

const GAMES: usize = 200;

lazy_static! {
    /// full, no four in a row: red where `(col + row / 2)` is even
    static ref DRAWN: Board = {
        let mut b = Board::new();
        for c in 0..NUM_COLS {
            for r in (0..NUM_ROWS).rev() {
                let p = if (c + r / 2) % 2 == 0 { Player::Red } else { Player::Yellow };
                b.apply(Move::new(p, c)).unwrap();
            }
        }
        b
    };
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn heights(board: &Board) -> Vec<usize> {
    (0..NUM_COLS).map(|c| board.column_height(c)).collect()
}

/// Play random columns (full ones included) until the board is full,
/// calling `check` before every attempt.
fn random_game<R: Rng>(rng: &mut R, mut check: impl FnMut(&Board, Move)) -> Board {
    let mut board = Board::new();
    let mut player = if rng.gen() { Player::Red } else { Player::Yellow };
    while !board.is_full() {
        let mv = Move::new(player, rng.gen_range(0..NUM_COLS));
        check(&board, mv);
        if board.apply(mv).is_ok() {
            player = player.other();
        }
    }
    board
}

#[test]
fn test_apply_adds_one_piece() {
    init_logger();
    let mut rng = thread_rng();
    for _ in 0..GAMES {
        random_game(&mut rng, |board, mv| {
            let before = heights(board);
            let mut after_board = *board;
            match after_board.apply(mv) {
                Ok(()) => {
                    let after = heights(&after_board);
                    for c in 0..NUM_COLS {
                        if c == mv.column() {
                            assert_eq!(after[c], before[c] + 1);
                        } else {
                            assert_eq!(after[c], before[c]);
                        }
                    }
                    assert!(after_board.is_settled());
                }
                Err(e) => {
                    assert_eq!(e, IllegalMove::ColumnFull { column: mv.column() });
                    assert_eq!(before[mv.column()], NUM_ROWS);
                    assert_eq!(&after_board, board);
                }
            }
        });
    }
}

#[test]
fn test_possible_moves_follow_state() {
    init_logger();
    let mut rng = thread_rng();
    for _ in 0..GAMES {
        let last = random_game(&mut rng, |board, _| {
            for player in [Player::Red, Player::Yellow] {
                let moves = board.possible_moves(player);
                match board.winner() {
                    Some(_) => assert!(moves.is_empty()),
                    None => {
                        let open: Vec<usize> =
                            (0..NUM_COLS).filter(|&c| !board.is_column_full(c)).collect();
                        let cols: Vec<usize> = moves.iter().map(|m| m.column()).collect();
                        assert_eq!(cols, open);
                        assert!(moves.iter().all(|m| m.player() == player));
                    }
                }
            }
        });
        assert!(last.possible_moves(Player::Red).is_empty());
        assert_ne!(last.state(), GameState::InProgress);
    }
}

#[test]
fn test_played_until_win() {
    init_logger();
    let mut rng = thread_rng();
    for _ in 0..GAMES {
        let mut board = Board::new();
        let mut player = Player::Red;
        while let Some(mv) = board.possible_moves(player).choose(&mut rng).copied() {
            assert_eq!(board.state(), GameState::InProgress);
            board = board.with_move(mv).unwrap();
            player = player.other();
        }
        match board.state() {
            GameState::Won(p) => assert_eq!(p, player.other()),
            GameState::Drawn => assert!(board.is_full()),
            GameState::InProgress => panic!("no legal move on a board in progress"),
        }
    }
}

#[test]
fn test_copies_are_independent() {
    init_logger();
    let mut rng = thread_rng();
    let mut original = Board::new();
    for _ in 0..10 {
        let _ = original.apply(Move::new(Player::Red, rng.gen_range(0..NUM_COLS)));
    }
    let snapshot = original;
    let mut copy = original.clone();
    assert_eq!(copy, original);
    for c in 0..NUM_COLS {
        let _ = copy.apply(Move::new(Player::Yellow, c));
    }
    assert_eq!(original, snapshot);
    assert_ne!(copy, original);

    let copy_snapshot = copy;
    // ten red pieces may already hold a win, so pick the column by hand
    let open = (0..NUM_COLS).find(|&c| !original.is_column_full(c)).unwrap();
    original.apply(Move::new(Player::Red, open)).unwrap();
    assert_eq!(copy, copy_snapshot);
}

#[test]
fn test_encoding_of_reachable_boards() {
    init_logger();
    let mut rng = thread_rng();
    for _ in 0..GAMES {
        random_game(&mut rng, |board, _| {
            assert_eq!(&decode_board(&encode_board(board).unwrap()).unwrap(), board);
            assert_eq!(&board.to_string().parse::<Board>().unwrap(), board);
        });
    }
}

#[test]
fn test_drawn_board() {
    init_logger();
    assert!(DRAWN.is_full());
    assert_eq!(DRAWN.winner(), None);
    assert_eq!(DRAWN.state(), GameState::Drawn);
    assert!(DRAWN.possible_moves(Player::Red).is_empty());
    assert!(DRAWN.possible_moves(Player::Yellow).is_empty());
    for c in 0..NUM_COLS {
        assert_eq!(
            DRAWN.with_move(Move::new(Player::Red, c)),
            Err(IllegalMove::ColumnFull { column: c })
        );
    }
}
