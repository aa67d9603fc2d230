use crate::board::Board;
use crate::player::Symbol;

/// Board dimensions and run length to win, fixed at session construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub rows: usize,
    pub cols: usize,
    pub connect: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 9,
            connect: 5,
        }
    }
}

/// Scan steps for the four run directions: horizontal, vertical, ascending
/// diagonal and descending diagonal, each as `(row step, col step)`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Whole-board scan for `connect` consecutive equal symbols in any direction.
/// Short-circuits on the first qualifying run.
pub fn has_winner(board: &Board, connect: usize) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Some(anchor) = board.get(row, col) else {
                continue;
            };
            for (row_step, col_step) in DIRECTIONS {
                if run_from(board, row, col, row_step, col_step, connect, anchor) {
                    return true;
                }
            }
        }
    }
    false
}

/// True if `connect` cells starting at `(row, col)` and stepping by
/// `(row_step, col_step)` all hold `symbol`. The run's far end is bounds
/// checked up front so no out-of-range cell is ever read.
fn run_from(
    board: &Board,
    row: usize,
    col: usize,
    row_step: isize,
    col_step: isize,
    connect: usize,
    symbol: Symbol,
) -> bool {
    let span = (connect - 1) as isize;
    let end_row = row as isize + row_step * span;
    let end_col = col as isize + col_step * span;
    if end_row < 0 || end_row >= board.rows() as isize || end_col >= board.cols() as isize {
        return false;
    }
    (1..connect).all(|i| {
        let r = (row as isize + row_step * i as isize) as usize;
        let c = (col as isize + col_step * i as isize) as usize;
        board.get(r, c) == Some(symbol)
    })
}
