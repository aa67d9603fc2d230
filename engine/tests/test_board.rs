use c5_engine::board::Board;
use c5_engine::errors::GameError;
use c5_engine::player::Symbol;

const ROWS: usize = 6;
const COLS: usize = 9;

fn board() -> Board {
    Board::new(ROWS, COLS)
}

#[test]
fn new_board_is_empty() {
    let b = board();
    assert!(b.is_empty());
    for row in 0..ROWS {
        for col in 0..COLS {
            assert_eq!(b.get(row, col), None);
        }
    }
}

#[test]
fn pieces_stack_from_the_bottom() {
    let mut b = board();
    assert_eq!(b.drop_piece(3, Symbol::X), Ok(0));
    assert_eq!(b.drop_piece(3, Symbol::O), Ok(1));
    assert_eq!(b.drop_piece(3, Symbol::X), Ok(2));
    assert_eq!(b.get(0, 3), Some(Symbol::X));
    assert_eq!(b.get(1, 3), Some(Symbol::O));
    assert_eq!(b.get(2, 3), Some(Symbol::X));
    assert!(!b.is_empty());
}

#[test]
fn every_column_fills_exactly_and_rejects_overflow() {
    for col in 0..COLS {
        let mut b = board();
        for expected_row in 0..ROWS {
            assert_eq!(b.drop_piece(col, Symbol::X), Ok(expected_row));
        }
        assert!(b.is_column_full(col));
        let before = b.clone();
        assert_eq!(b.drop_piece(col, Symbol::O), Err(GameError::ColumnFull));
        assert_eq!(b, before, "a rejected drop must not mutate the board");
    }
}

#[test]
fn render_shows_rows_top_down() {
    let mut b = board();
    b.drop_piece(0, Symbol::X).unwrap();
    b.drop_piece(1, Symbol::O).unwrap();

    let rendered = b.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), ROWS);
    // Top rows are blank; the bottom (last) line holds the pieces.
    assert_eq!(lines[0], "[ ]".repeat(COLS));
    let mut bottom = String::from("[X][O]");
    bottom.push_str(&"[ ]".repeat(COLS - 2));
    assert_eq!(lines[ROWS - 1], bottom);
}

#[test]
fn clear_empties_the_grid() {
    let mut b = board();
    for col in 0..COLS {
        b.drop_piece(col, Symbol::O).unwrap();
    }
    b.clear();
    assert!(b.is_empty());
    assert_eq!(b.render(), board().render());
}
