use crate::errors::GameError;
use crate::player::Symbol;

/// The shared game grid. Cells are addressed `[row][col]` with row 0 at the
/// bottom, so pieces stack upwards from index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<Symbol>>>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![None; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells[row][col]
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[self.rows - 1][col].is_some()
    }

    /// Drops a piece into `col` and returns the row it landed on. The column
    /// index must already be validated against `cols` by the caller.
    pub fn drop_piece(&mut self, col: usize, symbol: Symbol) -> Result<usize, GameError> {
        debug_assert!(col < self.cols, "column validated by the caller");
        for row in 0..self.rows {
            if self.cells[row][col].is_none() {
                self.cells[row][col] = Some(symbol);
                return Ok(row);
            }
        }
        Err(GameError::ColumnFull)
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_none()))
    }

    /// Renders the grid top row first, one `[X][ ]...` line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols * 3 + 1));
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                out.push('[');
                out.push(match self.cells[row][col] {
                    Some(symbol) => symbol.glyph(),
                    None => ' ',
                });
                out.push(']');
            }
            out.push('\n');
        }
        out
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(None);
        }
    }
}
