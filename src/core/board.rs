use super::types::{Cell, DiscCount, Position, Side, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面
///
/// A plain `Copy` value: every move produces a fresh board, so a search can
/// recurse on its own copy without undoing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 初期配置: 中央4マスに白黒2個ずつ (対角)
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(4, 4), Cell::White);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 3), Cell::Black);
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn discs(&self, side: Side) -> usize {
        self.count(side.to_cell())
    }

    pub fn disc_count(&self) -> DiscCount {
        let mut counts = DiscCount::default();
        for cell in self.cells.iter().flat_map(|row| row.iter()) {
            match cell {
                Cell::Black => counts.black += 1,
                Cell::White => counts.white += 1,
                Cell::Empty => counts.empty += 1,
            }
        }
        counts
    }

    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.display_char())?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
