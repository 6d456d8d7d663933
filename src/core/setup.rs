use crate::core::{Board, Cell, Position, BOARD_SIZE};
use crate::error::GameError;

/// 文字列配列から盤面を初期化する
///
/// Each row is 8 cells, `B`/`X` black, `W`/`O` white, `.` empty. Whitespace
/// inside a row is ignored so rows may be written as `". . B W . . . ."`.
pub fn setup_from_strings(setup: &[&str]) -> Result<Board, GameError> {
    if setup.len() != BOARD_SIZE {
        return Err(GameError::BadSetup(format!(
            "expected {} rows, got {}",
            BOARD_SIZE,
            setup.len()
        )));
    }

    let mut board = Board::empty();
    for (row, line) in setup.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != BOARD_SIZE {
            return Err(GameError::BadSetup(format!(
                "row {} has {} cells",
                row,
                cells.len()
            )));
        }
        for (col, c) in cells.into_iter().enumerate() {
            let cell = Cell::from_char(c)
                .ok_or_else(|| GameError::BadSetup(format!("unknown cell '{}' at row {}", c, row)))?;
            board.set(Position::new(row, col), cell);
        }
    }
    Ok(board)
}

impl Board {
    pub fn from_rows(rows: &[&str]) -> Result<Board, GameError> {
        setup_from_strings(rows)
    }
}
