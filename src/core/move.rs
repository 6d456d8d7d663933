use super::types::{Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 着手 (石を置くマス)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub to: Position,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Move {
            to: Position::new(row, col),
        }
    }

    pub fn row(&self) -> usize {
        self.to.row
    }

    pub fn col(&self) -> usize {
        self.to.col
    }

    /// Standard notation, column letter then 1-based row: (2, 3) is "d3".
    pub fn notation(&self) -> String {
        format!("{}{}", (b'a' + self.to.col as u8) as char, self.to.row + 1)
    }
}

impl From<Position> for Move {
    fn from(to: Position) -> Self {
        Move { to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.notation(), self.to)
    }
}
