use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 8;

/// 手番・石の持ち主
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black, // 先手
    White, // 後手
}

impl Default for Side {
    fn default() -> Self {
        Side::Black
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }

    /// Material sign: Black counts positive, White negative.
    pub fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// マスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub fn display_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }
}

/// 盤面座標 (0-indexed, 行・列)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// One step in `dir`, or `None` when that leaves the board.
    pub fn offset(self, dir: Direction) -> Option<Position> {
        let row = self.row as i32 + dir.dr;
        let col = self.col as i32 + dir.dc;
        let size = BOARD_SIZE as i32;
        if row >= 0 && row < size && col >= 0 && col < size {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 8方向のうちの1つ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

pub const DIRECTIONS: [Direction; 8] = [
    Direction { dr: -1, dc: -1 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: 0, dc: -1 },
    Direction { dr: 0, dc: 1 },
    Direction { dr: 1, dc: -1 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: 1, dc: 1 },
];

/// 盤上の石の数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscCount {
    pub black: usize,
    pub white: usize,
    pub empty: usize,
}

impl DiscCount {
    pub fn of(&self, side: Side) -> usize {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }
}
