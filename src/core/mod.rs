pub mod board;
pub mod r#move;
pub mod setup;
pub mod types;

pub use board::Board;
pub use r#move::Move;
pub use setup::setup_from_strings;
pub use types::{Cell, Direction, DiscCount, Position, Side, BOARD_SIZE, DIRECTIONS};

/// The standard starting position.
pub fn initial_board() -> Board {
    Board::initial()
}
