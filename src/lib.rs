pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logging;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{initial_board, Board, Cell, Move, Side};
pub use crate::error::GameError;
pub use crate::logic::{apply_move, evaluate, is_game_over, valid_moves};
pub use crate::player::ai::{search, search_root, SearchResult};
