pub mod ai;
pub mod controller;
pub mod tui;

pub use ai::{AlphaBetaAI, RandomAI};
pub use controller::PlayerController;
pub use tui::{TuiAction, TuiController};
