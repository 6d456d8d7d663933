//! Errors raised by the game session when a caller breaks the turn rules.
//!
//! The rules engine itself is total; these are the checks the session makes
//! before it lets anything reach `apply_move`.

use crate::core::{Move, Side};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Side),

    #[error("pass not allowed: legal moves remain")]
    PassNotAllowed,

    #[error("a search is already running")]
    SearchInFlight,

    #[error("the game is over")]
    GameOver,

    #[error("bad board setup: {0}")]
    BadSetup(String),
}
