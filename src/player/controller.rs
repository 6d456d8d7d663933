use crate::core::{Board, Move, Side};

/// プレイヤー操作のtrait
pub trait PlayerController: Send + Sync {
    /// `None` only when `legal_moves` is empty (the side passes).
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
    fn side(&self) -> Side;
}
