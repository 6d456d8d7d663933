//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from `root_side`'s point of view: maximizing nodes are
//! `root_side` to move, minimizing nodes are the opponent. Moves are tried in
//! the generator's row-major order and ties keep the first move seen, so the
//! choice is reproducible.

use crate::core::{Board, Move, Side};
use crate::logic::{apply_move, evaluate, is_game_over, legal_moves};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// Stand-in for infinity in the alpha/beta window. Material scores stay
/// within [-64, 64] so this never collides with a real score.
pub const SCORE_INF: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at leaves and at nodes where the side to act has no move.
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        SearchResult {
            score,
            best_move: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// One node of the search, as called by the recursion.
pub fn search(
    board: &Board,
    depth: usize,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    root_side: Side,
) -> SearchResult {
    let mut stats = SearchStats::default();
    alpha_beta(board, depth, alpha, beta, maximizing, root_side, &mut stats)
}

/// Top-level call for `side` to move: full window, depth clamped to at least 1.
pub fn search_root(board: &Board, side: Side, depth: usize) -> SearchResult {
    search_with_stats(board, side, depth).0
}

pub fn search_with_stats(board: &Board, side: Side, depth: usize) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = alpha_beta(
        board,
        depth.max(1),
        -SCORE_INF,
        SCORE_INF,
        true,
        side,
        &mut stats,
    );
    (result, stats)
}

fn alpha_beta(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root_side: Side,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if depth == 0 || is_game_over(board) {
        return SearchResult::leaf(evaluate(board, root_side));
    }

    let to_move = if maximizing {
        root_side
    } else {
        root_side.opponent()
    };

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        // パス: 手番を渡して読み進めることはせず、その場で評価する
        return SearchResult::leaf(evaluate(board, root_side));
    }

    if maximizing {
        let mut best = SearchResult {
            score: -SCORE_INF,
            best_move: None,
        };
        for mv in moves {
            let next_board = apply_move(board, &mv, to_move);
            let child = alpha_beta(&next_board, depth - 1, alpha, beta, false, root_side, stats);
            if child.score > best.score {
                best.score = child.score;
                best.best_move = Some(mv);
            }
            alpha = alpha.max(child.score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SearchResult {
            score: SCORE_INF,
            best_move: None,
        };
        for mv in moves {
            let next_board = apply_move(board, &mv, to_move);
            let child = alpha_beta(&next_board, depth - 1, alpha, beta, true, root_side, stats);
            if child.score < best.score {
                best.score = child.score;
                best.best_move = Some(mv);
            }
            beta = beta.min(child.score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

pub struct AlphaBetaAI {
    side: Side,
    name: String,
    pub depth: usize,
}

impl AlphaBetaAI {
    pub fn new(side: Side, name: &str, depth: usize) -> Self {
        Self {
            side,
            name: name.to_string(),
            depth: depth.max(1),
        }
    }
}

impl PlayerController for AlphaBetaAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }
        search_root(board, self.side, self.depth).best_move
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        self.side
    }
}
