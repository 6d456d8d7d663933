//! Plain minimax without pruning.
//!
//! Same leaf, pass and tie-break rules as [`super::alpha_beta`]; it visits the
//! whole tree and serves as the yardstick the pruned search is checked
//! against.

use super::alpha_beta::{SearchResult, SearchStats, SCORE_INF};
use crate::core::{Board, Side};
use crate::logic::{apply_move, evaluate, is_game_over, legal_moves};

pub fn minimax(board: &Board, depth: usize, is_maximizing: bool, root_side: Side) -> SearchResult {
    minimax_with_stats(board, depth, is_maximizing, root_side).0
}

pub fn minimax_with_stats(
    board: &Board,
    depth: usize,
    is_maximizing: bool,
    root_side: Side,
) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = walk(board, depth, is_maximizing, root_side, &mut stats);
    (result, stats)
}

fn walk(
    board: &Board,
    depth: usize,
    is_maximizing: bool,
    root_side: Side,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    let leaf = SearchResult {
        score: evaluate(board, root_side),
        best_move: None,
    };
    if depth == 0 || is_game_over(board) {
        return leaf;
    }

    let current = if is_maximizing {
        root_side
    } else {
        root_side.opponent()
    };
    let moves = legal_moves(board, current);
    if moves.is_empty() {
        return leaf;
    }

    let mut best = SearchResult {
        score: if is_maximizing { -SCORE_INF } else { SCORE_INF },
        best_move: None,
    };
    for mv in moves {
        let next_board = apply_move(board, &mv, current);
        let eval = walk(&next_board, depth - 1, !is_maximizing, root_side, stats).score;
        let better = if is_maximizing {
            eval > best.score
        } else {
            eval < best.score
        };
        if better {
            best.score = eval;
            best.best_move = Some(mv);
        }
    }
    best
}
