use crate::core::{Board, Cell, Direction, Move, Position, Side, DIRECTIONS};

/// 合法手生成
///
/// Row-major order, each square at most once, so callers that break ties by
/// "first seen" get the same answer on every run.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    Position::all()
        .filter(|&pos| is_legal_at(board, pos, side))
        .map(Move::from)
        .collect()
}

/// Same as [`legal_moves`]; kept under the rules' own name.
pub fn valid_moves(board: &Board, side: Side) -> Vec<Move> {
    legal_moves(board, side)
}

pub fn is_valid_move(board: &Board, mv: &Move, side: Side) -> bool {
    is_legal_at(board, mv.to, side)
}

pub fn has_any_move(board: &Board, side: Side) -> bool {
    Position::all().any(|pos| is_legal_at(board, pos, side))
}

/// 終局判定: 両者とも打てる手がない
pub fn is_game_over(board: &Board) -> bool {
    !has_any_move(board, Side::Black) && !has_any_move(board, Side::White)
}

fn is_legal_at(board: &Board, pos: Position, side: Side) -> bool {
    if board.get(pos) != Cell::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| flank_length(board, pos, dir, side) > 0)
}

/// Number of opponent discs between `from` and the nearest `side` disc along
/// `dir`. Zero when the run hits the edge or an empty square first.
fn flank_length(board: &Board, from: Position, dir: Direction, side: Side) -> usize {
    let own = side.to_cell();
    let opponent = side.opponent().to_cell();
    let mut run = 0;
    let mut curr = from;

    while let Some(next) = curr.offset(dir) {
        match board.get(next) {
            c if c == opponent => {
                run += 1;
                curr = next;
            }
            c if c == own => return run,
            _ => return 0,
        }
    }
    0
}

/// 着手適用
///
/// The move must be legal for `side`; the caller checks that first. Every
/// direction is measured on the board as it was before the move, so flips
/// along one line never affect another.
pub fn apply_move(board: &Board, mv: &Move, side: Side) -> Board {
    debug_assert!(
        is_valid_move(board, mv, side),
        "apply_move called with illegal move {} for {}",
        mv,
        side
    );

    let mut next = *board;
    next.set(mv.to, side.to_cell());

    for &dir in DIRECTIONS.iter() {
        let run = flank_length(board, mv.to, dir, side);
        let mut curr = mv.to;
        for _ in 0..run {
            match curr.offset(dir) {
                Some(p) => {
                    next.set(p, side.to_cell());
                    curr = p;
                }
                None => break,
            }
        }
    }

    next
}

/// 評価関数 (石数の差)
///
/// Positive favors `side`.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let mut score = 0;
    for row in board.rows() {
        for cell in row {
            if let Some(owner) = cell.owner() {
                score += owner.sign();
            }
        }
    }
    score * side.sign()
}
