//! Game session: the board, whose turn it is, and the rules for who may act.
//!
//! All state lives in [`Game`] and is passed around explicitly; the search
//! only ever sees a copied [`Board`].

pub mod worker;

use crate::core::{initial_board, Board, DiscCount, Move, Side};
use crate::error::GameError;
use crate::logic::{apply_move, is_game_over, is_valid_move, legal_moves};
use crate::player::ai::SearchResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 履歴の1手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ply {
    Place { side: Side, mv: Move },
    Pass { side: Side },
}

/// 終局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Option<Side>,
    pub black: usize,
    pub white: usize,
}

impl Outcome {
    pub fn from_board(board: &Board) -> Self {
        let DiscCount { black, white, .. } = board.disc_count();
        let winner = if black > white {
            Some(Side::Black)
        } else if white > black {
            Some(Side::White)
        } else {
            None
        };
        Outcome {
            winner,
            black,
            white,
        }
    }
}

/// What the AI turn turned out to be when it was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTurn {
    /// The AI had no legal move; the turn has already passed back.
    Passed,
    /// Search this board for the AI side and hand the result to
    /// [`Game::finish_ai_turn`].
    Search { board: Board, side: Side },
}

pub struct Game {
    pub board: Board,
    pub current_player: Side,
    pub human: Side,
    pub history: Vec<Ply>,
    ai_thinking: bool,
}

impl Game {
    pub fn new(human: Side) -> Self {
        Game {
            board: initial_board(),
            current_player: Side::Black,
            human,
            history: Vec::new(),
            ai_thinking: false,
        }
    }

    pub fn ai_side(&self) -> Side {
        self.human.opponent()
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.ai_thinking
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_player == self.human
    }

    pub fn is_over(&self) -> bool {
        is_game_over(&self.board)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_over() {
            Some(Outcome::from_board(&self.board))
        } else {
            None
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.current_player)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.iter().rev().find_map(|ply| match ply {
            Ply::Place { mv, .. } => Some(*mv),
            Ply::Pass { .. } => None,
        })
    }

    /// 新規対局。探索中は受け付けない
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.ai_thinking {
            return Err(GameError::SearchInFlight);
        }
        self.board = initial_board();
        self.current_player = Side::Black;
        self.history.clear();
        info!(human = %self.human, "new game");
        Ok(())
    }

    fn check_human_may_act(&self) -> Result<(), GameError> {
        if self.ai_thinking {
            return Err(GameError::SearchInFlight);
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn(self.human));
        }
        Ok(())
    }

    pub fn play_human(&mut self, mv: Move) -> Result<(), GameError> {
        self.check_human_may_act()?;
        if !is_valid_move(&self.board, &mv, self.human) {
            return Err(GameError::IllegalMove(mv));
        }
        self.place(mv);
        Ok(())
    }

    pub fn pass_human(&mut self) -> Result<(), GameError> {
        self.check_human_may_act()?;
        if !self.legal_moves().is_empty() {
            return Err(GameError::PassNotAllowed);
        }
        self.pass();
        Ok(())
    }

    /// Starts the AI's turn. When the AI has nothing to play it passes here
    /// and no search is needed.
    pub fn begin_ai_turn(&mut self) -> Result<AiTurn, GameError> {
        if self.ai_thinking {
            return Err(GameError::SearchInFlight);
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player != self.ai_side() {
            return Err(GameError::NotYourTurn(self.ai_side()));
        }
        if self.legal_moves().is_empty() {
            self.pass();
            return Ok(AiTurn::Passed);
        }
        self.ai_thinking = true;
        Ok(AiTurn::Search {
            board: self.board,
            side: self.current_player,
        })
    }

    /// Applies the search result for the AI turn in flight.
    pub fn finish_ai_turn(&mut self, result: SearchResult) -> Result<(), GameError> {
        if !self.ai_thinking {
            return Err(GameError::NotYourTurn(self.ai_side()));
        }
        self.ai_thinking = false;
        match result.best_move {
            Some(mv) if is_valid_move(&self.board, &mv, self.current_player) => {
                self.place(mv);
                Ok(())
            }
            Some(mv) => Err(GameError::IllegalMove(mv)),
            None => {
                self.pass();
                Ok(())
            }
        }
    }

    fn place(&mut self, mv: Move) {
        let side = self.current_player;
        self.board = apply_move(&self.board, &mv, side);
        self.history.push(Ply::Place { side, mv });
        self.current_player = side.opponent();
        let counts = self.board.disc_count();
        let notation = mv.notation();
        debug!(%side, mv = %notation, black = counts.black, white = counts.white, "move");
        if let Some(outcome) = self.outcome() {
            info!(
                black = outcome.black,
                white = outcome.white,
                winner = ?outcome.winner,
                "game over"
            );
        }
    }

    fn pass(&mut self) {
        let side = self.current_player;
        self.history.push(Ply::Pass { side });
        self.current_player = side.opponent();
        info!(%side, "pass");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_human_move_then_ai_turn() {
        let mut game = Game::new(Side::Black);
        assert!(game.is_human_turn());
        game.play_human(Move::new(2, 3)).unwrap();
        assert_eq!(game.current_player, Side::White);
        assert_eq!(game.board.discs(Side::Black), 4);
        assert_eq!(game.last_move(), Some(Move::new(2, 3)));

        let turn = game.begin_ai_turn().unwrap();
        let (board, side) = match turn {
            AiTurn::Search { board, side } => (board, side),
            AiTurn::Passed => panic!("white has moves"),
        };
        assert_eq!(side, Side::White);
        assert_eq!(board, game.board);
        assert!(game.is_ai_thinking());

        let result = crate::player::ai::search_root(&board, side, 2);
        game.finish_ai_turn(result).unwrap();
        assert!(!game.is_ai_thinking());
        assert_eq!(game.current_player, Side::Black);
        assert_eq!(game.history.len(), 2);
    }

    #[test]
    fn test_illegal_click_is_rejected() {
        let mut game = Game::new(Side::Black);
        let before = game.board;
        assert_eq!(
            game.play_human(Move::new(0, 0)),
            Err(GameError::IllegalMove(Move::new(0, 0)))
        );
        assert_eq!(game.board, before);
        assert_eq!(game.current_player, Side::Black);
    }

    #[test]
    fn test_out_of_turn_actions() {
        let mut game = Game::new(Side::White);
        assert_eq!(
            game.play_human(Move::new(2, 4)),
            Err(GameError::NotYourTurn(Side::White))
        );
        let mut game = Game::new(Side::Black);
        assert_eq!(game.begin_ai_turn(), Err(GameError::NotYourTurn(Side::White)));
    }

    #[test]
    fn test_pass_only_without_moves() {
        let mut game = Game::new(Side::Black);
        assert_eq!(game.pass_human(), Err(GameError::PassNotAllowed));

        // Black has nothing to flank, White still does
        game.board = Board::from_rows(&[
            "WB......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        assert!(!game.is_over());
        game.pass_human().unwrap();
        assert_eq!(game.current_player, Side::White);
        assert_eq!(game.history, vec![Ply::Pass { side: Side::Black }]);
    }

    #[test]
    fn test_ai_passes_without_search() {
        let mut game = Game::new(Side::Black);
        game.current_player = Side::White;
        game.board = Board::from_rows(&[
            "BW......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        assert_eq!(game.begin_ai_turn(), Ok(AiTurn::Passed));
        assert!(!game.is_ai_thinking());
        assert_eq!(game.current_player, Side::Black);
    }

    #[test]
    fn test_single_search_in_flight() {
        let mut game = Game::new(Side::White);
        assert!(matches!(game.begin_ai_turn(), Ok(AiTurn::Search { .. })));
        assert_eq!(game.begin_ai_turn(), Err(GameError::SearchInFlight));
        assert_eq!(game.reset(), Err(GameError::SearchInFlight));
        assert_eq!(game.pass_human(), Err(GameError::SearchInFlight));
    }

    #[test]
    fn test_finished_game_outcome() {
        let mut game = Game::new(Side::Black);
        assert!(game.outcome().is_none());
        let mut board = Board::empty();
        for (i, pos) in Position::all().enumerate() {
            board.set(pos, if i < 40 { Side::Black.to_cell() } else { Side::White.to_cell() });
        }
        game.board = board;
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.winner, Some(Side::Black));
        assert_eq!((outcome.black, outcome.white), (40, 24));
        assert_eq!(game.play_human(Move::new(0, 0)), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_outcome() {
        let mut board = Board::empty();
        for (i, pos) in Position::all().enumerate() {
            board.set(pos, if i % 2 == 0 { Side::Black.to_cell() } else { Side::White.to_cell() });
        }
        assert_eq!(Outcome::from_board(&board).winner, None);
    }
}
