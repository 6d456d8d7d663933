//! AI-vs-AI games for checking playing strength and search cost.
//!
//! Only the aggregate statistics can be written out; individual games are
//! not kept.

use crate::core::{initial_board, Board, Side};
use crate::game::Outcome;
use crate::logic::{apply_move, is_game_over, is_valid_move, legal_moves};
use crate::player::{AlphaBetaAI, PlayerController, RandomAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    AlphaBeta { depth: usize },
    Random,
}

impl PlayerKind {
    pub fn build(self, side: Side) -> Box<dyn PlayerController> {
        match self {
            PlayerKind::AlphaBeta { depth } => Box::new(AlphaBetaAI::new(
                side,
                &format!("AlphaBeta-d{} ({})", depth, side),
                depth,
            )),
            PlayerKind::Random => Box::new(RandomAI::new(side, &format!("Random ({})", side))),
        }
    }

    pub fn label(self) -> String {
        match self {
            PlayerKind::AlphaBeta { depth } => format!("alphabeta:{}", depth),
            PlayerKind::Random => "random".to_string(),
        }
    }
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub black: PlayerKind,
    pub white: PlayerKind,
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub plies: usize,
    pub passes: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_plies: f64,
    pub avg_disc_margin: f64,
    pub avg_time_ms: f64,
    pub black_player: String,
    pub white_player: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(black: PlayerKind, white: PlayerKind) -> Self {
        Self {
            total_games: 0,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
            avg_plies: 0.0,
            avg_disc_margin: 0.0,
            avg_time_ms: 0.0,
            black_player: black.label(),
            white_player: white.label(),
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.outcome.winner {
            Some(Side::Black) => self.black_wins += 1,
            Some(Side::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let n = self.games.len() as f64;
        let total_plies: usize = self.games.iter().map(|g| g.plies).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        let total_margin: i64 = self
            .games
            .iter()
            .map(|g| g.outcome.black as i64 - g.outcome.white as i64)
            .sum();
        self.avg_plies = total_plies as f64 / n;
        self.avg_time_ms = total_time as f64 / n;
        self.avg_disc_margin = total_margin as f64 / n;
    }

    pub fn win_rate(&self, side: Side) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        let wins = match side {
            Side::Black => self.black_wins,
            Side::White => self.white_wins,
        };
        wins as f64 / self.total_games as f64
    }

    pub fn summary(&self) -> String {
        format!(
            "{} games | Black ({}) {} ({:.1}%) | White ({}) {} ({:.1}%) | Draws {} | avg plies {:.1} | avg margin {:+.1} | avg {:.0} ms",
            self.total_games,
            self.black_player,
            self.black_wins,
            self.win_rate(Side::Black) * 100.0,
            self.white_player,
            self.white_wins,
            self.win_rate(Side::White) * 100.0,
            self.draws,
            self.avg_plies,
            self.avg_disc_margin,
            self.avg_time_ms,
        )
    }
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    info!(
        games = config.num_games,
        black = %config.black.label(),
        white = %config.white.label(),
        parallel = config.parallel,
        "self-play started"
    );

    let play_one = |game_num: usize| -> GameResult {
        let black = config.black.build(Side::Black);
        let white = config.white.build(Side::White);
        let result = play_game(black.as_ref(), white.as_ref());
        debug!(
            game = game_num,
            black = result.outcome.black,
            white = result.outcome.white,
            plies = result.plies,
            "game finished"
        );
        result
    };

    let results: Vec<GameResult> = if config.parallel {
        (1..=config.num_games).into_par_iter().map(play_one).collect()
    } else {
        (1..=config.num_games).map(play_one).collect()
    };

    let mut stats = SelfPlayStats::new(config.black, config.white);
    for result in results {
        stats.add_result(result);
    }
    info!("{}", stats.summary());
    Ok(stats)
}

/// Plays one full game from the initial position, passing when a side has
/// no move, until neither side can play.
pub fn play_game(black: &dyn PlayerController, white: &dyn PlayerController) -> GameResult {
    play_from(initial_board(), Side::Black, black, white)
}

pub fn play_from(
    mut board: Board,
    mut current: Side,
    black: &dyn PlayerController,
    white: &dyn PlayerController,
) -> GameResult {
    let start = Instant::now();
    let mut plies = 0;
    let mut passes = 0;

    while !is_game_over(&board) {
        let controller = match current {
            Side::Black => black,
            Side::White => white,
        };
        let moves = legal_moves(&board, current);
        if moves.is_empty() {
            passes += 1;
        } else {
            match controller.choose_move(&board, &moves) {
                Some(mv) if is_valid_move(&board, &mv, current) => {
                    board = apply_move(&board, &mv, current);
                    plies += 1;
                }
                other => {
                    // Never apply a move the rules reject; the turn is lost.
                    warn!(player = controller.name(), chosen = ?other, "no legal move chosen; passing");
                    passes += 1;
                }
            }
        }
        current = current.opponent();
    }

    GameResult {
        outcome: Outcome::from_board(&board),
        plies,
        passes,
        time_ms: start.elapsed().as_millis(),
    }
}

pub fn save_stats(stats: &SelfPlayStats) -> anyhow::Result<PathBuf> {
    let report_dir = "selfplay_reports";
    std::fs::create_dir_all(report_dir)?;

    let filename = PathBuf::from(format!(
        "{}/stats_{}.json",
        report_dir,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    info!(path = %filename.display(), "self-play report written");
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_games_finish() {
        let config = SelfPlayConfig {
            num_games: 4,
            black: PlayerKind::Random,
            white: PlayerKind::Random,
            parallel: false,
        };
        let stats = run_selfplay(&config).unwrap();
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.black_wins + stats.white_wins + stats.draws, 4);
        for game in &stats.games {
            assert!(game.outcome.black + game.outcome.white <= 64);
            assert!(game.plies <= 60);
        }
    }

    #[test]
    fn test_parallel_alpha_beta_is_deterministic() {
        let config = SelfPlayConfig {
            num_games: 3,
            black: PlayerKind::AlphaBeta { depth: 1 },
            white: PlayerKind::AlphaBeta { depth: 2 },
            parallel: true,
        };
        let stats = run_selfplay(&config).unwrap();
        let first = stats.games[0].outcome;
        assert!(stats.games.iter().all(|g| g.outcome == first));
        assert_eq!(stats.black_player, "alphabeta:1");
    }

    #[test]
    fn test_stats_bookkeeping() {
        let mut stats = SelfPlayStats::new(PlayerKind::Random, PlayerKind::Random);
        let make = |black, white, winner| GameResult {
            outcome: Outcome {
                winner,
                black,
                white,
            },
            plies: 60,
            passes: 0,
            time_ms: 10,
        };
        stats.add_result(make(40, 24, Some(Side::Black)));
        stats.add_result(make(20, 44, Some(Side::White)));
        stats.add_result(make(32, 32, None));
        assert_eq!((stats.black_wins, stats.white_wins, stats.draws), (1, 1, 1));
        // margins +16, -24, 0
        assert!((stats.avg_disc_margin + 8.0 / 3.0).abs() < 1e-9);
        assert!((stats.win_rate(Side::Black) - 1.0 / 3.0).abs() < 1e-9);
        assert!((stats.avg_plies - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_play_from_passes_through_stuck_side() {
        // White cannot move; Black takes (0, 2) and the game ends
        let board = Board::from_rows(&[
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
        let black = AlphaBetaAI::new(Side::Black, "b", 1);
        let white = AlphaBetaAI::new(Side::White, "w", 1);
        let result = play_from(board, Side::White, &black, &white);
        assert_eq!(result.passes, 1);
        assert_eq!(result.plies, 1);
        assert_eq!(result.outcome.winner, Some(Side::Black));
        assert_eq!(result.outcome.black, 3);
    }
}
