//! AI-vs-AI self-play runner.
//!
//! Example: `selfplay --games 20 --black alphabeta:4 --white random --parallel`

use clap::Parser;
use othello_ai::config::OthelloConfig;
use othello_ai::logging;
use othello_ai::selfplay::{run_selfplay, save_stats, PlayerKind, SelfPlayConfig};

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Play Othello AIs against each other")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Black player: `alphabeta:<depth>` or `random`
    #[arg(long, default_value = "alphabeta:3", value_parser = parse_player)]
    black: PlayerKind,

    /// White player: `alphabeta:<depth>` or `random`
    #[arg(long, default_value = "random", value_parser = parse_player)]
    white: PlayerKind,

    /// Run games in parallel
    #[arg(long)]
    parallel: bool,

    /// Write the aggregate statistics to selfplay_reports/
    #[arg(long)]
    save_report: bool,
}

fn parse_player(s: &str) -> Result<PlayerKind, String> {
    match s.split_once(':') {
        Some(("alphabeta", depth)) => depth
            .parse::<usize>()
            .map(|d| PlayerKind::AlphaBeta { depth: d.max(1) })
            .map_err(|e| format!("bad depth '{}': {}", depth, e)),
        None if s == "alphabeta" => Ok(PlayerKind::AlphaBeta { depth: 3 }),
        None if s == "random" => Ok(PlayerKind::Random),
        _ => Err(format!("unknown player '{}'", s)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = OthelloConfig::load_or_default();
    logging::init_stderr_logging(&config.log)?;

    let stats = run_selfplay(&SelfPlayConfig {
        num_games: args.games,
        black: args.black,
        white: args.white,
        parallel: args.parallel,
    })?;

    println!("{}", stats.summary());

    if args.save_report {
        let path = save_stats(&stats)?;
        println!("Report: {}", path.display());
    }
    Ok(())
}
