use othello_ai::config::OthelloConfig;
use othello_ai::display::{render_board, DisplayState, TerminalGuard};
use othello_ai::game::worker::SearchTask;
use othello_ai::game::{AiTurn, Game};
use othello_ai::logging;
use othello_ai::player::{TuiAction, TuiController};
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = OthelloConfig::load_or_default();
    logging::init_file_logging(&config.log)?;
    info!(?config, "starting");

    // ターミナル初期化 (guard の Drop で必ず復帰)
    let mut terminal = TerminalGuard::enter()?;
    let res = run(&config).await;
    terminal.restore()?;

    if let Err(e) = &res {
        warn!("exited with error: {:#}", e);
    }
    res
}

async fn run(config: &OthelloConfig) -> anyhow::Result<()> {
    let human = TuiController::new("You");
    let mut game = Game::new(config.play.human_side);
    let mut depth = config.search.initial_depth();
    let mut state = DisplayState::new();
    state.human_name = human.name().to_string();
    let mut flash: Option<String> = None;

    info!(human = %game.human, depth, "new game");

    loop {
        state.depth = depth;
        state.sync(&game, flash.take());

        if game.is_over() {
            render_board(&game.board, &state)?;
            print!("[n]: New game | [q]: Quit\r\n");
            match human.poll_action(&mut state, Duration::from_millis(100))? {
                Some(TuiAction::Quit) => return Ok(()),
                Some(TuiAction::NewGame) => game.reset()?,
                _ => {}
            }
            continue;
        }

        if !game.is_human_turn() {
            match game.begin_ai_turn()? {
                AiTurn::Passed => {
                    flash = Some("AI has no legal move and passes.".to_string());
                }
                AiTurn::Search { board, side } => {
                    let task = SearchTask::spawn(board, side, depth);
                    state.sync(&game, None);

                    // 探索中も画面とキー入力は生かしておく
                    while !task.is_finished() {
                        state.status_msg = Some(format!(
                            "AI is thinking... {:.1}s",
                            task.thinking_for().as_secs_f64()
                        ));
                        render_board(&game.board, &state)?;
                        print!("[q]: Quit\r\n");
                        if let Some(TuiAction::Quit) =
                            human.poll_action(&mut state, Duration::from_millis(50))?
                        {
                            info!("quit while the AI was thinking");
                            return Ok(());
                        }
                    }

                    let report = task.join().await?;
                    game.finish_ai_turn(report.result)?;
                }
            }
            continue;
        }

        match human.read_action(&game, &mut state)? {
            TuiAction::Quit => return Ok(()),
            TuiAction::Place(mv) => {
                if let Err(e) = game.play_human(mv) {
                    flash = Some(format!("Invalid move: {}", e));
                }
            }
            TuiAction::Pass => {
                if let Err(e) = game.pass_human() {
                    flash = Some(format!("Cannot pass: {}", e));
                }
            }
            TuiAction::NewGame => {
                if let Err(e) = game.reset() {
                    flash = Some(e.to_string());
                }
            }
            TuiAction::DepthUp => depth = config.search.clamp_depth(depth + 1),
            TuiAction::DepthDown => depth = config.search.clamp_depth(depth.saturating_sub(1)),
        }
    }
}
