use crate::core::{Board, Cell, Move, Position, Side, BOARD_SIZE};
use crate::game::{Game, Outcome};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub show_cursor: bool,
    pub depth: usize,
    pub human_name: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::new(2, 3),
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: true,
            depth: 0,
            human_name: "You".to_string(),
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes highlights, last move and the default status line from the
    /// session. A pending flash message wins over the default status.
    pub fn sync(&mut self, game: &Game, flash: Option<String>) {
        self.highlights = if game.is_ai_thinking() {
            Vec::new()
        } else {
            game.legal_moves().iter().map(|m| m.to).collect()
        };
        self.last_move = game.last_move();
        self.status_msg = Some(flash.unwrap_or_else(|| status_line(game, &self.human_name)));
    }
}

fn side_label(side: Side, game: &Game, human_name: &str) -> String {
    let who = if side == game.human { human_name } else { "AI" };
    format!("{} ({})", who, side)
}

/// 手番表示
pub fn status_line(game: &Game, human_name: &str) -> String {
    if let Some(outcome) = game.outcome() {
        return result_message(&outcome, game.human);
    }
    if game.is_ai_thinking() {
        return "AI is thinking...".to_string();
    }
    let moves = game.legal_moves();
    let side = game.current_player;
    if moves.is_empty() {
        if side == game.human {
            format!("{} has no legal move. Press [p] to pass.", side_label(side, game, human_name))
        } else {
            format!("{} has no legal move and passes.", side_label(side, game, human_name))
        }
    } else {
        format!(
            "{}'s turn. Legal moves: {}",
            side_label(side, game, human_name),
            moves.len()
        )
    }
}

pub fn result_message(outcome: &Outcome, human: Side) -> String {
    let score = format!("Black={}  White={}", outcome.black, outcome.white);
    match outcome.winner {
        Some(side) if side == human => format!("You win! {}", score),
        Some(_) => format!("The computer wins. {}", score),
        None => format!("Draw. {}", score),
    }
}

/// Raw mode plus alternate screen for as long as the guard lives.
///
/// Dropping it restores the terminal, including while unwinding from a panic
/// or returning early with an error.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        // 生成後は失敗しても Drop で元に戻す
        let guard = TerminalGuard { active: true };
        execute!(stdout(), terminal::EnterAlternateScreen)?;
        Ok(guard)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Leaves the alternate screen and raw mode. Later calls do nothing.
    pub fn restore(&mut self) -> std::io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let screen = execute!(stdout(), terminal::LeaveAlternateScreen);
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

pub fn render_board(board: &Board, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Othello / Reversi ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("AI depth: {}\r\n\r\n", state.depth);

    print!("    ");
    for col in 0..BOARD_SIZE {
        print!(" {} ", (b'a' + col as u8) as char);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "---".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("{:2} |", row + 1);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let cell = board.get(pos);
            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_highlight = state.highlights.contains(&pos);
            let is_last_move = state.last_move.map(|m| m.to == pos).unwrap_or(false);

            let glyph = match cell {
                Cell::Black => "●",
                Cell::White => "○",
                Cell::Empty if is_highlight => "·",
                Cell::Empty => " ",
            };

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };
            let cell_text = format!("{}{}{}", prefix, glyph, suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else if is_highlight {
                print!("{}", cell_text.green());
            } else {
                match cell {
                    Cell::Black => print!("{}", cell_text.cyan()),
                    Cell::White => print!("{}", cell_text.magenta()),
                    Cell::Empty => print!("{}", cell_text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "---".repeat(BOARD_SIZE));

    let counts = board.disc_count();
    print!("● Black: {:2}   ○ White: {:2}\r\n", counts.black, counts.white);
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_guard_restore_is_noop() {
        let mut guard = TerminalGuard { active: false };
        assert!(guard.restore().is_ok());
        assert!(!guard.is_active());
        drop(guard);
    }

    #[test]
    fn test_status_line_turns() {
        let game = Game::new(Side::Black);
        assert_eq!(status_line(&game, "You"), "You (Black)'s turn. Legal moves: 4");
        assert_eq!(status_line(&game, "Alice"), "Alice (Black)'s turn. Legal moves: 4");
    }

    #[test]
    fn test_result_messages() {
        let outcome = Outcome {
            winner: Some(Side::White),
            black: 20,
            white: 44,
        };
        assert_eq!(
            result_message(&outcome, Side::Black),
            "The computer wins. Black=20  White=44"
        );
        assert!(result_message(&outcome, Side::White).starts_with("You win!"));
        let draw = Outcome {
            winner: None,
            black: 32,
            white: 32,
        };
        assert!(result_message(&draw, Side::Black).starts_with("Draw."));
    }

    #[test]
    fn test_sync_highlights_legal_moves() {
        let game = Game::new(Side::Black);
        let mut state = DisplayState::new();
        state.sync(&game, Some("flash".to_string()));
        assert_eq!(state.highlights.len(), 4);
        assert_eq!(state.status_msg.as_deref(), Some("flash"));
        state.human_name = "Alice".to_string();
        state.sync(&game, None);
        assert_eq!(
            state.status_msg.as_deref(),
            Some("Alice (Black)'s turn. Legal moves: 4")
        );
    }
}
