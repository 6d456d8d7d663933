use crate::core::{Move, Position, BOARD_SIZE};
use crate::display::{render_board, DisplayState};
use crate::game::Game;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

/// 人間の入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiAction {
    Place(Move),
    Pass,
    NewGame,
    DepthUp,
    DepthDown,
    Quit,
}

/// Cursor-driven keyboard input. Moves the cursor itself and reports
/// everything else as a [`TuiAction`]; legality is the session's call.
pub struct TuiController {
    name: String,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waits up to `timeout` for a key. Returns `Ok(None)` when nothing
    /// actionable arrived so the caller can keep polling other work.
    pub fn poll_action(
        &self,
        state: &mut DisplayState,
        timeout: Duration,
    ) -> anyhow::Result<Option<TuiAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind == KeyEventKind::Release {
                return Ok(None);
            }
            return Ok(handle_key(code, &mut state.cursor));
        }
        Ok(None)
    }

    /// Blocks until the human picks an action, redrawing on cursor moves.
    pub fn read_action(&self, game: &Game, state: &mut DisplayState) -> anyhow::Result<TuiAction> {
        loop {
            render_board(&game.board, state)?;
            print!(
                "[Arrows]: Move | [Enter]: Place | [p]: Pass | [n]: New | [+/-]: Depth | [q]: Quit\r\n"
            );
            if let Some(action) = self.poll_action(state, Duration::from_millis(100))? {
                return Ok(action);
            }
        }
    }
}

fn handle_key(code: KeyCode, cursor: &mut Position) -> Option<TuiAction> {
    match code {
        KeyCode::Char('q') => Some(TuiAction::Quit),
        KeyCode::Char('p') => Some(TuiAction::Pass),
        KeyCode::Char('n') => Some(TuiAction::NewGame),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(TuiAction::DepthUp),
        KeyCode::Char('-') => Some(TuiAction::DepthDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TuiAction::Place(Move::from(*cursor))),
        KeyCode::Up => {
            if cursor.row > 0 {
                cursor.row -= 1;
            }
            None
        }
        KeyCode::Down => {
            if cursor.row < BOARD_SIZE - 1 {
                cursor.row += 1;
            }
            None
        }
        KeyCode::Left => {
            if cursor.col > 0 {
                cursor.col -= 1;
            }
            None
        }
        KeyCode::Right => {
            if cursor.col < BOARD_SIZE - 1 {
                cursor.col += 1;
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_on_board() {
        let mut cursor = Position::new(0, 7);
        assert_eq!(handle_key(KeyCode::Up, &mut cursor), None);
        assert_eq!(handle_key(KeyCode::Right, &mut cursor), None);
        assert_eq!(cursor, Position::new(0, 7));
        handle_key(KeyCode::Down, &mut cursor);
        handle_key(KeyCode::Left, &mut cursor);
        assert_eq!(cursor, Position::new(1, 6));
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut cursor = Position::new(2, 3);
        assert_eq!(
            handle_key(KeyCode::Enter, &mut cursor),
            Some(TuiAction::Place(Move::new(2, 3)))
        );
        assert_eq!(handle_key(KeyCode::Char('p'), &mut cursor), Some(TuiAction::Pass));
        assert_eq!(handle_key(KeyCode::Char('q'), &mut cursor), Some(TuiAction::Quit));
        assert_eq!(handle_key(KeyCode::Char('+'), &mut cursor), Some(TuiAction::DepthUp));
        assert_eq!(handle_key(KeyCode::Char('x'), &mut cursor), None);
    }
}
