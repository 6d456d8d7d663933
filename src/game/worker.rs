//! Runs the AI search off the UI thread.
//!
//! One [`SearchTask`] per AI turn. The task cannot be cancelled; the front end
//! polls [`SearchTask::is_finished`] between key reads and joins once it is.

use crate::core::{Board, Side};
use crate::player::ai::{search_with_stats, SearchResult};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub result: SearchResult,
    pub side: Side,
    pub depth: usize,
    pub nodes: u64,
    pub elapsed: Duration,
}

pub struct SearchTask {
    handle: JoinHandle<SearchReport>,
    started: Instant,
}

impl SearchTask {
    /// Must be called from inside a tokio runtime.
    pub fn spawn(board: Board, side: Side, depth: usize) -> Self {
        let depth = depth.max(1);
        let handle = tokio::task::spawn_blocking(move || run_search(&board, side, depth));
        SearchTask {
            handle,
            started: Instant::now(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn thinking_for(&self) -> Duration {
        self.started.elapsed()
    }

    pub async fn join(self) -> anyhow::Result<SearchReport> {
        let report = self.handle.await?;
        Ok(report)
    }
}

fn run_search(board: &Board, side: Side, depth: usize) -> SearchReport {
    let start = Instant::now();
    let (result, stats) = search_with_stats(board, side, depth);
    let report = SearchReport {
        result,
        side,
        depth,
        nodes: stats.nodes,
        elapsed: start.elapsed(),
    };
    let best = result.best_move.map(|m| m.notation());
    let ms = report.elapsed.as_millis() as u64;
    info!(
        %side,
        depth,
        score = result.score,
        best = ?best,
        nodes = stats.nodes,
        ms,
        "search finished"
    );
    report
}
