use crate::core::{Board, Move, Side};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Uniform pick among the legal moves. Used as a sparring partner in self-play.
pub struct RandomAI {
    side: Side,
    pub name: String,
    /// Seeded generator; `None` draws from `thread_rng`.
    rng: Option<Mutex<StdRng>>,
}

impl RandomAI {
    pub fn new(side: Side, name: &str) -> Self {
        RandomAI {
            side,
            name: name.to_string(),
            rng: None,
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(side: Side, name: &str, seed: u64) -> Self {
        RandomAI {
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
            ..Self::new(side, name)
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[Move]) -> Option<Move> {
        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                legal_moves.choose(&mut *rng).cloned()
            }
            None => legal_moves.choose(&mut rand::thread_rng()).cloned(),
        }
    }

    fn side(&self) -> Side {
        self.side
    }
}
