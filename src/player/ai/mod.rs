pub mod alpha_beta;
pub mod minimax;
pub mod random;

pub use alpha_beta::{search, search_root, search_with_stats, AlphaBetaAI, SearchResult, SearchStats};
pub use random::RandomAI;
