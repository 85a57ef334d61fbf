mod board;
mod evaluator;
mod game_state;
mod match_rng;
mod player;
mod types;
mod win_detector;

pub mod config;
pub mod logger;

pub use board::{Board, CELL_COUNT};
pub use evaluator::{best_move, evaluate};
pub use game_state::GameState;
pub use match_rng::MatchRng;
pub use player::{Control, Difficulty, Player};
pub use types::{GameStatus, Mark, WinLine};
pub use win_detector::{check_win, check_win_with_line};
