mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, calculate_minimax_move, evaluate_move, minimax};
pub use error::MoveError;
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIDE, CELL_COUNT, GameMode, GameStatus, Mark, PlayerKind, Position};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
