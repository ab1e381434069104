mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, available_cells, is_full};
pub use bot_controller::{BotInput, calculate_move, select_move, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use error::TicTacToeError;
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, CELL_COUNT, FirstPlayerMode, GameOutcome, Mark, Position, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, has_winner};
