mod tictactoe_runner;

pub use tictactoe_runner::{RunSummary, run_tictactoe_game};
