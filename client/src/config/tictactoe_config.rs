use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, Mark};
use common::{DEFAULT_COMPUTER_DELAY_MS, MAX_COMPUTER_DELAY_MS};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub human_mark: Mark,
    pub first_player: FirstPlayerMode,
    pub computer_delay_ms: u64,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            first_player: FirstPlayerMode::Human,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}
