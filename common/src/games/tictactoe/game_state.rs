use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::TicTacToeError;
use super::types::{FirstPlayerMode, GameOutcome, Mark, WinningLine};
use super::win_detector::check_win_with_line;

/// One human-versus-computer game. The outcome is always read off the board.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    computer_mark: Mark,
    first_player_mode: FirstPlayerMode,
    first_mark: Mark,
    current_mark: Mark,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(
        human_mark: Mark,
        first_player_mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Result<Self, TicTacToeError> {
        let computer_mark = human_mark.opponent().ok_or(TicTacToeError::InvalidMark)?;
        let first_mark = resolve_first_mark(human_mark, computer_mark, first_player_mode, rng);

        Ok(Self {
            board: Board::new(),
            human_mark,
            computer_mark,
            first_player_mode,
            first_mark,
            current_mark: first_mark,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn first_mark(&self) -> Mark {
        self.first_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_mark == self.human_mark
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.current_mark == self.computer_mark
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), TicTacToeError> {
        if self.is_over() {
            return Err(TicTacToeError::GameOver);
        }

        if mark != self.current_mark {
            return Err(TicTacToeError::NotYourTurn);
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);

        if !self.is_over() {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn play_human(&mut self, index: usize) -> Result<(), TicTacToeError> {
        self.place_mark(self.human_mark, index)
    }

    /// Runs the search for the computer's mark and applies the chosen cell.
    pub fn play_computer(&mut self) -> Result<usize, TicTacToeError> {
        if self.is_over() {
            return Err(TicTacToeError::GameOver);
        }
        if self.current_mark != self.computer_mark {
            return Err(TicTacToeError::NotYourTurn);
        }

        let index = calculate_move(BotInput::from_game_state(self))?;
        self.place_mark(self.computer_mark, index)?;
        Ok(index)
    }

    /// Clears the board and picks the opening player again.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.board.clear();
        self.first_mark = resolve_first_mark(
            self.human_mark,
            self.computer_mark,
            self.first_player_mode,
            rng,
        );
        self.current_mark = self.first_mark;
        self.last_move = None;
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == self.human_mark {
            self.computer_mark
        } else {
            self.human_mark
        };
    }
}

fn resolve_first_mark(
    human_mark: Mark,
    computer_mark: Mark,
    first_player_mode: FirstPlayerMode,
    rng: &mut SessionRng,
) -> Mark {
    match first_player_mode {
        FirstPlayerMode::Human => human_mark,
        FirstPlayerMode::Computer => computer_mark,
        FirstPlayerMode::Random => {
            if rng.random_bool() {
                human_mark
            } else {
                computer_mark
            }
        }
    }
}
