use super::board::Board;
use super::error::TicTacToeError;
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::has_winner;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(input: BotInput) -> Result<usize, TicTacToeError> {
    select_move(&input.board, input.current_mark)
}

/// Picks the cell that is optimal for `mark` under optimal play from both
/// sides. Scores are +10/-10/0 with no depth adjustment, so a win in one and a
/// win in three rank equally; ties go to the lowest index.
pub fn select_move(board: &Board, mark: Mark) -> Result<usize, TicTacToeError> {
    let opponent_mark = mark.opponent().ok_or(TicTacToeError::InvalidMark)?;

    if has_winner(board, mark) || has_winner(board, opponent_mark) {
        return Err(TicTacToeError::NoLegalMoves);
    }

    let mut best: Option<(usize, i32)> = None;

    for index in board.available_cells() {
        let next = board.with_mark(index, mark)?;
        let score = minimax(&next, opponent_mark, mark, opponent_mark);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index).ok_or(TicTacToeError::NoLegalMoves)
}

pub fn evaluate_terminal(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<i32> {
    if has_winner(board, bot_mark) {
        return Some(WIN_SCORE);
    }
    if has_winner(board, opponent_mark) {
        return Some(LOSS_SCORE);
    }
    if board.is_full() {
        return Some(DRAW_SCORE);
    }
    None
}

fn minimax(board: &Board, turn: Mark, bot_mark: Mark, opponent_mark: Mark) -> i32 {
    if let Some(score) = evaluate_terminal(board, bot_mark, opponent_mark) {
        return score;
    }

    let is_maximizing = turn == bot_mark;
    let next_turn = if is_maximizing { opponent_mark } else { bot_mark };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_cells() {
        let mut next = *board;
        if next.place(index, turn).is_err() {
            continue;
        }
        let score = minimax(&next, next_turn, bot_mark, opponent_mark);

        if is_maximizing {
            if score > best_score {
                best_score = score;
            }
        } else if score < best_score {
            best_score = score;
        }
    }

    best_score
}
