use common::games::tictactoe::{BOARD_SIZE, GameOutcome, Mark, Position, TicTacToeGameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Place(usize),
    Retry,
    Quit,
}

/// Cells are numbered 1-9 for the player, 0-8 internally.
pub fn parse_command(line: &str) -> Option<InputCommand> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(InputCommand::Quit),
        "r" | "retry" | "y" | "yes" => return Some(InputCommand::Retry),
        _ => {}
    }
    match trimmed.parse::<usize>() {
        Ok(number @ 1..=9) => Some(InputCommand::Place(number - 1)),
        _ => None,
    }
}

pub fn render_board(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let separator = "---+---+---";
    let mut rows = Vec::with_capacity(BOARD_SIZE);

    for (row, chunk) in state.board().cells().chunks(BOARD_SIZE).enumerate() {
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, &mark)| {
                let index = Position::new(row, col).to_index();
                let highlighted = winning_line.is_some_and(|line| line.contains(index));
                match (mark, highlighted) {
                    (Mark::Empty, _) => format!(" {} ", index + 1),
                    (mark, true) => format!("[{}]", mark),
                    (mark, false) => format!(" {} ", mark),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join(&format!("\n{}\n", separator))
}

pub fn outcome_message(outcome: GameOutcome, human_mark: Mark) -> Option<&'static str> {
    match outcome {
        GameOutcome::Ongoing => None,
        GameOutcome::Win(mark) if mark == human_mark => Some("You win!"),
        GameOutcome::Win(_) => Some("Computer wins!"),
        GameOutcome::Draw => Some("It's a draw!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::FirstPlayerMode;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("5\n"), Some(InputCommand::Place(4)));
        assert_eq!(parse_command(" 1 "), Some(InputCommand::Place(0)));
        assert_eq!(parse_command("Q"), Some(InputCommand::Quit));
        assert_eq!(parse_command("r"), Some(InputCommand::Retry));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("10"), None);
        assert_eq!(parse_command("x"), None);
    }

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let mut rng = SessionRng::new(0);
        let state = TicTacToeGameState::new(Mark::X, FirstPlayerMode::Human, &mut rng).unwrap();
        assert_eq!(
            render_board(&state),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_render_shows_marks() {
        let mut rng = SessionRng::new(0);
        let mut state = TicTacToeGameState::new(Mark::X, FirstPlayerMode::Human, &mut rng).unwrap();
        state.play_human(4).unwrap();
        let rendered = render_board(&state);
        assert!(rendered.contains(" 4 | X | 6 "), "{}", rendered);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameOutcome::Ongoing, Mark::X), None);
        assert_eq!(outcome_message(GameOutcome::Win(Mark::X), Mark::X), Some("You win!"));
        assert_eq!(outcome_message(GameOutcome::Win(Mark::O), Mark::X), Some("Computer wins!"));
        assert_eq!(outcome_message(GameOutcome::Draw, Mark::O), Some("It's a draw!"));
    }
}
