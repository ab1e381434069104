use std::error::Error;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use common::games::SessionRng;
use common::games::tictactoe::{GameOutcome, Mark, TicTacToeError, TicTacToeGameState};
use common::log;
use crate::config::TicTacToeConfig;
use crate::ui::{InputCommand, outcome_message, parse_command, render_board};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl RunSummary {
    fn record(&mut self, outcome: GameOutcome, human_mark: Mark) {
        match outcome {
            GameOutcome::Win(mark) if mark == human_mark => self.human_wins += 1,
            GameOutcome::Win(_) => self.computer_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

enum GameEnd {
    Finished(GameOutcome),
    Quit,
}

/// Plays games until the player quits or input runs out. Moves are read one
/// per line; the computer answers after `computer_delay_ms`.
pub async fn run_tictactoe_game<R, W>(
    input: R,
    output: &mut W,
    cfg: &TicTacToeConfig,
    rng: &mut SessionRng,
) -> Result<RunSummary, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut state = TicTacToeGameState::new(cfg.human_mark, cfg.first_player, rng)?;
    let delay = Duration::from_millis(cfg.computer_delay_ms);
    let mut summary = RunSummary::default();

    log!(
        "Starting game: human plays {}, {} moves first (seed {})",
        state.human_mark(),
        state.first_mark(),
        rng.seed()
    );

    loop {
        match play_game(&mut state, &mut lines, output, delay).await? {
            GameEnd::Quit => break,
            GameEnd::Finished(outcome) => {
                summary.record(outcome, state.human_mark());
                log!("Game finished: {:?} after {} moves", outcome, state.move_count());
            }
        }

        if !wait_for_retry(&mut lines, output).await? {
            break;
        }

        state.reset(rng);
        log!("Game reset, {} moves first", state.first_mark());
    }

    writeln!(
        output,
        "Games: {}  You: {}  Computer: {}  Draws: {}",
        summary.games_played(),
        summary.human_wins,
        summary.computer_wins,
        summary.draws
    )?;
    output.flush()?;

    Ok(summary)
}

async fn play_game<R, W>(
    state: &mut TicTacToeGameState,
    lines: &mut Lines<R>,
    output: &mut W,
    delay: Duration,
) -> Result<GameEnd, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "\n{}\n", render_board(state))?;

    loop {
        if let Some(message) = outcome_message(state.outcome(), state.human_mark()) {
            writeln!(output, "{}", message)?;
            output.flush()?;
            return Ok(GameEnd::Finished(state.outcome()));
        }

        if state.is_computer_turn() {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let index = state.play_computer()?;
            log!("Computer placed {} at cell {}", state.computer_mark(), index);
            writeln!(output, "Computer plays {}\n\n{}\n", index + 1, render_board(state))?;
            continue;
        }

        writeln!(output, "Your move ({}), 1-9 or q to quit:", state.human_mark())?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(GameEnd::Quit);
        };

        match parse_command(&line) {
            Some(InputCommand::Place(index)) => match state.play_human(index) {
                Ok(()) => {
                    log!("Human placed {} at cell {}", state.human_mark(), index);
                    writeln!(output, "\n{}\n", render_board(state))?;
                }
                Err(TicTacToeError::CellOccupied(index)) => {
                    writeln!(output, "Cell {} is already taken", index + 1)?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            Some(InputCommand::Quit) => return Ok(GameEnd::Quit),
            Some(InputCommand::Retry) | None => {
                writeln!(output, "Enter a cell number from 1 to 9")?;
            }
        }
    }
}

async fn wait_for_retry<R, W>(lines: &mut Lines<R>, output: &mut W) -> Result<bool, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        writeln!(output, "Press r to play again or q to quit")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };

        match parse_command(&line) {
            Some(InputCommand::Retry) => return Ok(true),
            Some(InputCommand::Quit) => return Ok(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::FirstPlayerMode;

    fn config(first_player: FirstPlayerMode) -> TicTacToeConfig {
        TicTacToeConfig {
            human_mark: Mark::X,
            first_player,
            computer_delay_ms: 0,
        }
    }

    async fn run(input: &str, cfg: &TicTacToeConfig) -> (RunSummary, String) {
        let mut output = Vec::new();
        let mut rng = SessionRng::new(5);
        let summary = run_tictactoe_game(input.as_bytes(), &mut output, cfg, &mut rng)
            .await
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_quit_before_moving() {
        let (summary, output) = run("q\n", &config(FirstPlayerMode::Human)).await;
        assert_eq!(summary.games_played(), 0);
        assert!(output.contains("Your move (X)"));
        assert!(output.contains("Games: 0"));
    }

    #[tokio::test]
    async fn test_computer_wins_against_first_free_cell_player() {
        // Computer opens at 1, then the player always takes the lowest free cell.
        let input = "2\n3\n4\n5\n6\n7\n8\n9\nq\n";
        let (summary, output) = run(input, &config(FirstPlayerMode::Computer)).await;
        assert_eq!(summary.computer_wins, 1);
        assert_eq!(summary.human_wins, 0);
        assert!(output.contains("Computer plays 1"));
        assert!(output.contains("Computer wins!"));
        assert!(output.contains("[O]"));
    }

    #[tokio::test]
    async fn test_invalid_input_is_reported_and_ignored() {
        let input = "hello\n0\n5\n5\nq\n";
        let (_, output) = run(input, &config(FirstPlayerMode::Human)).await;
        assert!(output.contains("Enter a cell number from 1 to 9"));
        assert!(output.contains("Cell 5 is already taken"));
    }

    #[tokio::test]
    async fn test_retry_starts_a_new_game() {
        let moves = "2\n3\n4\n5\n6\n7\n8\n9\n";
        let input = format!("{moves}r\n{moves}q\n");
        let (summary, output) = run(&input, &config(FirstPlayerMode::Computer)).await;
        assert_eq!(summary.games_played(), 2);
        assert_eq!(summary.computer_wins, 2);
        assert_eq!(output.matches("Computer wins!").count(), 2);
    }

    #[tokio::test]
    async fn test_end_of_input_stops_cleanly() {
        let (summary, _) = run("5\n", &config(FirstPlayerMode::Human)).await;
        assert_eq!(summary, RunSummary::default());
    }
}
