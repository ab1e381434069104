use std::fmt;
use std::str::FromStr;
use super::error::TicTacToeError;
use super::types::{CELL_COUNT, BOARD_SIZE, GameOutcome, Mark};
use super::win_detector::{check_win, has_winner};

/// 3x3 grid, cells indexed 0..9 row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from exactly nine cells, rejecting positions that no
    /// sequence of alternating moves can reach.
    pub fn from_cells(cells: &[Mark]) -> Result<Self, TicTacToeError> {
        let cells: [Mark; CELL_COUNT] = cells.try_into().map_err(|_| {
            TicTacToeError::InvalidBoard(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                cells.len()
            ))
        })?;
        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }

    pub fn validate(&self) -> Result<(), TicTacToeError> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count.abs_diff(o_count) > 1 {
            return Err(TicTacToeError::InvalidBoard(format!(
                "mark counts differ by more than one (X: {}, O: {})",
                x_count, o_count
            )));
        }
        if has_winner(self, Mark::X) && has_winner(self, Mark::O) {
            return Err(TicTacToeError::InvalidBoard(
                "both marks have a winning line".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Writes `mark` into an empty cell and hands back the resulting board.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, TicTacToeError> {
        let mut next = *self;
        next.place(index, mark)?;
        Ok(next)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), TicTacToeError> {
        if mark == Mark::Empty {
            return Err(TicTacToeError::InvalidMark);
        }
        match self.cells.get_mut(index) {
            None => Err(TicTacToeError::CellOutOfBounds(index)),
            Some(cell) if *cell != Mark::Empty => Err(TicTacToeError::CellOccupied(index)),
            Some(cell) => {
                *cell = mark;
                Ok(())
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn move_count(&self) -> usize {
        CELL_COUNT - self.count(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    pub fn available_cells(&self) -> Vec<usize> {
        available_cells(self)
    }

    pub fn outcome(&self) -> GameOutcome {
        if let Some(mark) = check_win(self) {
            return GameOutcome::Win(mark);
        }
        if self.is_full() {
            return GameOutcome::Draw;
        }
        GameOutcome::Ongoing
    }
}

pub fn is_full(board: &Board) -> bool {
    board.cells.iter().all(|&cell| cell != Mark::Empty)
}

pub fn available_cells(board: &Board) -> Vec<usize> {
    let mut cells = Vec::with_capacity(CELL_COUNT);
    for (index, &cell) in board.cells.iter().enumerate() {
        if cell == Mark::Empty {
            cells.push(index);
        }
    }
    cells
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Accepts `X`, `O` and `.`/`_`/`-` for empty, ignoring whitespace and `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for c in s.chars() {
            if c.is_whitespace() || c == '/' {
                continue;
            }
            let mark = Mark::from_char(c).ok_or_else(|| {
                TicTacToeError::InvalidBoard(format!("unexpected character '{}'", c))
            })?;
            cells.push(mark);
        }
        Board::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
