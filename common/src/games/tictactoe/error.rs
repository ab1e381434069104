#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    NoLegalMoves,
    InvalidBoard(String),
    InvalidMark,
    CellOutOfBounds(usize),
    CellOccupied(usize),
    NotYourTurn,
    GameOver,
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::NoLegalMoves => write!(f, "No legal moves left on the board"),
            TicTacToeError::InvalidBoard(reason) => write!(f, "Invalid board: {}", reason),
            TicTacToeError::InvalidMark => write!(f, "Empty is not a player mark"),
            TicTacToeError::CellOutOfBounds(index) => {
                write!(f, "Cell {} is out of bounds", index)
            }
            TicTacToeError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            TicTacToeError::NotYourTurn => write!(f, "Not your turn"),
            TicTacToeError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
