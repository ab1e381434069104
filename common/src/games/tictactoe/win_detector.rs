use super::board::Board;
use super::types::{Mark, WinningLine};

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_winner(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in row, column, diagonal order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
