use crate::board::Board;
use crate::types::{Mark, WinLine};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Scans rows, then columns, then both diagonals and returns the first
/// completed line found.
pub fn check_win_with_line(board: &Board) -> Option<WinLine> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        if cells[a] != Mark::Empty && cells[a] == cells[b] && cells[b] == cells[c] {
            return Some(WinLine::new(cells[a], line));
        }
    }
    None
}
