use crate::types::{Mark, WinLine};
use crate::win_detector;

pub const CELL_COUNT: usize = 9;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn make_move(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if self.cells[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Copy of this board with the move applied. An occupied target leaves
    /// the copy identical to the original.
    pub fn with_move(&self, index: usize, mark: Mark) -> Self {
        let mut copy = self.clone();
        let _ = copy.make_move(index, mark);
        copy
    }

    pub fn free_spaces(&self) -> Vec<usize> {
        let mut free = Vec::new();
        for (index, cell) in self.cells.iter().enumerate() {
            if *cell == Mark::Empty {
                free.push(index);
            }
        }
        free
    }

    pub fn winner(&self) -> Option<Mark> {
        win_detector::check_win(self)
    }

    pub fn winner_line(&self) -> Option<WinLine> {
        win_detector::check_win_with_line(self)
    }

    pub fn terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Mark::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells(), &[E; CELL_COUNT]);
        assert_eq!(board.free_spaces().len(), CELL_COUNT);
        assert!(!board.terminal());
    }

    #[test]
    fn test_make_move_marks_empty_cell() {
        let mut board = Board::new();
        assert!(board.make_move(4, X).is_ok());
        assert_eq!(board.cells()[4], X);
    }

    #[test]
    fn test_make_move_rejects_occupied_cell() {
        let mut board = Board::new();
        board.make_move(4, X).unwrap();
        let result = board.make_move(4, O);
        assert_eq!(result, Err("Cell 4 is already marked".to_string()));
        assert_eq!(board.cells()[4], X);
    }

    #[test]
    fn test_every_occupied_index_is_rejected() {
        for index in 0..CELL_COUNT {
            let mut board = Board::new();
            board.make_move(index, X).unwrap();
            let before = board.clone();
            assert!(board.make_move(index, O).is_err());
            assert!(board.make_move(index, X).is_err());
            assert_eq!(board, before);
        }
    }

    #[test]
    #[should_panic]
    fn test_make_move_panics_out_of_range() {
        let mut board = Board::new();
        let _ = board.make_move(CELL_COUNT, X);
    }

    #[test]
    fn test_free_spaces_ascending() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, E, O,
            E, X, E,
            E, O, E,
        ]);
        assert_eq!(board.free_spaces(), vec![1, 3, 5, 6, 8]);
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_move(0, X);
        assert_eq!(board.cells()[0], E);
        assert_eq!(next.cells()[0], X);
    }

    #[test]
    fn test_with_move_on_occupied_cell_changes_nothing() {
        let mut board = Board::new();
        board.make_move(0, X).unwrap();
        let next = board.with_move(0, O);
        assert_eq!(next, board);
    }

    #[test]
    fn test_winner_and_line() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, X, X,
            O, O, E,
            E, E, E,
        ]);
        assert_eq!(board.winner(), Some(X));
        let line = board.winner_line().unwrap();
        assert_eq!(line.cells, [0, 1, 2]);
        assert!(board.terminal());
    }

    #[test]
    fn test_full_board_without_winner_is_terminal() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert_eq!(board.winner(), None);
        assert!(board.terminal());
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        board.make_move(0, X).unwrap();
        board.make_move(8, O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }
}
