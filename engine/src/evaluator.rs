use crate::board::Board;
use crate::types::Mark;

/// Minimax score of a position from X's perspective: 1 when X forces a win,
/// -1 when O forces a win, 0 for a draw. `to_move` is the side to play.
pub fn evaluate(board: &Board, to_move: Mark) -> i8 {
    match board.winner() {
        Some(Mark::X) => return 1,
        Some(_) => return -1,
        None => {}
    }
    let free = board.free_spaces();
    if free.is_empty() {
        return 0;
    }
    if to_move == Mark::X {
        let mut best = -1;
        for index in free {
            let value = evaluate(&board.with_move(index, Mark::X), Mark::O);
            if value == 1 {
                // 1 is already the best possible score.
                return 1;
            }
            if value > best {
                best = value;
            }
        }
        best
    } else {
        let mut best = 1;
        for index in free {
            let value = evaluate(&board.with_move(index, Mark::O), Mark::X);
            if value == -1 {
                return -1;
            }
            if value < best {
                best = value;
            }
        }
        best
    }
}

/// Best free cell for `mark` by exhaustive search, or `None` when no move
/// scores strictly better than the worst case. Ties keep the earliest index.
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    let opponent = mark.opponent()?;
    let mut chosen = None;
    let mut best: i8 = if mark == Mark::X { -1 } else { 1 };
    for index in board.free_spaces() {
        let value = evaluate(&board.with_move(index, mark), opponent);
        let improves = if mark == Mark::X {
            value > best
        } else {
            value < best
        };
        if improves {
            best = value;
            chosen = Some(index);
        }
    }
    chosen
}
