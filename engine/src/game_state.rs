use crate::board::Board;
use crate::log;
use crate::match_rng::MatchRng;
use crate::player::Player;
use crate::types::{GameStatus, Mark, WinLine};

/// One match: the board plus both players. Moves are routed to whichever
/// player currently holds the turn flag.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
}

impl GameState {
    pub fn new(player_one: Player, player_two: Player) -> Result<Self, String> {
        let marks = (player_one.mark(), player_two.mark());
        if !matches!(marks, (Mark::X, Mark::O) | (Mark::O, Mark::X)) {
            return Err("A match needs exactly one X player and one O player".to_string());
        }
        Ok(Self {
            board: Board::new(),
            players: [player_one, player_two],
        })
    }

    fn active_index(&self) -> usize {
        if self.players[0].is_player_turn() { 0 } else { 1 }
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active_index()]
    }

    /// Human move at `index` for the active player. On success the turn
    /// passes to the opponent; a rejected move leaves the match untouched so
    /// the same player can try again.
    pub fn play_at(&mut self, index: usize) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        let active = self.active_index();
        if let Err(error) = self.players[active].play_at(&mut self.board, index) {
            log!(
                "Rejected move at {} by {}: {}",
                index,
                self.players[active].name(),
                error
            );
            return Err(error);
        }
        self.players[1 - active].change_turn();
        Ok(())
    }

    /// Computer move for the active player. `Ok(None)` means the board was
    /// already decided and nothing happened.
    pub fn play_computer(&mut self, rng: &mut MatchRng) -> Result<Option<usize>, String> {
        let active = self.active_index();
        match self.players[active].play(&mut self.board, rng) {
            Ok(Some(index)) => {
                self.players[1 - active].change_turn();
                Ok(Some(index))
            }
            Ok(None) => Ok(None),
            Err(error) => {
                log!(
                    "Rejected computer move by {}: {}",
                    self.players[active].name(),
                    error
                );
                Err(error)
            }
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ => {
                if self.board.free_spaces().is_empty() {
                    GameStatus::Draw
                } else {
                    GameStatus::InProgress
                }
            }
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        let mark = self.board.winner()?;
        self.players.iter().find(|player| player.mark() == mark)
    }

    pub fn winner_line(&self) -> Option<WinLine> {
        self.board.winner_line()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn is_over(&self) -> bool {
        self.board.terminal()
    }

    /// Starts the next match: empty board, turn flags back to their opening
    /// values. The players themselves persist.
    pub fn reset(&mut self) {
        self.board.reset();
        for player in &mut self.players {
            player.reset_turn();
        }
    }
}
