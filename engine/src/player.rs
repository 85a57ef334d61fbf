use crate::board::Board;
use crate::evaluator::best_move;
use crate::match_rng::MatchRng;
use crate::types::Mark;

/// Difficulty presets for a computer player, each mapping to the probability
/// of playing the optimal move instead of a random one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Impossible,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "impossible" => Some(Difficulty::Impossible),
            _ => None,
        }
    }

    pub fn probability(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.25,
            Difficulty::Normal => 0.5,
            Difficulty::Hard => 0.75,
            Difficulty::Impossible => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    Human,
    /// `skill` is the optimal-move probability. `None` means the difficulty
    /// label was not recognized; such a player always moves at random.
    Computer { skill: Option<f64> },
}

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    mark: Mark,
    control: Control,
    my_turn: bool,
}

impl Player {
    pub fn human(name: &str, mark: Mark) -> Result<Self, String> {
        Self::create(name, mark, Control::Human)
    }

    pub fn computer(name: &str, mark: Mark, difficulty: &str) -> Result<Self, String> {
        let skill = Difficulty::from_label(difficulty).map(|d| d.probability());
        Self::create(name, mark, Control::Computer { skill })
    }

    fn create(name: &str, mark: Mark, control: Control) -> Result<Self, String> {
        if mark == Mark::Empty {
            return Err("Player mark must be X or O".to_string());
        }
        Ok(Self {
            name: name.to_string(),
            mark,
            control,
            // X always opens the game.
            my_turn: mark == Mark::X,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.control, Control::Computer { .. })
    }

    pub fn is_player_turn(&self) -> bool {
        self.my_turn
    }

    pub fn change_turn(&mut self) {
        self.my_turn = !self.my_turn;
    }

    pub fn reset_turn(&mut self) {
        self.my_turn = self.mark == Mark::X;
    }

    /// Places this human player's mark at `index`. A successful move flips
    /// this player's own turn flag; a rejected move changes nothing.
    pub fn play_at(&mut self, board: &mut Board, index: usize) -> Result<(), String> {
        if self.control != Control::Human {
            return Err(format!("{} is not human-controlled", self.name));
        }
        board.make_move(index, self.mark)?;
        self.change_turn();
        Ok(())
    }

    /// Picks and places a move for this computer player. Rolls against the
    /// skill probability to choose between the optimal move and a random free
    /// space; when the search finds no move worth playing it also falls back
    /// to a random one. Returns the played index, or `Ok(None)` on a board
    /// that is already decided.
    pub fn play(&mut self, board: &mut Board, rng: &mut MatchRng) -> Result<Option<usize>, String> {
        let Control::Computer { skill } = self.control else {
            return Err(format!("{} is not computer-controlled", self.name));
        };
        if board.terminal() {
            return Ok(None);
        }
        let roll: f64 = rng.random();
        let index = if skill.is_some_and(|probability| roll <= probability) {
            best_move(board, self.mark).unwrap_or_else(|| random_free_space(board, rng))
        } else {
            random_free_space(board, rng)
        };
        board.make_move(index, self.mark)?;
        self.change_turn();
        Ok(Some(index))
    }
}

fn random_free_space(board: &Board, rng: &mut MatchRng) -> usize {
    let free = board.free_spaces();
    free[rng.random_range(0..free.len())]
}
