use std::fs;

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::types::Mark;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Human,
    Computer,
}

/// Difficulty stays a free-form label here; unknown labels are accepted and
/// resolve to a computer player that always moves at random.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub name: String,
    pub control: ControlKind,
    pub mark: Mark,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MatchConfig {
    pub player_one: PlayerConfig,
    pub player_two: PlayerConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Player name must not be blank".to_string());
        }
        if self.mark == Mark::Empty {
            return Err("Player mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<(), String> {
        self.player_one.validate()?;
        self.player_two.validate()?;
        if self.player_one.mark == self.player_two.mark {
            return Err("Players must take opposite marks".to_string());
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: PlayerConfig {
                name: "Player 1".to_string(),
                control: ControlKind::Human,
                mark: Mark::X,
                difficulty: None,
            },
            player_two: PlayerConfig {
                name: "Computer".to_string(),
                control: ControlKind::Computer,
                mark: Mark::O,
                difficulty: Some("normal".to_string()),
            },
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: MatchConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    pub fn load(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;
        Self::from_yaml(&content)
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        let content = self.to_yaml()?;
        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", path, e))
    }

    pub fn build_players(&self) -> Result<(Player, Player), String> {
        self.validate()?;
        let one = build_player(&self.player_one)?;
        let two = build_player(&self.player_two)?;
        Ok((one, two))
    }
}

fn build_player(config: &PlayerConfig) -> Result<Player, String> {
    match config.control {
        ControlKind::Human => Player::human(&config.name, config.mark),
        ControlKind::Computer => {
            let label = config.difficulty.as_deref().unwrap_or("");
            Player::computer(&config.name, config.mark, label)
        }
    }
}
