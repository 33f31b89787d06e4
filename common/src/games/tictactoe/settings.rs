use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{FirstTurn, GameMode, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub human_mark: Player,
    pub first_turn: FirstTurn,
}

impl TicTacToeSessionSettings {
    pub fn computer_mark(&self) -> Option<Player> {
        match self.mode {
            GameMode::TwoPlayers => None,
            GameMode::VersusComputer => Some(self.human_mark.opponent()),
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VersusComputer,
            human_mark: Player::O,
            first_turn: FirstTurn::Human,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.mode == GameMode::TwoPlayers && self.first_turn != FirstTurn::Human {
            return Err(format!(
                "first_turn {:?} requires versus_computer mode",
                self.first_turn
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSessionSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.computer_mark(), Some(Player::X));
    }

    #[test]
    fn test_two_players_has_no_computer_first_turn() {
        let settings = TicTacToeSessionSettings {
            mode: GameMode::TwoPlayers,
            human_mark: Player::X,
            first_turn: FirstTurn::Computer,
        };
        assert!(settings.validate().is_err());
        assert_eq!(settings.computer_mark(), None);
    }

    #[test]
    fn test_settings_yaml_uses_snake_case() {
        let yaml = "mode: two_players\nhuman_mark: X\nfirst_turn: human\n";
        let settings: TicTacToeSessionSettings = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(settings.mode, GameMode::TwoPlayers);
        assert_eq!(settings.human_mark, Player::X);
        assert_eq!(settings.first_turn, FirstTurn::Human);
    }
}
