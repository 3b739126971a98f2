use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

/// Outcome classification of a board. Always derived from the grid, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    XWins,
    OWins,
    Tie,
    InProgress,
}

impl GameResult {
    pub fn label(&self) -> &'static str {
        match self {
            GameResult::XWins => "X",
            GameResult::OWins => "O",
            GameResult::Tie => "TIE",
            GameResult::InProgress => "NONE",
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameResult::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::XWins => Some(Player::X),
            GameResult::OWins => Some(Player::O),
            _ => None,
        }
    }

    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameResult::XWins,
            Player::O => GameResult::OWins,
        }
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
