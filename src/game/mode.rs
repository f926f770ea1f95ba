//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    #[serde(rename = "pvp")]
    TwoPlayer,
    /// The computer plays O with uniformly random moves.
    #[serde(rename = "ai")]
    VersusComputer,
}

impl GameMode {
    /// Returns a display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Player vs Player",
            GameMode::VersusComputer => "Player vs Computer",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VersusComputer,
            GameMode::VersusComputer => GameMode::TwoPlayer,
        }
    }
}
