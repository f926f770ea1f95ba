//! Key-to-action mapping for the game screen.

use crate::game::FocusDir;
use crossterm::event::KeyCode;

/// A user intent on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Move keyboard focus one step.
    MoveFocus(FocusDir),
    /// Place a mark at the focused cell.
    Activate,
    /// Place a mark at a specific cell (digit keys).
    PlaceAt(usize),
    /// Undo the latest move.
    Undo,
    /// Start a new round.
    NewRound,
    /// Reset scores, mode, theme, and saved state.
    ResetAll,
    /// Switch between two-player and versus-computer.
    ToggleMode,
    /// Cycle to the next theme.
    CycleTheme,
    /// Toggle the sound cues.
    ToggleMute,
}

/// Maps a key press to a game-screen action.
pub fn map_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up => Some(Action::MoveFocus(FocusDir::Up)),
        KeyCode::Down => Some(Action::MoveFocus(FocusDir::Down)),
        KeyCode::Left => Some(Action::MoveFocus(FocusDir::Left)),
        KeyCode::Right => Some(Action::MoveFocus(FocusDir::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            Some(Action::PlaceAt(c as usize - '1' as usize))
        }
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('n') => Some(Action::NewRound),
        KeyCode::Char('r') => Some(Action::ResetAll),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('t') => Some(Action::CycleTheme),
        KeyCode::Char('s') => Some(Action::ToggleMute),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_cells() {
        assert_eq!(map_key(KeyCode::Char('1')), Some(Action::PlaceAt(0)));
        assert_eq!(map_key(KeyCode::Char('9')), Some(Action::PlaceAt(8)));
        assert_eq!(map_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn arrows_move_focus() {
        assert_eq!(
            map_key(KeyCode::Left),
            Some(Action::MoveFocus(FocusDir::Left))
        );
        assert_eq!(map_key(KeyCode::Up), Some(Action::MoveFocus(FocusDir::Up)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('z')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
