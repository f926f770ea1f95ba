//! Audio cues through the terminal bell.
//!
//! The closest terminal analogue to the original's move/win/draw sound
//! effects. Cues only fire in response to an applied move, so nothing
//! sounds on initial render.

use crate::game::Transition;
use std::io::Write;
use tracing::debug;

/// Bell-based presentation cues with a mute flag.
#[derive(Debug, Default)]
pub struct Cues {
    muted: bool,
}

impl Cues {
    /// Toggles the mute flag, returning the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// True while cues are muted.
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Sounds the cue for an applied move.
    pub fn play(&self, transition: Transition) {
        if self.muted {
            return;
        }

        let bells = match transition {
            Transition::Continued => 1,
            Transition::Won { .. } => 3,
            Transition::Drawn => 2,
        };
        debug!(?transition, bells, "Playing cue");

        let mut stdout = std::io::stdout();
        for _ in 0..bells {
            let _ = stdout.write_all(b"\x07");
        }
        let _ = stdout.flush();
    }
}
