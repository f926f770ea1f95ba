//! Theme identifiers.
//!
//! The machine stores and forwards the identifier; interpreting it as
//! colors is the front end's job.

use serde::{Deserialize, Serialize};

/// Color theme identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "title_case")]
pub enum Theme {
    /// Pink and cyan on a dark background.
    #[default]
    Neon,
    /// Greens and reds on beige.
    Nature,
    /// Arcade yellows and blues.
    Retro,
}

impl Theme {
    /// Returns the next theme in the fixed carousel order.
    pub fn next(self) -> Self {
        match self {
            Theme::Neon => Theme::Nature,
            Theme::Nature => Theme::Retro,
            Theme::Retro => Theme::Neon,
        }
    }
}
