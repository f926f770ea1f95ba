//! Game state machine and its satellite types.

pub mod ai;
pub mod focus;
pub mod invariants;
pub mod machine;
pub mod mode;
pub mod rules;
pub mod theme;
pub mod types;

pub use focus::FocusDir;
pub use machine::{ComputerTicket, GameMachine, Transition};
pub use mode::GameMode;
pub use rules::Outcome;
pub use theme::Theme;
pub use types::{Board, Cell, Mark, Scores};
