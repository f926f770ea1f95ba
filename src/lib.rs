//! Terminal tic-tac-toe.
//!
//! # Architecture
//!
//! - **game**: the state machine - board, turn order, win/tie detection,
//!   undo history, score tally, focus navigation, and the random
//!   computer opponent. The sole source of truth.
//! - **store**: injected key-value persistence with per-key defaults and
//!   best-effort writes.
//! - **tui**: a read-only projection of the machine plus input mapping -
//!   welcome screen, game screen, sound cues, and the cancellable
//!   computer-move timer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod store;
pub mod tui;

pub use game::{
    Board, Cell, FocusDir, GameMachine, GameMode, Mark, Outcome, Scores, Theme, Transition,
};
pub use store::{JsonFileStore, MemoryStore, StateStore};
