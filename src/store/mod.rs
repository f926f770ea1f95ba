//! Key-value persistence capability.
//!
//! The machine is constructed over a [`StateStore`] rather than reaching
//! for process-wide state. Values are JSON; reads fall back to per-key
//! defaults, writes are best-effort and never surface to the caller.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Stored key for the 9-element cell array.
pub const KEY_BOARD: &str = "board";
/// Stored key for whether X moves next.
pub const KEY_TURN_IS_X: &str = "turn-is-x";
/// Stored key for the score tally.
pub const KEY_SCORES: &str = "scores";
/// Stored key for the game mode (`"pvp"` or `"ai"`).
pub const KEY_MODE: &str = "mode";
/// Stored key for the theme name.
pub const KEY_THEME: &str = "theme";

/// String keys to JSON values.
pub trait StateStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Writes `value` under `key`, best-effort.
    fn put(&mut self, key: &str, value: serde_json::Value);

    /// Removes the value stored under `key`.
    fn remove(&mut self, key: &str);

    /// Erases every key the store holds.
    fn clear(&mut self);
}

/// Reads and decodes a stored value. Corrupt values decode to `None` so
/// the caller falls back to its default for that key alone.
pub fn get_json<T: DeserializeOwned>(store: &impl StateStore, key: &str) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            warn!(key, %error, "Stored value is corrupt, using default");
            None
        }
    }
}

/// Encodes and writes a value, best-effort.
pub fn put_json<T: Serialize>(store: &mut impl StateStore, key: &str, value: &T) {
    match serde_json::to_value(value) {
        Ok(encoded) => store.put(key, encoded),
        Err(error) => warn!(key, %error, "Failed to encode value, skipping write"),
    }
}
