//! Keyboard mapping.
//!
//! Maps `KeyboardEvent.key` values to semantic `KeyAction`s. Modifier keys
//! are ignored: the catalog binds no combos.

/// Actions a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseModal,
}

/// Resolves key events into catalog actions.
pub struct KeyMap;

impl KeyMap {
    /// Returns `None` if the key has no binding.
    pub fn resolve(key: &str) -> Option<KeyAction> {
        match key {
            "Escape" => Some(KeyAction::CloseModal),
            _ => None,
        }
    }
}
