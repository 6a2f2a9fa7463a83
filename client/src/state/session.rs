//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication is the presence of the `user` entry in `localStorage`. The
//! value is only read for the display name; it is never validated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// `localStorage` key holding the signed-in user.
pub const SESSION_KEY: &str = "user";

/// Contents of the session entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl StoredUser {
    /// Interpret a raw session value. Unparsable values still represent a
    /// signed-in user, just without a known name.
    pub fn from_raw(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Header greeting for this user.
    pub fn greeting(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() { "Hola!".to_owned() } else { format!("Hola, {name}!") }
    }
}

/// Session state tracking the current user and whether storage was read yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<StoredUser>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Build resolved state from the raw storage value, if any.
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self { user: raw.map(StoredUser::from_raw), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Read the session entry from browser storage.
pub fn read_session() -> SessionState {
    SessionState::from_raw(storage::load_raw(SESSION_KEY).as_deref())
}

/// Persist `user` as the session entry.
pub fn store_user(user: &StoredUser) {
    storage::save_json(SESSION_KEY, user);
}

/// Remove the session entry.
pub fn clear_session() {
    storage::remove(SESSION_KEY);
}

/// Clear the stored entry and drop the user from in-memory state.
pub fn logout(state: &mut SessionState) {
    clear_session();
    state.user = None;
    state.loading = false;
}
