// Session role flags, branding and one-time prompt flags read from the store.
// Nothing is cached: every call re-reads and re-parses the stored value.
use serde::de::DeserializeOwned;

use crate::model::{RoleView, UserRecord};

use super::storage::KeyValueStore;

pub const USER_KEY: &str = "user";
pub const SYSTEM_NAME_KEY: &str = "system_name";
pub const LOGO_KEY: &str = "logo";
pub const FOOTER_HTML_KEY: &str = "footer_html";

pub const DEFAULT_SYSTEM_NAME: &str = "Chat API";
pub const DEFAULT_LOGO: &str = "/admin/logo.png";

fn read_user<T: DeserializeOwned>(store: &dyn KeyValueStore) -> Option<T> {
    let raw = store.get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(view) => Some(view),
        Err(e) => {
            log::warn!("ignoring session record: {e}");
            None
        }
    }
}

/// Display fields of the stored `user` record; `None` when absent or not JSON.
pub fn current_user(store: &dyn KeyValueStore) -> Option<UserRecord> {
    read_user(store)
}

/// The stored role; only the `role` field has to be well-formed.
pub fn role(store: &dyn KeyValueStore) -> Option<RoleView> {
    read_user(store)
}

pub fn is_admin(store: &dyn KeyValueStore) -> bool {
    role(store).is_some_and(RoleView::is_admin)
}

pub fn is_root(store: &dyn KeyValueStore) -> bool {
    role(store).is_some_and(RoleView::is_root)
}

fn non_empty(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    store.get(key).filter(|v| !v.is_empty())
}

pub fn system_name(store: &dyn KeyValueStore) -> String {
    non_empty(store, SYSTEM_NAME_KEY).unwrap_or_else(|| DEFAULT_SYSTEM_NAME.to_string())
}

pub fn logo(store: &dyn KeyValueStore) -> String {
    non_empty(store, LOGO_KEY).unwrap_or_else(|| DEFAULT_LOGO.to_string())
}

/// Operator-provided footer markup. Rendered verbatim.
pub fn footer_html(store: &dyn KeyValueStore) -> Option<String> {
    non_empty(store, FOOTER_HTML_KEY)
}

fn prompt_key(id: &str) -> String {
    format!("prompt-{id}")
}

pub fn should_show_prompt(store: &dyn KeyValueStore, id: &str) -> bool {
    non_empty(store, &prompt_key(id)).is_none()
}

pub fn set_prompt_shown(store: &dyn KeyValueStore, id: &str) {
    if let Err(e) = store.set(&prompt_key(id), "true") {
        log::warn!("could not persist prompt flag {id}: {e}");
    }
}
