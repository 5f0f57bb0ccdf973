//! Core data models for the admin console helpers.
//! Toasts, their display options, and the queue the toast host renders from.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
    Error,
    Warning,
    Success,
    Info,
    /// Persistent notice, never auto-dismissed.
    Notice,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopCenter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    /// Auto-dismiss delay in milliseconds; `None` keeps the toast open.
    pub auto_close: Option<u32>,
    pub position: ToastPosition,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastBody {
    Text(String),
    /// Trusted markup, injected without escaping.
    Html(String),
}

impl ToastBody {
    pub fn as_str(&self) -> &str {
        match self {
            ToastBody::Text(s) | ToastBody::Html(s) => s,
        }
    }
}

/// A notification request as handed to the display layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    pub level: ToastLevel,
    pub body: ToastBody,
    pub options: ToastOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub request: ToastRequest,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

impl ToastQueue {
    pub fn at(&self, position: ToastPosition) -> impl Iterator<Item = &Toast> {
        self.toasts
            .iter()
            .filter(move |t| t.request.options.position == position)
    }
}

#[derive(Clone, Debug)]
pub enum ToastAction {
    Push(ToastRequest),
    Dismiss(u64),
    Clear,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ToastAction::Push(request) => {
                let id = new.next_id;
                new.next_id = new.next_id.wrapping_add(1);
                new.toasts.push(Toast { id, request });
            }
            ToastAction::Dismiss(id) => {
                // timers may fire after a manual close
                if !new.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                new.toasts.retain(|t| t.id != id);
            }
            ToastAction::Clear => new.toasts.clear(),
        }
        Rc::new(new)
    }
}

/// The role of the persisted `user` record; every other field is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct RoleView {
    pub role: u64,
}

impl RoleView {
    pub const ADMIN_ROLE: u64 = 10;
    pub const ROOT_ROLE: u64 = 100;

    pub fn is_admin(self) -> bool {
        self.role >= Self::ADMIN_ROLE
    }

    pub fn is_root(self) -> bool {
        self.role >= Self::ROOT_ROLE
    }
}

/// Display fields of the persisted `user` record.
/// A field holding an unexpected type reads as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
}

impl UserRecord {
    pub fn label(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.username.as_deref())
    }
}

fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(serde_json::from_value(value).ok())
}
