// Startup configuration: per-category toast options computed once and then read-only
use serde::{Deserialize, Serialize};

use crate::model::{ToastOptions, ToastPosition};

use super::device::DeviceClass;
use super::storage::KeyValueStore;

pub const TOAST_TIMEOUTS_KEY: &str = "toast_timeouts";
pub const LOGIN_EXPIRED_PATH: &str = "/admin/login?expired=true";

/// Auto-dismiss delays in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimeouts {
    pub error: u32,
    pub warning: u32,
    pub success: u32,
    pub info: u32,
}

impl Default for ToastTimeouts {
    fn default() -> Self {
        Self {
            error: 5000,
            warning: 10000,
            success: 1500,
            info: 3000,
        }
    }
}

impl ToastTimeouts {
    /// Defaults, overridden by a JSON object stored under `toast_timeouts`.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(TOAST_TIMEOUTS_KEY) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("invalid {TOAST_TIMEOUTS_KEY} override, using defaults: {e}");
            Self::default()
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyConfig {
    pub error: ToastOptions,
    pub warning: ToastOptions,
    pub success: ToastOptions,
    pub info: ToastOptions,
    pub notice: ToastOptions,
}

impl NotifyConfig {
    pub fn new(timeouts: &ToastTimeouts, device: DeviceClass) -> Self {
        let moved = if device.is_mobile() {
            ToastPosition::TopCenter
        } else {
            ToastPosition::default()
        };
        let opts = |auto_close, position| ToastOptions {
            auto_close,
            position,
        };
        Self {
            // errors keep the default corner on mobile as well
            error: opts(Some(timeouts.error), ToastPosition::default()),
            warning: opts(Some(timeouts.warning), moved),
            success: opts(Some(timeouts.success), moved),
            info: opts(Some(timeouts.info), moved),
            notice: opts(None, moved),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::new(&ToastTimeouts::default(), DeviceClass::Desktop)
    }
}

/// Everything the console shell needs, built once in `App`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleConfig {
    pub notify: NotifyConfig,
    pub login_path: String,
}

impl ConsoleConfig {
    pub fn new(store: &dyn KeyValueStore, device: DeviceClass) -> Self {
        Self {
            notify: NotifyConfig::new(&ToastTimeouts::load(store), device),
            login_path: LOGIN_EXPIRED_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStore;

    #[test]
    fn desktop_keeps_default_corner() {
        let cfg = NotifyConfig::new(&ToastTimeouts::default(), DeviceClass::Desktop);
        for o in [cfg.error, cfg.warning, cfg.success, cfg.info, cfg.notice] {
            assert_eq!(o.position, ToastPosition::TopRight);
        }
    }

    #[test]
    fn mobile_centers_all_but_errors() {
        let cfg = NotifyConfig::new(&ToastTimeouts::default(), DeviceClass::Mobile);
        assert_eq!(cfg.error.position, ToastPosition::TopRight);
        for o in [cfg.warning, cfg.success, cfg.info, cfg.notice] {
            assert_eq!(o.position, ToastPosition::TopCenter);
        }
    }

    #[test]
    fn timeouts_per_category() {
        let cfg = NotifyConfig::default();
        assert_eq!(cfg.error.auto_close, Some(5000));
        assert_eq!(cfg.warning.auto_close, Some(10000));
        assert_eq!(cfg.success.auto_close, Some(1500));
        assert_eq!(cfg.info.auto_close, Some(3000));
        assert_eq!(cfg.notice.auto_close, None);
    }

    #[test]
    fn stored_override_is_partial() {
        let store = MemoryStore::with([(TOAST_TIMEOUTS_KEY, r#"{"success":800}"#)]);
        let t = ToastTimeouts::load(&store);
        assert_eq!(t.success, 800);
        assert_eq!(t.error, 5000);
    }

    #[test]
    fn invalid_override_falls_back() {
        let store = MemoryStore::with([(TOAST_TIMEOUTS_KEY, "{success:")]);
        assert_eq!(ToastTimeouts::load(&store), ToastTimeouts::default());
    }

    #[test]
    fn console_config_uses_login_path() {
        let cfg = ConsoleConfig::new(&MemoryStore::default(), DeviceClass::Mobile);
        assert_eq!(cfg.login_path, "/admin/login?expired=true");
        assert_eq!(cfg.notify.info.position, ToastPosition::TopCenter);
    }
}
