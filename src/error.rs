use thiserror::Error;
use wasm_bindgen::JsCast;

/// An error that can be surfaced to the operator as a notification.
///
/// The kind is decided where the error originates (e.g. the HTTP client wrapper),
/// not re-inferred when it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// A failed HTTP request. `status` is absent when no response arrived.
    #[error("{message}")]
    Http { status: Option<u16>, message: String },
    #[error("{message}")]
    Generic { message: String },
}

impl ConsoleError {
    pub fn http(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Http { message, .. } | Self::Generic { message } => message,
        }
    }
}

/// Failure of a browser capability (storage, clipboard, navigation, download).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("browser rejected the call: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for CapabilityError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_constructor_keeps_status() {
        let err = ConsoleError::http(Some(404), "not found");
        assert_eq!(
            err,
            ConsoleError::Http {
                status: Some(404),
                message: "not found".into()
            }
        );
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn message_is_shared_across_kinds() {
        assert_eq!(ConsoleError::http(None, "offline").message(), "offline");
        assert_eq!(ConsoleError::generic("boom").message(), "boom");
    }

    #[test]
    fn capability_error_text() {
        assert_eq!(
            CapabilityError::Unavailable("localStorage").to_string(),
            "localStorage is not available"
        );
    }
}
