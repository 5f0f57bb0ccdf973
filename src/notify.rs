//! Routing of errors and messages to toast notifications.
//!
//! The `Notifier` owns no display state. It turns a [`NotifyInput`] or a plain
//! message into a [`ToastRequest`] with the per-category options from
//! [`NotifyConfig`] and hands it to a [`ToastSink`]. An expired session (HTTP 401)
//! is the one case that navigates instead of showing anything.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use yew::Callback;

use crate::error::ConsoleError;
use crate::model::{ToastBody, ToastLevel, ToastOptions, ToastRequest};
use crate::state::{ConsoleConfig, NavigatorAction, NotifyConfig};

pub const ERROR_PREFIX: &str = "Error: ";
pub const TOO_MANY_REQUESTS: &str = "Error: too many requests, please try again later!";
pub const INTERNAL_SERVER_ERROR: &str =
    "Error: internal server error, please contact the administrator!";
pub const DEMO_MODE: &str = "This site is for demonstration only, there is no server side!";

/// Display layer for toasts.
pub trait ToastSink {
    fn show(&self, request: ToastRequest);
}

impl ToastSink for Callback<ToastRequest> {
    fn show(&self, request: ToastRequest) {
        self.emit(request);
    }
}

/// Collects requests instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub shown: RefCell<Vec<ToastRequest>>,
}

impl ToastSink for RecordingSink {
    fn show(&self, request: ToastRequest) {
        self.shown.borrow_mut().push(request);
    }
}

/// What a caller may hand to [`Notifier::error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotifyInput {
    /// A bare value without a message field, shown by its text.
    Raw(String),
    Error(ConsoleError),
}

impl From<ConsoleError> for NotifyInput {
    fn from(err: ConsoleError) -> Self {
        NotifyInput::Error(err)
    }
}

impl From<&str> for NotifyInput {
    fn from(text: &str) -> Self {
        NotifyInput::Raw(text.to_string())
    }
}

impl From<String> for NotifyInput {
    fn from(text: String) -> Self {
        NotifyInput::Raw(text)
    }
}

impl fmt::Display for NotifyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyInput::Raw(text) => f.write_str(text),
            NotifyInput::Error(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    config: NotifyConfig,
    login_path: Rc<str>,
    sink: Rc<dyn ToastSink>,
    nav: Rc<dyn NavigatorAction>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.login_path == other.login_path
            && Rc::ptr_eq(&self.sink, &other.sink)
            && Rc::ptr_eq(&self.nav, &other.nav)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("config", &self.config)
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

impl Notifier {
    pub fn new(
        config: &ConsoleConfig,
        sink: Rc<dyn ToastSink>,
        nav: Rc<dyn NavigatorAction>,
    ) -> Self {
        Self {
            config: config.notify,
            login_path: Rc::from(config.login_path.as_str()),
            sink,
            nav,
        }
    }

    fn emit(&self, level: ToastLevel, body: ToastBody, options: ToastOptions) {
        self.sink.show(ToastRequest {
            level,
            body,
            options,
        });
    }

    fn show_error_text(&self, text: String) {
        self.emit(ToastLevel::Error, ToastBody::Text(text), self.config.error);
    }

    /// Report an error to the operator.
    pub fn error(&self, input: impl Into<NotifyInput>) {
        let input = input.into();
        log::error!("{input:?}");
        let err = match input {
            NotifyInput::Raw(text) => {
                self.show_error_text(format!("{ERROR_PREFIX}{text}"));
                return;
            }
            NotifyInput::Error(err) => err,
        };
        match err {
            ConsoleError::Generic { message } => {
                self.show_error_text(format!("{ERROR_PREFIX}{message}"))
            }
            ConsoleError::Http { status, message } => match status {
                Some(401) => {
                    // expired session: go to login silently
                    if let Err(e) = self.nav.redirect(&self.login_path) {
                        log::error!("redirect to {} failed: {e}", self.login_path);
                    }
                }
                Some(429) => self.show_error_text(TOO_MANY_REQUESTS.to_string()),
                Some(500) => self.show_error_text(INTERNAL_SERVER_ERROR.to_string()),
                Some(405) => self.info(DEMO_MODE),
                _ => self.show_error_text(format!("{ERROR_PREFIX}{message}")),
            },
        }
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.emit(
            ToastLevel::Warning,
            ToastBody::Text(message.into()),
            self.config.warning,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(
            ToastLevel::Success,
            ToastBody::Text(message.into()),
            self.config.success,
        );
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(
            ToastLevel::Info,
            ToastBody::Text(message.into()),
            self.config.info,
        );
    }

    /// Show a notice. With `is_html` the content is injected verbatim and stays
    /// until closed; callers must sanitize anything untrusted first.
    pub fn notice(&self, message: impl Into<String>, is_html: bool) {
        if is_html {
            self.emit(
                ToastLevel::Notice,
                ToastBody::Html(message.into()),
                self.config.notice,
            );
        } else {
            self.info(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToastPosition;
    use crate::state::navigator::{Navigation, RecordingNavigator};
    use crate::state::{DeviceClass, MemoryStore};

    struct Harness {
        sink: Rc<RecordingSink>,
        nav: Rc<RecordingNavigator>,
        notifier: Notifier,
    }

    fn harness(device: DeviceClass) -> Harness {
        let sink = Rc::new(RecordingSink::default());
        let nav = Rc::new(RecordingNavigator::default());
        let config = ConsoleConfig::new(&MemoryStore::default(), device);
        let notifier = Notifier::new(&config, sink.clone(), nav.clone());
        Harness {
            sink,
            nav,
            notifier,
        }
    }

    impl Harness {
        fn shown(&self) -> Vec<ToastRequest> {
            self.sink.shown.borrow().clone()
        }
    }

    #[test]
    fn unauthorized_redirects_without_toast() {
        let h = harness(DeviceClass::Desktop);
        h.notifier.error(ConsoleError::http(Some(401), "Unauthorized"));
        assert!(h.shown().is_empty());
        assert_eq!(
            *h.nav.visits.borrow(),
            vec![Navigation::Redirect("/admin/login?expired=true".into())]
        );
    }

    #[test]
    fn fixed_text_statuses() {
        let cases = [
            (429, ToastLevel::Error, TOO_MANY_REQUESTS),
            (500, ToastLevel::Error, INTERNAL_SERVER_ERROR),
            (405, ToastLevel::Info, DEMO_MODE),
        ];
        for (status, level, text) in cases {
            let h = harness(DeviceClass::Desktop);
            h.notifier
                .error(ConsoleError::http(Some(status), "Request failed"));
            let shown = h.shown();
            assert_eq!(shown.len(), 1, "status {status}");
            assert_eq!(shown[0].level, level);
            assert_eq!(shown[0].body, ToastBody::Text(text.into()));
            assert!(h.nav.visits.borrow().is_empty());
        }
    }

    #[test]
    fn other_status_shows_request_message() {
        let h = harness(DeviceClass::Desktop);
        h.notifier
            .error(ConsoleError::http(Some(404), "Request failed with status code 404"));
        h.notifier.error(ConsoleError::http(None, "Network Error"));
        let shown = h.shown();
        assert_eq!(shown.len(), 2);
        assert_eq!(
            shown[0].body.as_str(),
            "Error: Request failed with status code 404"
        );
        assert_eq!(shown[1].body.as_str(), "Error: Network Error");
        assert!(shown.iter().all(|r| r.level == ToastLevel::Error));
    }

    #[test]
    fn generic_and_raw_errors_are_prefixed() {
        let h = harness(DeviceClass::Desktop);
        h.notifier.error(ConsoleError::generic("quota exceeded"));
        h.notifier.error("something odd");
        let shown = h.shown();
        assert_eq!(shown[0].body.as_str(), "Error: quota exceeded");
        assert_eq!(shown[1].body.as_str(), "Error: something odd");
        assert_eq!(shown[0].options.auto_close, Some(5000));
    }

    #[test]
    fn pass_through_categories_use_their_options() {
        let h = harness(DeviceClass::Mobile);
        h.notifier.warning("careful");
        h.notifier.success("saved");
        h.notifier.info("fyi");
        let shown = h.shown();
        let levels: Vec<ToastLevel> = shown.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![ToastLevel::Warning, ToastLevel::Success, ToastLevel::Info]
        );
        let closes: Vec<Option<u32>> = shown.iter().map(|r| r.options.auto_close).collect();
        assert_eq!(closes, vec![Some(10000), Some(1500), Some(3000)]);
        assert!(
            shown
                .iter()
                .all(|r| r.options.position == ToastPosition::TopCenter)
        );
    }

    #[test]
    fn mobile_errors_stay_in_corner() {
        let h = harness(DeviceClass::Mobile);
        h.notifier.error("x");
        assert_eq!(h.shown()[0].options.position, ToastPosition::TopRight);
    }

    #[test]
    fn html_notice_is_persistent_and_verbatim() {
        let h = harness(DeviceClass::Desktop);
        h.notifier.notice("<a href=\"/docs\">docs</a>", true);
        let shown = h.shown();
        assert_eq!(shown[0].level, ToastLevel::Notice);
        assert_eq!(shown[0].body, ToastBody::Html("<a href=\"/docs\">docs</a>".into()));
        assert_eq!(shown[0].options.auto_close, None);
    }

    #[test]
    fn text_notice_is_plain_info() {
        let h = harness(DeviceClass::Desktop);
        h.notifier.notice("<b>not markup</b>", false);
        let shown = h.shown();
        assert_eq!(shown[0].level, ToastLevel::Info);
        assert_eq!(shown[0].body, ToastBody::Text("<b>not markup</b>".into()));
    }
}
