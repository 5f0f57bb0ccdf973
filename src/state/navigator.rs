// Navigator capabilities: what the host reports and where it can send the user
use std::cell::RefCell;

use crate::error::CapabilityError;

pub trait NavigatorInfo {
    /// Viewport width in logical pixels.
    fn viewport_width(&self) -> Option<f64>;
    fn user_agent(&self) -> Option<String>;
}

pub trait NavigatorAction {
    /// Replace the current page.
    fn redirect(&self, url: &str) -> Result<(), CapabilityError>;
    /// Open `url` in a new browsing context.
    fn open(&self, url: &str) -> Result<(), CapabilityError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserNavigator;

fn window() -> Result<web_sys::Window, CapabilityError> {
    web_sys::window().ok_or(CapabilityError::Unavailable("window"))
}

impl NavigatorInfo for BrowserNavigator {
    fn viewport_width(&self) -> Option<f64> {
        window().ok()?.inner_width().ok()?.as_f64()
    }

    fn user_agent(&self) -> Option<String> {
        window().ok()?.navigator().user_agent().ok()
    }
}

impl NavigatorAction for BrowserNavigator {
    fn redirect(&self, url: &str) -> Result<(), CapabilityError> {
        window()?.location().set_href(url)?;
        Ok(())
    }

    fn open(&self, url: &str) -> Result<(), CapabilityError> {
        window()?.open_with_url(url)?;
        Ok(())
    }
}

/// Fixed host description, for off-browser use.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticNavigator {
    pub width: Option<f64>,
    pub user_agent: Option<String>,
}

impl NavigatorInfo for StaticNavigator {
    fn viewport_width(&self) -> Option<f64> {
        self.width
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Redirect(String),
    Open(String),
}

/// Records navigations instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<Navigation>>,
}

impl NavigatorAction for RecordingNavigator {
    fn redirect(&self, url: &str) -> Result<(), CapabilityError> {
        self.visits
            .borrow_mut()
            .push(Navigation::Redirect(url.to_string()));
        Ok(())
    }

    fn open(&self, url: &str) -> Result<(), CapabilityError> {
        self.visits.borrow_mut().push(Navigation::Open(url.to_string()));
        Ok(())
    }
}

/// Open `url` in a new tab, logging instead of failing.
pub fn open_page(nav: &dyn NavigatorAction, url: &str) {
    if let Err(e) = nav.open(url) {
        log::error!("failed to open {url}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_page_records_open() {
        let nav = RecordingNavigator::default();
        open_page(&nav, "https://docs.example.com");
        assert_eq!(
            *nav.visits.borrow(),
            vec![Navigation::Open("https://docs.example.com".into())]
        );
    }
}
