// Thin web-sys wrappers: one-shot timers and text file export
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::CapabilityError;

fn window() -> Result<web_sys::Window, CapabilityError> {
    web_sys::window().ok_or(CapabilityError::Unavailable("window"))
}

/// A pending one-shot timer. Dropping it cancels the timer and frees the callback.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `f` once after `ms` milliseconds.
    pub fn new(ms: u32, f: impl FnOnce() + 'static) -> Result<Self, CapabilityError> {
        let callback = Closure::once(f);
        let id = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Offer `text` to the user as a download named `filename`.
///
/// The object URL is revoked on the next tick, once the click has been handled.
pub fn download_text_as_file(text: &str, filename: &str) -> Result<(), CapabilityError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let props = BlobPropertyBag::new();
    props.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = window()?
        .document()
        .ok_or(CapabilityError::Unavailable("document"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| CapabilityError::Js("created element is not an anchor".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    // runs unconditionally, so the JS side frees the callback itself
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("could not revoke {url}: {:?}", e);
        }
    });
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), 0)?;
    Ok(())
}
