//! Presentation-layer helpers for the admin console: session flags, timestamp
//! formatting, toast notifications, clipboard, device detection and text export.
//!
//! Browser APIs sit behind small capability traits (`KeyValueStore`, `Clipboard`,
//! `NavigatorInfo`, `NavigatorAction`, `ToastSink`) so the logic runs off-browser.

pub mod browser;
pub mod clipboard;
pub mod components;
pub mod error;
pub mod logging;
pub mod model;
pub mod notify;
pub mod state;
pub mod util;
