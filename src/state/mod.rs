pub mod config;
pub mod device;
pub mod navigator;
pub mod session;
pub mod storage;

pub use config::{ConsoleConfig, NotifyConfig, ToastTimeouts};
pub use device::DeviceClass;
pub use navigator::{BrowserNavigator, NavigatorAction, NavigatorInfo};
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
