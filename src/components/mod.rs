pub mod app;
pub mod footer;
pub mod header_bar;
pub mod time_display;
pub mod toast_host;
pub mod tools_panel;
pub mod welcome_prompt;

pub use app::App;
