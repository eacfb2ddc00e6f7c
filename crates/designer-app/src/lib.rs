//! Designer Panel Application
//!
//! The application shell: window, palette and property panels, and the
//! canvas that paints controls and their overlays.

mod app;
mod canvas;
mod config;
mod event_handler;

pub use app::DesignerApp;
pub use config::AppConfig;
pub use event_handler::translate_events;
