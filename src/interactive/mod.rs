//! Interactive TUI interface

pub mod app;
pub mod rendering;
pub mod transform;

pub use app::{App, run_tui, show_startup_error};
