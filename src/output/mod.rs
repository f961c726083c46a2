//! Terminal output formatting
//!
//! Colored line output for the plain shell and the `stats` command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_startup_error, print_stats, print_toast};
