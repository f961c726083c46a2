//! Game flow: startup checks, event handling and per-frame render requests

pub mod controller;
pub mod render;
pub mod startup;

pub use controller::{GameController, GameEvent};
pub use render::{RenderRequest, Screen, StatsSnapshot, Toast};
pub use startup::{Startup, StartupError, prepare, select_puzzle, time_until_next_puzzle, today_index};
