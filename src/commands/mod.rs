//! Command implementations

pub mod pack;
pub mod play;
pub mod simple;
pub mod stats;

pub use pack::run_pack;
pub use play::run_play;
pub use simple::run_simple;
pub use stats::run_stats;
