//! Platform-agnostic building blocks used by the components.

pub mod config;
pub mod host;
pub mod motion;
pub mod scroll_lock;
pub mod viewport;
