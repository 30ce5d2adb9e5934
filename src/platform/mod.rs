//! Platform abstraction layer
//!
//! Backends (window, terminal, browser) translate their native events into
//! [`input::RawEvent`]s; everything after that is platform independent.
//! [`time::FramePacer`] holds a driver loop to the configured frame rate.

pub mod input;
pub mod time;

pub use input::{Action, FrameActions, Key, RawEvent, translate};
pub use time::FramePacer;
