//! Event handling for CLI client.
//!
//! This module contains the event loop that polls the terminal, routes key
//! presses into the focused pane, and redraws after every action.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
