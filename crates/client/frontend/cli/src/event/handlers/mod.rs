//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard input and pane commands
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files,
//! and are automatically available to the EventLoop through Rust's module system.

mod input;
mod rendering;
