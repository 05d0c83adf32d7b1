//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads a view snapshot and renders to
//! a terminal frame. Widgets never touch the engine.

pub mod footer;
pub mod header;
pub mod help;
pub mod messages;
pub mod roster;
