//! Shared bootstrap utilities for client front-ends.
//!
//! Provides session configuration, roster input providers, and engine setup
//! that can be reused by the terminal client or other front-end crates.
pub mod builder;
pub mod config;
pub mod roster;
pub mod session;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::SessionConfig;
pub use roster::{BootstrapError, PromptRoster, RosterSource, TEST_CHARACTERS, TestRoster};
pub use session::resolve_session_id;
