//! Terminal UI frontend for the initiative tracker.
//!
//! This crate provides a terminal-based user interface for the tracker.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the SharedTracker handle; it does NOT create the engine
//! - Builds one `TrackerPane` per configured view and subscribes each
//! - Routes key presses from the focused pane back into the engine

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod pane;
mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use pane::TrackerPane;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
