//! Top-level client orchestrating the tracker engine and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ SharedTracker (turn order, dead flags, observers)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The engine is built by `client-bootstrap` before any frontend exists.
//! Frontends receive a clone of the shared handle and subscribe their own
//! views; the client never reaches into them.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use tracker_core::SharedTracker;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives the engine and frontend independently
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit, the final turn is logged
pub struct Client {
    tracker: SharedTracker,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if frontend execution fails.
    pub async fn run(self) -> Result<()> {
        let Client {
            tracker,
            mut frontend,
        } = self;

        let result = frontend.run(tracker.clone()).await;

        let engine = tracker.borrow();
        tracing::info!(
            cursor = engine.cursor(),
            living = engine.state().living_count(),
            total = engine.len(),
            "Session finished"
        );

        result
    }
}
