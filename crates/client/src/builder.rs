//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use tracker_core::SharedTracker;

/// Builder for constructing a Client with proper validation.
///
/// Both the engine and the frontend are required; a missing one fails
/// `build()` instead of surfacing later at run time.
#[derive(Default)]
pub struct ClientBuilder {
    tracker: Option<SharedTracker>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shared engine (required).
    ///
    /// It should be constructed via `SessionBuilder` from the `client-bootstrap` crate.
    pub fn tracker(mut self, tracker: SharedTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let tracker = self
            .tracker
            .context("Tracker is required. Use .tracker() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { tracker, frontend })
    }
}
