//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use tracker_core::SharedTracker;

/// Frontend abstraction for UI layers.
///
/// Frontends receive the shared engine, build their views around it, and
/// block until the user quits. They do not own the session: the composition
/// root creates the engine and hands each frontend a clone of the handle.
///
/// The engine is single-threaded (`Rc<RefCell<_>>`), so frontend futures are
/// not `Send` and must run on a current-thread runtime.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait(?Send)]
pub trait Frontend {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, tracker: SharedTracker) -> Result<()>;
}
