//! Cross-frontend primitives for presenting the turn tracker.
//!
//! Houses message logging, frontend configuration, and view-model types that
//! both the terminal client and future graphical clients can reuse.
pub mod config;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, ViewConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{CardFlags, CardView, PresentationMapper, RosterView, TurnSummary};
