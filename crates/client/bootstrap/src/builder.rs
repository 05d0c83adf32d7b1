//! Builds the shared engine used by front-ends.
use std::io;

use anyhow::{Context, Result};
use tracker_core::{SharedTracker, TurnEngine};

use crate::config::SessionConfig;
use crate::roster::{PromptRoster, RosterSource, TestRoster};

/// Builder that collects the roster and assembles the shared engine.
///
/// Without an explicit source the config decides: the seeded test roster in
/// test mode, interactive prompts on stdin otherwise.
pub struct SessionBuilder {
    config: SessionConfig,
    source: Option<Box<dyn RosterSource>>,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Provide a custom roster source (e.g., a canned roster in tests).
    pub fn source(mut self, source: impl RosterSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn build(self) -> Result<SessionSetup> {
        let mut source = match self.source {
            Some(source) => source,
            None => default_source(&self.config),
        };

        let characters = source
            .collect()
            .context("Failed to collect characters")?;

        if characters.is_empty() {
            tracing::warn!("Starting with an empty roster");
        }

        let tracker = TurnEngine::with_policy(characters, self.config.notify_policy).shared();

        Ok(SessionSetup {
            config: self.config,
            tracker,
        })
    }
}

fn default_source(config: &SessionConfig) -> Box<dyn RosterSource> {
    if config.test_mode {
        let roster = config.seed.map_or_else(TestRoster::random, TestRoster::new);
        tracing::info!(seed = roster.seed(), "Test mode: using the fixed roster");
        Box::new(roster)
    } else {
        Box::new(PromptRoster::new(io::stdin().lock(), io::stdout()))
    }
}

pub struct SessionSetup {
    pub config: SessionConfig,
    pub tracker: SharedTracker,
}
