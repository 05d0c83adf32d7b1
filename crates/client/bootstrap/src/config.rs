//! Session configuration structures and loaders.
use std::env;

use tracker_core::NotifyPolicy;

/// Configuration required to bootstrap a tracker session.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Use the fixed test roster instead of prompting.
    pub test_mode: bool,
    /// Seed for test-roster initiatives. Random when unset.
    pub seed: Option<u64>,
    /// Session identifier for log directories (default: auto-generated).
    pub session_id: Option<String>,
    pub notify_policy: NotifyPolicy,
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_TEST_MODE` - Use the fixed test roster (default: false)
    /// - `TRACKER_SEED` - Seed for test initiatives (default: random)
    /// - `TRACKER_SESSION_ID` - Session identifier (default: auto-generated)
    /// - `TRACKER_NOTIFY_POLICY` - `abort` or `continue` (default: abort)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enable) = read_env_bool("TRACKER_TEST_MODE") {
            config.test_mode = enable;
        }

        config.seed = read_env::<u64>("TRACKER_SEED");
        config.session_id = env::var("TRACKER_SESSION_ID").ok();

        if let Ok(raw) = env::var("TRACKER_NOTIFY_POLICY") {
            match raw.parse::<NotifyPolicy>() {
                Ok(policy) => config.notify_policy = policy,
                Err(_) => tracing::warn!(
                    "Ignoring TRACKER_NOTIFY_POLICY={raw:?}; expected `abort` or `continue`"
                ),
            }
        }

        config
    }

    /// Applies command-line flags. `-test` / `--test` enables test mode.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if args
            .into_iter()
            .any(|arg| matches!(arg.as_ref(), "-test" | "--test"))
        {
            self.test_mode = true;
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
