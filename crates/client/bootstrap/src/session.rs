//! Session identifiers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the configured session id, or `session_<unix seconds>`.
pub fn resolve_session_id(configured: Option<&str>) -> String {
    match configured {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        }
    }
}
