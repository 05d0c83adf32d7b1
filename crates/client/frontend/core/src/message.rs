//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages produced from tracker actions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Info)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Error)
    }
}

/// Bounded buffer of messages; the oldest entry is evicted when full.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::info(message));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
