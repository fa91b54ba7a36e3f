// events/bus/dispatch_log.rs
//
// Optional record of delivered events, shared by every callback a manager
// registers. Written from engine threads.

use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::events::types::Category;

/// A delivered event, for debugging and tracing
#[derive(Debug, Clone, Serialize)]
pub struct DispatchLogEntry {
    pub category: Category,
    pub event_type: &'static str,
    pub code: i32,
    pub dispatched_at: DateTime<Utc>,
}

/// Entries kept when no capacity is given
pub const DEFAULT_DISPATCH_LOG_CAPACITY: usize = 1024;

/// Bounded: once full, each new entry evicts the oldest.
#[derive(Debug, Clone)]
pub struct DispatchLog {
    entries: Arc<RwLock<VecDeque<DispatchLogEntry>>>,
    capacity: usize,
}

impl DispatchLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_DISPATCH_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn record(&self, category: Category, event_type: &'static str, code: i32) {
        let entry = DispatchLogEntry {
            category,
            event_type,
            code,
            dispatched_at: Utc::now(),
        };
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn entries(&self) -> Vec<DispatchLogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for DispatchLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let log = DispatchLog::new();
        let writer = log.clone();

        writer.record(Category::MediaPlayer, "MediaPlayerPlaying", 0x104);
        writer.record(Category::Vlm, "VlmMediaAdded", 0x600);

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event_type, "MediaPlayerPlaying");
        assert_eq!(entries[1].category, Category::Vlm);

        log.clear();
        assert!(writer.entries().is_empty());
    }

    #[test]
    fn test_full_log_evicts_oldest() {
        let log = DispatchLog::with_capacity(2);
        log.record(Category::MediaPlayer, "MediaPlayerTimeChanged", 0x10b);
        log.record(Category::MediaPlayer, "MediaPlayerPositionChanged", 0x10c);
        log.record(Category::MediaPlayer, "MediaPlayerPlaying", 0x104);

        let names: Vec<_> = log.entries().iter().map(|e| e.event_type).collect();
        assert_eq!(names, vec!["MediaPlayerPositionChanged", "MediaPlayerPlaying"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let log = DispatchLog::with_capacity(0);
        log.record(Category::Media, "MediaFreed", 0x004);
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_entry_serializes() {
        let log = DispatchLog::new();
        log.record(Category::Media, "MediaFreed", 0x004);

        let json = serde_json::to_value(&log.entries()[0]).unwrap();
        assert_eq!(json["category"], "Media");
        assert_eq!(json["event_type"], "MediaFreed");
        assert_eq!(json["code"], 4);
    }
}
