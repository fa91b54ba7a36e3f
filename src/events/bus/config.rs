// events/bus/config.rs
//
// Event manager configuration.

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::events::bus::dispatch_log::DEFAULT_DISPATCH_LOG_CAPACITY;
use crate::events::record::RawEvent;

/// What a trampoline does when the engine delivers something this layer
/// does not understand (unknown type code, payload for another event,
/// out-of-range enum value, listener of the wrong category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationPolicy {
    /// Abort the dispatch with a panic
    Panic,
    /// Log the anomaly and drop the event
    Log,
}

impl ViolationPolicy {
    pub(crate) fn report(self, err: &EventError, event: &RawEvent) {
        match self {
            ViolationPolicy::Panic => panic!(
                "[EVENTS] Protocol violation for type code {:#x}: {}",
                event.type_code, err
            ),
            ViolationPolicy::Log => error!(
                "[EVENTS] Protocol violation for type code {:#x}: {} (event dropped)",
                event.type_code, err
            ),
        }
    }
}

impl Default for ViolationPolicy {
    /// Panic in debug builds, log in release builds
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ViolationPolicy::Panic
        } else {
            ViolationPolicy::Log
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventManagerConfig {
    pub violation_policy: ViolationPolicy,
    /// Keep an in-memory record of delivered events
    pub record_dispatches: bool,
    /// Most recent entries kept by the dispatch log. High-rate events
    /// (TimeChanged, PositionChanged) fill it quickly.
    pub dispatch_log_capacity: usize,
}

impl Default for EventManagerConfig {
    fn default() -> Self {
        Self {
            violation_policy: ViolationPolicy::default(),
            record_dispatches: false,
            dispatch_log_capacity: DEFAULT_DISPATCH_LOG_CAPACITY,
        }
    }
}
