// integrations/engine.rs
//
// The boundary with the media engine.
//
// The engine owns the subscriber table and delivers events on its own
// threads. This layer only hands it (source, event type, callback) triples
// and asks it to retain/release media handles.

use crate::events::context::EventCallback;

/// Opaque handle of an object that emits events (libvlc_event_manager_t*).
///
/// Owned by the wrapped media object; never released through this handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventSource(usize);

impl EventSource {
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> usize {
        self.0
    }
}

/// Opaque media handle (libvlc_media_t*)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaHandle(usize);

impl MediaHandle {
    /// No media, e.g. MediaChanged after the player's media was cleared
    pub const NULL: MediaHandle = MediaHandle(0);

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> usize {
        self.0
    }
}

/// Subscription and reference-counting primitives supplied by the engine.
///
/// Implementations must tolerate concurrent calls: `event_attach` and
/// `event_detach` may race with event delivery on engine threads.
#[cfg_attr(test, mockall::automock)]
pub trait Engine: Send + Sync {
    /// Register `callback` for `event_type` on `source`. Returns false if
    /// the engine refused the registration.
    fn event_attach(&self, source: EventSource, event_type: i32, callback: EventCallback) -> bool;

    /// Remove the registration equal to `callback`. Unknown registrations
    /// are ignored.
    fn event_detach(&self, source: EventSource, event_type: i32, callback: &EventCallback);

    fn media_retain(&self, media: MediaHandle);

    fn media_release(&self, media: MediaHandle);
}
