// domain/media.rs
//
// Media reference - a wrapped libvlc_media_t handle.
//
// OWNERSHIP RULES:
// - `adopt` takes over a reference the caller already holds (release on drop)
// - `retain` acquires a new reference now (release on drop)
// - `from_event` wraps a handle delivered inside an event payload. The engine
//   already retained it for the duration of the callback, so the wrapper
//   neither retains nor releases. Retaining here would leak one reference per
//   event; releasing would free media still owned elsewhere.
// - `clone` retains and yields an owning reference, whatever the ownership
//   of the source, as long as the engine is alive. This is how a listener keeps event media alive
//   past the callback.
// - A null handle (MediaChanged to "no media") never reaches the engine.
//
// The engine is held weakly. A listener keeping a cloned media would
// otherwise keep alive the engine that holds the listener. Once the engine
// is gone there is nothing left to release to.

use std::fmt;
use std::sync::{Arc, Weak};

use log::warn;

use crate::integrations::engine::{Engine, MediaHandle};

/// Whether dropping a `Media` gives a reference back to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// This value holds one engine reference and releases it on drop
    Owned,
    /// The engine retained the handle on our behalf; nothing to release
    AlreadyRetained,
}

pub struct Media {
    handle: MediaHandle,
    engine: Weak<dyn Engine>,
    ownership: Ownership,
}

impl Media {
    /// Take over a reference the caller already owns.
    pub fn adopt(engine: Arc<dyn Engine>, handle: MediaHandle) -> Self {
        Self::owned(&engine, handle)
    }

    /// Acquire a fresh reference to `handle`.
    pub fn retain(engine: Arc<dyn Engine>, handle: MediaHandle) -> Self {
        if !handle.is_null() {
            engine.media_retain(handle);
        }
        Self::owned(&engine, handle)
    }

    /// Non-owning wrapper for a handle carried by an event payload.
    ///
    /// Never touches the engine's reference count, neither here nor on drop.
    pub fn from_event(engine: Arc<dyn Engine>, handle: MediaHandle) -> Self {
        Self {
            handle,
            engine: Arc::downgrade(&engine),
            ownership: Ownership::AlreadyRetained,
        }
    }

    fn owned(engine: &Arc<dyn Engine>, handle: MediaHandle) -> Self {
        Self {
            handle,
            engine: Arc::downgrade(engine),
            ownership: Ownership::Owned,
        }
    }

    pub fn handle(&self) -> MediaHandle {
        self.handle
    }

    /// True when the event carried no media
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn is_owned(&self) -> bool {
        self.ownership == Ownership::Owned
    }
}

impl Clone for Media {
    fn clone(&self) -> Self {
        match self.engine.upgrade() {
            Some(engine) => Media::retain(engine, self.handle),
            // Nothing to retain against; the copy owns nothing either
            None => Self {
                handle: self.handle,
                engine: Weak::clone(&self.engine),
                ownership: Ownership::AlreadyRetained,
            },
        }
    }
}

impl Drop for Media {
    fn drop(&mut self) {
        if self.ownership != Ownership::Owned || self.handle.is_null() {
            return;
        }
        match self.engine.upgrade() {
            Some(engine) => engine.media_release(self.handle),
            None => warn!(
                "[MEDIA] Engine gone before release of media {:#x}",
                self.handle.as_raw()
            ),
        }
    }
}

impl PartialEq for Media {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Media {}

impl fmt::Debug for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Media")
            .field("handle", &self.handle)
            .field("ownership", &self.ownership)
            .finish()
    }
}
