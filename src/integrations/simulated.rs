// integrations/simulated.rs
//
// In-process engine.
//
// Keeps the subscriber table and media reference counts the way libvlc
// does, so the event layer can be driven without the native library:
// register through an `EventManager`, then `fire` raw events at a source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use log::{trace, warn};

use crate::events::context::EventCallback;
use crate::events::record::RawEvent;
use crate::integrations::engine::{Engine, EventSource, MediaHandle};

struct Registration {
    source: EventSource,
    event_type: i32,
    callback: EventCallback,
}

/// Engine double with a real registration table and a retain/release ledger
pub struct SimulatedEngine {
    registrations: Mutex<Vec<Registration>>,
    ref_counts: Mutex<HashMap<MediaHandle, usize>>,
    next_media: AtomicUsize,
    reject_attach: AtomicBool,
    attach_calls: AtomicUsize,
    detach_calls: AtomicUsize,
    retain_calls: AtomicUsize,
    release_calls: AtomicUsize,
}

impl SimulatedEngine {
    pub fn new() -> Self {
        Self {
            registrations: Mutex::new(Vec::new()),
            ref_counts: Mutex::new(HashMap::new()),
            next_media: AtomicUsize::new(0x1000),
            reject_attach: AtomicBool::new(false),
            attach_calls: AtomicUsize::new(0),
            detach_calls: AtomicUsize::new(0),
            retain_calls: AtomicUsize::new(0),
            release_calls: AtomicUsize::new(0),
        }
    }

    /// Allocate a media handle holding one reference, as libvlc_media_new_* does
    pub fn create_media(&self) -> MediaHandle {
        let handle = MediaHandle::from_raw(self.next_media.fetch_add(0x10, Ordering::SeqCst));
        self.ref_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle, 1);
        handle
    }

    /// Current reference count of `media` (0 once fully released or unknown)
    pub fn ref_count(&self, media: MediaHandle) -> usize {
        self.ref_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&media)
            .copied()
            .unwrap_or(0)
    }

    /// Deliver `event` to every callback registered for its type on `source`.
    ///
    /// Callbacks run on the calling thread, outside the table lock, so a
    /// listener may attach or detach from inside a handler. Returns the
    /// number of callbacks invoked.
    pub fn fire(&self, source: EventSource, event: &RawEvent) -> usize {
        let callbacks: Vec<EventCallback> = self
            .registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.source == source && r.event_type == event.type_code)
            .map(|r| r.callback.clone())
            .collect();

        trace!(
            "[ENGINE] Firing {:#x} on source {:#x} to {} callbacks",
            event.type_code,
            source.as_raw(),
            callbacks.len()
        );

        for callback in &callbacks {
            callback.invoke(event);
        }
        callbacks.len()
    }

    /// Refuse every subsequent attach, like an engine out of memory
    pub fn set_reject_attach(&self, reject: bool) {
        self.reject_attach.store(reject, Ordering::SeqCst);
    }

    pub fn registration_count(&self) -> usize {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn registrations_for(&self, source: EventSource, event_type: i32) -> usize {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.source == source && r.event_type == event_type)
            .count()
    }

    pub fn attach_calls(&self) -> usize {
        self.attach_calls.load(Ordering::SeqCst)
    }

    pub fn detach_calls(&self) -> usize {
        self.detach_calls.load(Ordering::SeqCst)
    }

    pub fn retain_calls(&self) -> usize {
        self.retain_calls.load(Ordering::SeqCst)
    }

    pub fn release_calls(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }
}

impl Default for SimulatedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SimulatedEngine {
    fn event_attach(&self, source: EventSource, event_type: i32, callback: EventCallback) -> bool {
        self.attach_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_attach.load(Ordering::SeqCst) {
            return false;
        }
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration {
                source,
                event_type,
                callback,
            });
        true
    }

    fn event_detach(&self, source: EventSource, event_type: i32, callback: &EventCallback) {
        self.detach_calls.fetch_add(1, Ordering::SeqCst);
        let mut registrations = self
            .registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // libvlc removes the first matching registration only
        if let Some(position) = registrations.iter().position(|r| {
            r.source == source && r.event_type == event_type && &r.callback == callback
        }) {
            registrations.remove(position);
        }
    }

    fn media_retain(&self, media: MediaHandle) {
        self.retain_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .ref_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(media)
            .or_insert(0) += 1;
    }

    fn media_release(&self, media: MediaHandle) {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        let mut ref_counts = self
            .ref_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match ref_counts.get_mut(&media) {
            Some(count) if *count > 0 => *count -= 1,
            _ => warn!(
                "[ENGINE] Release of unreferenced media {:#x}",
                media.as_raw()
            ),
        }
    }
}
