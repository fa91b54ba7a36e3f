// integrations/libvlc/engine.rs
//
// Engine backed by the native library.
//
// Each registration's `EventCallback` is boxed in an `Arc` whose address is
// the user_data handed to libvlc_event_attach. The native trampoline turns
// that pointer back into the callback and decodes the union into a
// `RawEvent` before invoking it.
//
// LIFETIME RULES:
// - Live callbacks stay in `live` until detached
// - Detached callbacks move to `retired`: libvlc may still be running them
//   on another thread when libvlc_event_detach returns
// - Dropping the engine leaks whatever is still registered, since libvlc
//   keeps calling into it until the source is destroyed

use std::ffi::{c_char, c_void, CStr};
use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, error, warn};

use super::ffi;
use crate::events::context::EventCallback;
use crate::events::record::{Payload, RawEvent};
use crate::events::types::{
    EventCategory, MediaEventType, MediaListEventType, MediaListPlayerEventType,
    MediaPlayerEventType, VlmEventType,
};
use crate::integrations::engine::{Engine, EventSource, MediaHandle};

struct Registration {
    source: EventSource,
    event_type: i32,
    callback: Arc<EventCallback>,
}

/// libvlc-backed engine.
///
/// `EventSource` values must wrap live `libvlc_event_manager_t*` pointers
/// and `MediaHandle` values live `libvlc_media_t*` pointers.
pub struct LibVlcEngine {
    live: Mutex<Vec<Registration>>,
    retired: Mutex<Vec<Arc<EventCallback>>>,
}

impl LibVlcEngine {
    pub fn new() -> Self {
        Self {
            live: Mutex::new(Vec::new()),
            retired: Mutex::new(Vec::new()),
        }
    }

    /// Wrap a native event manager pointer
    pub fn event_source(manager: *mut ffi::libvlc_event_manager_t) -> EventSource {
        EventSource::from_raw(manager as usize)
    }

    /// Wrap a native media pointer
    pub fn media_handle(media: *mut ffi::libvlc_media_t) -> MediaHandle {
        MediaHandle::from_raw(media as usize)
    }

    pub fn live_registrations(&self) -> usize {
        self.live.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Free callbacks detached so far.
    ///
    /// # Safety
    ///
    /// No callback detached before this call may still be executing, e.g.
    /// the sources they were attached to have been destroyed.
    pub unsafe fn purge_retired(&self) {
        let purged = mem::take(&mut *self.retired.lock().unwrap_or_else(PoisonError::into_inner));
        debug!("[LIBVLC] Purged {} retired callbacks", purged.len());
    }
}

impl Default for LibVlcEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for LibVlcEngine {
    fn event_attach(&self, source: EventSource, event_type: i32, callback: EventCallback) -> bool {
        let callback = Arc::new(callback);
        let user_data = Arc::as_ptr(&callback) as *mut c_void;

        let mut live = self.live.lock().unwrap_or_else(PoisonError::into_inner);
        // SAFETY: the source pointer is live per the type's contract, and
        // user_data stays valid until the registration is purged or leaked.
        let status = unsafe {
            ffi::libvlc_event_attach(
                source.as_raw() as *mut ffi::libvlc_event_manager_t,
                event_type,
                Some(native_trampoline),
                user_data,
            )
        };
        if status != 0 {
            warn!(
                "[LIBVLC] libvlc_event_attach({:#x}) failed with status {}",
                event_type, status
            );
            return false;
        }

        live.push(Registration {
            source,
            event_type,
            callback,
        });
        true
    }

    fn event_detach(&self, source: EventSource, event_type: i32, callback: &EventCallback) {
        let mut live = self.live.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(position) = live.iter().position(|r| {
            r.source == source && r.event_type == event_type && *r.callback == *callback
        }) else {
            debug!("[LIBVLC] Ignoring detach of unknown callback for {:#x}", event_type);
            return;
        };

        let registration = live.remove(position);
        // SAFETY: same pointer triple that was attached
        unsafe {
            ffi::libvlc_event_detach(
                source.as_raw() as *mut ffi::libvlc_event_manager_t,
                event_type,
                Some(native_trampoline),
                Arc::as_ptr(&registration.callback) as *mut c_void,
            );
        }
        self.retired
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(registration.callback);
    }

    fn media_retain(&self, media: MediaHandle) {
        // SAFETY: live media pointer per the type's contract
        unsafe { ffi::libvlc_media_retain(media.as_raw() as *mut ffi::libvlc_media_t) }
    }

    fn media_release(&self, media: MediaHandle) {
        // SAFETY: releases a reference this crate acquired
        unsafe { ffi::libvlc_media_release(media.as_raw() as *mut ffi::libvlc_media_t) }
    }
}

impl Drop for LibVlcEngine {
    fn drop(&mut self) {
        let live = mem::take(self.live.get_mut().unwrap_or_else(PoisonError::into_inner));
        if !live.is_empty() {
            warn!(
                "[LIBVLC] Engine dropped with {} live registrations; leaking their callbacks",
                live.len()
            );
        }
        for registration in live {
            mem::forget(registration.callback);
        }
    }
}

unsafe extern "C" fn native_trampoline(event: *const ffi::libvlc_event_t, user_data: *mut c_void) {
    if event.is_null() || user_data.is_null() {
        return;
    }
    let callback = &*(user_data as *const EventCallback);
    let raw = decode(&*event);

    // Unwinding into libvlc is not allowed
    if panic::catch_unwind(AssertUnwindSafe(|| callback.invoke(&raw))).is_err() {
        error!("[LIBVLC] Listener panicked on event {:#x}", raw.type_code);
    }
}

fn decode(event: &ffi::libvlc_event_t) -> RawEvent {
    let code = event.type_;
    let u = &event.u;
    // SAFETY: each branch reads the union member libvlc fills for that code
    let payload = unsafe {
        if let Some(kind) = MediaEventType::from_code(code) {
            media_payload(kind, u)
        } else if let Some(kind) = MediaPlayerEventType::from_code(code) {
            media_player_payload(kind, u)
        } else if MediaListEventType::from_code(code).is_some() {
            Payload::ListItem {
                item: handle(u.media_list_item.item),
                index: u.media_list_item.index,
            }
        } else if let Some(MediaListPlayerEventType::NextItemSet) =
            MediaListPlayerEventType::from_code(code)
        {
            Payload::NextItemSet {
                item: handle(u.media_list_player_next_item_set.item),
            }
        } else if VlmEventType::from_code(code).is_some() {
            Payload::Vlm {
                media_name: string(u.vlm_media_event.psz_media_name),
                instance_name: string(u.vlm_media_event.psz_instance_name),
            }
        } else {
            Payload::Empty
        }
    };
    RawEvent::new(code, payload)
}

unsafe fn media_payload(kind: MediaEventType, u: &ffi::libvlc_event_u) -> Payload {
    match kind {
        MediaEventType::MetaChanged => Payload::MetaChanged {
            meta_type: u.media_meta_changed.meta_type,
        },
        MediaEventType::SubItemAdded => Payload::SubItemAdded {
            new_child: handle(u.media_subitem_added.new_child),
        },
        MediaEventType::DurationChanged => Payload::DurationChanged {
            new_duration: u.media_duration_changed.new_duration,
        },
        MediaEventType::ParsedChanged => Payload::ParsedChanged {
            new_status: u.media_parsed_changed.new_status,
        },
        MediaEventType::Freed => Payload::Freed {
            md: handle(u.media_freed.md),
        },
        MediaEventType::StateChanged => Payload::StateChanged {
            new_state: u.media_state_changed.new_state,
        },
        MediaEventType::SubItemTreeAdded => Payload::SubItemTreeAdded {
            item: handle(u.media_subitemtree_added.item),
        },
    }
}

unsafe fn media_player_payload(kind: MediaPlayerEventType, u: &ffi::libvlc_event_u) -> Payload {
    use MediaPlayerEventType as T;
    match kind {
        T::MediaChanged => Payload::MediaChanged {
            new_media: handle(u.media_player_media_changed.new_media),
        },
        T::Buffering => Payload::Buffering {
            new_cache: u.media_player_buffering.new_cache,
        },
        T::TimeChanged => Payload::TimeChanged {
            new_time: u.media_player_time_changed.new_time,
        },
        T::PositionChanged => Payload::PositionChanged {
            new_position: u.media_player_position_changed.new_position,
        },
        T::SeekableChanged => Payload::SeekableChanged {
            new_seekable: u.media_player_seekable_changed.new_seekable,
        },
        T::PausableChanged => Payload::PausableChanged {
            new_pausable: u.media_player_pausable_changed.new_pausable,
        },
        T::TitleChanged => Payload::TitleChanged {
            new_title: u.media_player_title_changed.new_title,
        },
        T::SnapshotTaken => Payload::SnapshotTaken {
            filename: string(u.media_player_snapshot_taken.psz_filename),
        },
        T::LengthChanged => Payload::LengthChanged {
            new_length: u.media_player_length_changed.new_length,
        },
        T::Vout => Payload::Vout {
            new_count: u.media_player_vout.new_count,
        },
        T::ScrambledChanged => Payload::ScrambledChanged {
            new_scrambled: u.media_player_scrambled_changed.new_scrambled,
        },
        T::EsAdded | T::EsDeleted | T::EsSelected => Payload::EsChanged {
            track_type: u.media_player_es_changed.i_type,
            id: u.media_player_es_changed.i_id,
        },
        T::NothingSpecial
        | T::Opening
        | T::Playing
        | T::Paused
        | T::Stopped
        | T::Forward
        | T::Backward
        | T::EndReached
        | T::EncounteredError => Payload::Empty,
    }
}

fn handle(media: *mut ffi::libvlc_media_t) -> MediaHandle {
    MediaHandle::from_raw(media as usize)
}

unsafe fn string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}
