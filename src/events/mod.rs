// events/mod.rs
//
// Event System - Public API
//
// Listeners subscribe through an `EventManager`; the engine calls back into
// the category trampolines in `handlers`, which decode the raw record and
// invoke the listener trait methods.

pub mod bus;
pub mod context;
pub mod handlers;
pub mod listeners;
pub mod record;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// PUBLIC EXPORTS
// ============================================================================

pub use bus::{DispatchLog, DispatchLogEntry, EventManager, EventManagerConfig, ViolationPolicy};
pub use context::{EventCallback, ListenerContext, Trampoline};
pub use listeners::{
    MediaDiscovererListener, MediaListListener, MediaListPlayerListener, MediaListener,
    MediaPlayerListener, VlmListener,
};
pub use record::{Payload, RawEvent};
pub use types::{
    Category, EventCategory, MediaDiscovererEventType, MediaEventType, MediaListEventType,
    MediaListPlayerEventType, MediaPlayerEventType, VlmEventType,
};
