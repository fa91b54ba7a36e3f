// src/lib.rs
// libvlc-events - typed listeners over libvlc's event callbacks
//
// Architecture:
// - Engine boundary: libvlc owns subscriber tables and dispatch threads
// - Trampolines: one per category, registered with the engine
// - Listeners: one trait per category, default no-op methods
// - Explicit ownership: media in events is borrowed, clones retain

// ============================================================================
// MODULES
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Values
// ============================================================================

pub use domain::{Media, MediaState, MetaType, Ownership, TrackType};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{EventError, EventResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    // Event types
    Category,
    EventCategory,
    MediaDiscovererEventType,
    MediaEventType,
    MediaListEventType,
    MediaListPlayerEventType,
    MediaPlayerEventType,
    VlmEventType,
    // Listeners
    MediaDiscovererListener,
    MediaListListener,
    MediaListPlayerListener,
    MediaListener,
    MediaPlayerListener,
    VlmListener,
    // Subscription
    DispatchLogEntry,
    EventManager,
    EventManagerConfig,
    ViolationPolicy,
    // Raw records
    Payload,
    RawEvent,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{Engine, EventSource, MediaHandle, SimulatedEngine};

#[cfg(feature = "libvlc")]
pub use integrations::LibVlcEngine;
