// events/bus/event_manager.rs
//
// Event manager - typed subscription front-end over an engine event source.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - attach/detach delegate to the engine immediately
// 2. Stateless - the engine owns the subscriber table, not the manager
// 3. Type-safe - an event type can only be paired with its category's listener
// 4. Borrowing - the event source belongs to the wrapped media object

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::error::{EventError, EventResult};
use crate::events::bus::config::EventManagerConfig;
use crate::events::bus::dispatch_log::{DispatchLog, DispatchLogEntry};
use crate::events::context::{EventCallback, ListenerContext};
use crate::events::types::EventCategory;
use crate::integrations::engine::{Engine, EventSource};

/// The Event Manager
///
/// A view onto one engine event source. Listeners are registered per event
/// type; the engine later invokes the category's trampoline, which calls the
/// matching listener method.
///
/// Key characteristics:
/// - No thread or loop of its own; dispatch is driven by the engine
/// - Listener identity is the `Arc` allocation: detach with the same `Arc`
///   that was attached
/// - Dropping the manager leaves the source and its registrations alone
pub struct EventManager {
    engine: Arc<dyn Engine>,
    source: EventSource,
    config: EventManagerConfig,
    dispatch_log: Option<DispatchLog>,
}

impl EventManager {
    pub fn new(engine: Arc<dyn Engine>, source: EventSource) -> Self {
        Self::with_config(engine, source, EventManagerConfig::default())
    }

    pub fn with_config(
        engine: Arc<dyn Engine>,
        source: EventSource,
        config: EventManagerConfig,
    ) -> Self {
        let dispatch_log = config
            .record_dispatches
            .then(|| DispatchLog::with_capacity(config.dispatch_log_capacity));
        Self {
            engine,
            source,
            config,
            dispatch_log,
        }
    }

    pub fn source(&self) -> EventSource {
        self.source
    }

    pub fn config(&self) -> &EventManagerConfig {
        &self.config
    }

    /// Subscribe `listener` to `event_type`.
    ///
    /// Example:
    /// ```ignore
    /// let listener: Arc<dyn MediaPlayerListener> = Arc::new(MyListener::default());
    /// manager.attach(MediaPlayerEventType::Playing, &listener)?;
    /// ```
    pub fn attach<E: EventCategory>(
        &self,
        event_type: E,
        listener: &Arc<E::Listener>,
    ) -> EventResult<()> {
        let code = event_type.code();
        if self.engine.event_attach(self.source, code, self.callback::<E>(listener)) {
            debug!(
                "[EVENTS] Attached {} listener to {} on source {:#x}",
                E::CATEGORY,
                event_type.name(),
                self.source.as_raw()
            );
            Ok(())
        } else {
            warn!(
                "[EVENTS] Engine rejected {} listener for {} on source {:#x}",
                E::CATEGORY,
                event_type.name(),
                self.source.as_raw()
            );
            Err(EventError::AttachRejected {
                event: event_type.name(),
                code,
            })
        }
    }

    /// Subscribe by raw event code.
    ///
    /// Returns false, without contacting the engine, when `listener` is
    /// missing or `code` is not one of `E`'s event types. Otherwise returns
    /// the engine's answer.
    pub fn attach_code<E: EventCategory>(
        &self,
        code: i32,
        listener: Option<&Arc<E::Listener>>,
    ) -> bool {
        let Some(listener) = listener else {
            debug!("[EVENTS] Refused {} attach without listener", E::CATEGORY);
            return false;
        };
        let Some(event_type) = E::from_code(code) else {
            debug!(
                "[EVENTS] Refused {} attach for foreign code {:#x}",
                E::CATEGORY,
                code
            );
            return false;
        };
        self.attach(event_type, listener).is_ok()
    }

    /// Unsubscribe `listener` from `event_type`.
    ///
    /// A callback already running on an engine thread may still complete
    /// after this returns.
    pub fn detach<E: EventCategory>(&self, event_type: E, listener: &Arc<E::Listener>) {
        self.detach_code::<E>(event_type.code(), listener);
    }

    /// Unsubscribe by raw event code. Not validated; unknown registrations
    /// are left to the engine to ignore.
    pub fn detach_code<E: EventCategory>(&self, code: i32, listener: &Arc<E::Listener>) {
        let callback = self.callback::<E>(listener);
        self.engine.event_detach(self.source, code, &callback);
        debug!(
            "[EVENTS] Detached {} listener from code {:#x} on source {:#x}",
            E::CATEGORY,
            code,
            self.source.as_raw()
        );
    }

    /// Events delivered so far. Empty unless `record_dispatches` is set.
    pub fn dispatch_log(&self) -> Vec<DispatchLogEntry> {
        self.dispatch_log
            .as_ref()
            .map(DispatchLog::entries)
            .unwrap_or_default()
    }

    pub fn clear_dispatch_log(&self) {
        if let Some(log) = &self.dispatch_log {
            log.clear();
        }
    }

    fn callback<E: EventCategory>(&self, listener: &Arc<E::Listener>) -> EventCallback {
        let context = ListenerContext::new::<E>(
            listener,
            &self.engine,
            &self.config,
            self.dispatch_log.clone(),
        );
        EventCallback::new(E::trampoline(), context)
    }
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventManager")
            .field("source", &self.source)
            .field("config", &self.config)
            .finish()
    }
}
