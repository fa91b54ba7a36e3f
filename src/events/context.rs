// events/context.rs
//
// The callback handed to the engine: a trampoline function plus the
// type-erased context it needs to find its way back to a typed listener.
//
// The listener travels as `Arc<dyn Any>` wrapping the category's
// `Arc<dyn XListener>`; the trampoline recovers it with `downcast_ref`.
// Holding the `Arc` inside the registration keeps the listener alive for any
// callback that races with `detach`. The engine is held weakly: the engine
// stores these contexts in its own table.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use log::{trace, warn};

use crate::domain::Media;
use crate::error::EventError;
use crate::error::EventResult;
use crate::events::bus::config::{EventManagerConfig, ViolationPolicy};
use crate::events::bus::dispatch_log::DispatchLog;
use crate::events::record::RawEvent;
use crate::events::types::{Category, EventCategory};
use crate::integrations::engine::{Engine, MediaHandle};

/// Function the engine invokes for every event of a registration
pub type Trampoline = fn(&RawEvent, &ListenerContext);

/// Per-category dispatch routine run by a trampoline once the listener and
/// event type are recovered
pub(crate) type Dispatch<E> =
    fn(&<E as EventCategory>::Listener, E, &RawEvent, &ListenerContext) -> EventResult<()>;

#[derive(Clone)]
pub struct ListenerContext {
    category: Category,
    listener: Arc<dyn Any + Send + Sync>,
    /// Address of the listener allocation; identifies the registration
    key: usize,
    engine: Weak<dyn Engine>,
    policy: ViolationPolicy,
    log: Option<DispatchLog>,
}

impl ListenerContext {
    pub(crate) fn new<E: EventCategory>(
        listener: &Arc<E::Listener>,
        engine: &Arc<dyn Engine>,
        config: &EventManagerConfig,
        log: Option<DispatchLog>,
    ) -> Self {
        let key = Arc::as_ptr(listener) as *const () as usize;
        Self {
            category: E::CATEGORY,
            listener: Arc::new(Arc::clone(listener)),
            key,
            engine: Arc::downgrade(engine),
            policy: config.violation_policy,
            log,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Recover the typed listener. `None` if the context holds a listener
    /// of another category.
    pub fn listener<L: ?Sized + 'static>(&self) -> Option<&Arc<L>> {
        self.listener.downcast_ref::<Arc<L>>()
    }

    /// Wrap a handle from the current event's payload
    pub fn media(&self, handle: MediaHandle) -> EventResult<Media> {
        self.engine
            .upgrade()
            .map(|engine| Media::from_event(engine, handle))
            .ok_or(EventError::EngineUnavailable)
    }

    pub(crate) fn deliver<E: EventCategory>(&self, event: &RawEvent, dispatch: Dispatch<E>) {
        let result = self
            .listener::<E::Listener>()
            .ok_or(EventError::ListenerTypeMismatch {
                category: E::CATEGORY,
            })
            .and_then(|listener| {
                let kind = E::from_code(event.type_code).ok_or(EventError::UnknownEventType {
                    category: E::CATEGORY,
                    code: event.type_code,
                })?;
                trace!("[EVENTS] Dispatching {} to {} listener", kind.name(), E::CATEGORY);
                dispatch(&**listener, kind, event, self)?;
                Ok(kind)
            });

        match result {
            Ok(kind) => {
                if let Some(log) = &self.log {
                    log.record(E::CATEGORY, kind.name(), kind.code());
                }
            }
            Err(err) if err.is_protocol_violation() => self.policy.report(&err, event),
            Err(err) => warn!(
                "[EVENTS] Dropped {} event {:#x}: {}",
                E::CATEGORY,
                event.type_code,
                err
            ),
        }
    }
}

/// A trampoline paired with its context, as registered with the engine.
///
/// Two callbacks are equal when they target the same listener allocation in
/// the same category, which is what `detach` matches on.
#[derive(Clone)]
pub struct EventCallback {
    trampoline: Trampoline,
    context: ListenerContext,
}

impl EventCallback {
    pub fn new(trampoline: Trampoline, context: ListenerContext) -> Self {
        Self {
            trampoline,
            context,
        }
    }

    pub fn invoke(&self, event: &RawEvent) {
        (self.trampoline)(event, &self.context)
    }

    pub fn trampoline(&self) -> Trampoline {
        self.trampoline
    }

    pub fn context(&self) -> &ListenerContext {
        &self.context
    }
}

impl PartialEq for EventCallback {
    fn eq(&self, other: &Self) -> bool {
        self.context.category == other.context.category && self.context.key == other.context.key
    }
}

impl Eq for EventCallback {}

impl fmt::Debug for EventCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventCallback")
            .field("category", &self.context.category)
            .field("listener", &format_args!("{:#x}", self.context.key))
            .finish()
    }
}
