// events/handlers/mod.rs
//
// Trampolines - one per category.
//
// Each trampoline is the function registered with the engine. It recovers
// the typed listener from the context, maps the type code onto the
// category's enum and hands off to the category's dispatch table, which
// extracts the payload fields and calls the listener method.

mod media_discoverer_handler;
mod media_handler;
mod media_list_handler;
mod media_list_player_handler;
mod media_player_handler;
mod vlm_handler;

use crate::error::{EventError, EventResult};
use crate::events::context::ListenerContext;
use crate::events::record::{Payload, RawEvent};
use crate::events::types::{
    EventCategory, MediaDiscovererEventType, MediaEventType, MediaListEventType,
    MediaListPlayerEventType, MediaPlayerEventType, VlmEventType,
};

pub fn handle_media_event(event: &RawEvent, context: &ListenerContext) {
    context.deliver::<MediaEventType>(event, media_handler::dispatch);
}

pub fn handle_media_player_event(event: &RawEvent, context: &ListenerContext) {
    context.deliver::<MediaPlayerEventType>(event, media_player_handler::dispatch);
}

pub fn handle_media_list_event(event: &RawEvent, context: &ListenerContext) {
    context.deliver::<MediaListEventType>(event, media_list_handler::dispatch);
}

pub fn handle_media_list_player_event(event: &RawEvent, context: &ListenerContext) {
    context.deliver::<MediaListPlayerEventType>(event, media_list_player_handler::dispatch);
}

pub fn handle_media_discoverer_event(event: &RawEvent, context: &ListenerContext) {
    context.deliver::<MediaDiscovererEventType>(event, media_discoverer_handler::dispatch);
}

pub fn handle_vlm_event(event: &RawEvent, context: &ListenerContext) {
    context.deliver::<VlmEventType>(event, vlm_handler::dispatch);
}

fn mismatch<E: EventCategory>(event_type: E, payload: &Payload) -> EventError {
    EventError::PayloadMismatch {
        event: event_type.name(),
        payload: payload.name(),
    }
}

/// Convert a raw enum field, reporting out-of-range values
fn convert<E, T>(event_type: E, field: &'static str, value: i32) -> EventResult<T>
where
    E: EventCategory,
    T: TryFrom<i32, Error = i32>,
{
    T::try_from(value).map_err(|value| EventError::InvalidValue {
        event: event_type.name(),
        field,
        value,
    })
}
