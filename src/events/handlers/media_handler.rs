// events/handlers/media_handler.rs

use crate::error::EventResult;
use crate::events::context::ListenerContext;
use crate::events::listeners::MediaListener;
use crate::events::record::{Payload, RawEvent};
use crate::events::types::MediaEventType;

use super::{convert, mismatch};

pub(super) fn dispatch(
    listener: &(dyn MediaListener + 'static),
    event_type: MediaEventType,
    event: &RawEvent,
    context: &ListenerContext,
) -> EventResult<()> {
    match (event_type, &event.payload) {
        (MediaEventType::MetaChanged, Payload::MetaChanged { meta_type }) => {
            listener.meta_changed(convert(event_type, "meta_type", *meta_type)?)
        }
        (MediaEventType::SubItemAdded, Payload::SubItemAdded { new_child }) => {
            listener.sub_item_added(&context.media(*new_child)?)
        }
        (MediaEventType::DurationChanged, Payload::DurationChanged { new_duration }) => {
            listener.duration_changed(*new_duration)
        }
        (MediaEventType::ParsedChanged, Payload::ParsedChanged { new_status }) => {
            listener.parsed_changed(*new_status != 0)
        }
        (MediaEventType::Freed, Payload::Freed { md }) => listener.freed(&context.media(*md)?),
        (MediaEventType::StateChanged, Payload::StateChanged { new_state }) => {
            listener.state_changed(convert(event_type, "new_state", *new_state)?)
        }
        (MediaEventType::SubItemTreeAdded, Payload::SubItemTreeAdded { item }) => {
            listener.sub_item_tree_added(&context.media(*item)?)
        }
        (event_type, payload) => return Err(mismatch(event_type, payload)),
    }
    Ok(())
}
