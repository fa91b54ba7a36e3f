// events/handlers/media_list_player_handler.rs

use crate::error::EventResult;
use crate::events::context::ListenerContext;
use crate::events::listeners::MediaListPlayerListener;
use crate::events::record::{Payload, RawEvent};
use crate::events::types::MediaListPlayerEventType;

use super::mismatch;

pub(super) fn dispatch(
    listener: &(dyn MediaListPlayerListener + 'static),
    event_type: MediaListPlayerEventType,
    event: &RawEvent,
    context: &ListenerContext,
) -> EventResult<()> {
    match (event_type, &event.payload) {
        (MediaListPlayerEventType::Played, _) => listener.played(),
        (MediaListPlayerEventType::NextItemSet, Payload::NextItemSet { item }) => {
            listener.next_item_set(&context.media(*item)?)
        }
        (MediaListPlayerEventType::Stopped, _) => listener.stopped(),
        (event_type, payload) => return Err(mismatch(event_type, payload)),
    }
    Ok(())
}
