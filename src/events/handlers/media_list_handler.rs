// events/handlers/media_list_handler.rs

use crate::error::EventResult;
use crate::events::context::ListenerContext;
use crate::events::listeners::MediaListListener;
use crate::events::record::{Payload, RawEvent};
use crate::events::types::MediaListEventType;

use super::mismatch;

pub(super) fn dispatch(
    listener: &(dyn MediaListListener + 'static),
    event_type: MediaListEventType,
    event: &RawEvent,
    context: &ListenerContext,
) -> EventResult<()> {
    let Payload::ListItem { item, index } = &event.payload else {
        return Err(mismatch(event_type, &event.payload));
    };
    let media = context.media(*item)?;

    match event_type {
        MediaListEventType::ItemAdded => listener.item_added(&media, *index),
        MediaListEventType::WillAddItem => listener.will_add_item(&media, *index),
        MediaListEventType::ItemDeleted => listener.item_deleted(&media, *index),
        MediaListEventType::WillDeleteItem => listener.will_delete_item(&media, *index),
    }
    Ok(())
}
