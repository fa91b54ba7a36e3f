// events/handlers/vlm_handler.rs
//
// Every VLM event shares one payload: media name and instance name, either
// of which may be null at the source.

use crate::error::EventResult;
use crate::events::context::ListenerContext;
use crate::events::listeners::VlmListener;
use crate::events::record::{Payload, RawEvent};
use crate::events::types::VlmEventType;

use super::mismatch;

pub(super) fn dispatch(
    listener: &(dyn VlmListener + 'static),
    event_type: VlmEventType,
    event: &RawEvent,
    _context: &ListenerContext,
) -> EventResult<()> {
    let Payload::Vlm {
        media_name,
        instance_name,
    } = &event.payload
    else {
        return Err(mismatch(event_type, &event.payload));
    };
    let media = media_name.as_deref().unwrap_or_default();
    let instance = instance_name.as_deref().unwrap_or_default();

    match event_type {
        VlmEventType::MediaAdded => listener.media_added(media),
        VlmEventType::MediaRemoved => listener.media_removed(media),
        VlmEventType::MediaChanged => listener.media_changed(media),
        VlmEventType::MediaInstanceStarted => listener.media_instance_started(instance, media),
        VlmEventType::MediaInstanceStopped => listener.media_instance_stopped(instance, media),
        VlmEventType::MediaInstanceStatusInit => {
            listener.media_instance_status_init(instance, media)
        }
        VlmEventType::MediaInstanceStatusOpening => {
            listener.media_instance_status_opening(instance, media)
        }
        VlmEventType::MediaInstanceStatusPlaying => {
            listener.media_instance_status_playing(instance, media)
        }
        VlmEventType::MediaInstanceStatusPause => {
            listener.media_instance_status_pause(instance, media)
        }
        VlmEventType::MediaInstanceStatusEnd => listener.media_instance_status_end(instance, media),
        VlmEventType::MediaInstanceStatusError => {
            listener.media_instance_status_error(instance, media)
        }
    }
    Ok(())
}
