// events/handlers/media_discoverer_handler.rs

use crate::error::EventResult;
use crate::events::context::ListenerContext;
use crate::events::listeners::MediaDiscovererListener;
use crate::events::record::RawEvent;
use crate::events::types::MediaDiscovererEventType;

pub(super) fn dispatch(
    listener: &(dyn MediaDiscovererListener + 'static),
    event_type: MediaDiscovererEventType,
    _event: &RawEvent,
    _context: &ListenerContext,
) -> EventResult<()> {
    match event_type {
        MediaDiscovererEventType::Started => listener.started(),
        MediaDiscovererEventType::Ended => listener.stopped(),
    }
    Ok(())
}
