// events/handlers/media_player_handler.rs
//
// PausableChanged is read from its own union member. Both it and
// SeekableChanged are a single int at the same offset, so reading the
// seekable member would happen to work, but it is not the engine's contract.

use crate::error::EventResult;
use crate::events::context::ListenerContext;
use crate::events::listeners::MediaPlayerListener;
use crate::events::record::{Payload, RawEvent};
use crate::events::types::MediaPlayerEventType as Mp;

use super::{convert, mismatch};

pub(super) fn dispatch(
    listener: &(dyn MediaPlayerListener + 'static),
    event_type: Mp,
    event: &RawEvent,
    context: &ListenerContext,
) -> EventResult<()> {
    match (event_type, &event.payload) {
        (Mp::MediaChanged, Payload::MediaChanged { new_media }) => {
            listener.media_changed(&context.media(*new_media)?)
        }
        (Mp::NothingSpecial, _) => listener.nothing_special(),
        (Mp::Opening, _) => listener.opening(),
        (Mp::Buffering, Payload::Buffering { new_cache }) => listener.buffering(*new_cache),
        (Mp::Playing, _) => listener.playing(),
        (Mp::Paused, _) => listener.paused(),
        (Mp::Stopped, _) => listener.stopped(),
        (Mp::Forward, _) => listener.forward(),
        (Mp::Backward, _) => listener.backward(),
        (Mp::EndReached, _) => listener.end_reached(),
        (Mp::EncounteredError, _) => listener.encountered_error(),
        (Mp::TimeChanged, Payload::TimeChanged { new_time }) => listener.time_changed(*new_time),
        (Mp::PositionChanged, Payload::PositionChanged { new_position }) => {
            listener.position_changed(*new_position)
        }
        (Mp::SeekableChanged, Payload::SeekableChanged { new_seekable }) => {
            listener.seekable_changed(*new_seekable != 0)
        }
        (Mp::PausableChanged, Payload::PausableChanged { new_pausable }) => {
            listener.pausable_changed(*new_pausable != 0)
        }
        (Mp::TitleChanged, Payload::TitleChanged { new_title }) => {
            listener.title_changed(*new_title)
        }
        (Mp::SnapshotTaken, Payload::SnapshotTaken { filename }) => {
            listener.snapshot_taken(filename.as_deref().unwrap_or_default())
        }
        (Mp::LengthChanged, Payload::LengthChanged { new_length }) => {
            listener.length_changed(*new_length)
        }
        (Mp::Vout, Payload::Vout { new_count }) => listener.vout(*new_count),
        (Mp::ScrambledChanged, Payload::ScrambledChanged { new_scrambled }) => {
            listener.scrambled_changed(*new_scrambled)
        }
        (Mp::EsAdded, Payload::EsChanged { track_type, id }) => {
            listener.es_added(convert(event_type, "i_type", *track_type)?, *id)
        }
        (Mp::EsDeleted, Payload::EsChanged { track_type, id }) => {
            listener.es_deleted(convert(event_type, "i_type", *track_type)?, *id)
        }
        (Mp::EsSelected, Payload::EsChanged { track_type, id }) => {
            listener.es_selected(convert(event_type, "i_type", *track_type)?, *id)
        }
        (event_type, payload) => return Err(mismatch(event_type, payload)),
    }
    Ok(())
}
