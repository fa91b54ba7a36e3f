// events/listeners.rs
//
// One listener trait per event category. Every method has an empty default
// body: implement only the events you care about.
//
// Methods run on engine threads, possibly concurrently, and the engine may
// hold internal locks while they run. Return promptly and do not call back
// into the engine from a handler.
//
// Media arguments are borrowed for the duration of the call. Clone a
// `Media` to keep it (the clone holds its own engine reference).
// `media_changed` may carry a null media (`Media::is_null`) when the
// player's media was cleared.

use crate::domain::{Media, MediaState, MetaType, TrackType};

pub trait MediaListener: Send + Sync {
    fn meta_changed(&self, _meta_type: MetaType) {}
    fn sub_item_added(&self, _media: &Media) {}
    fn duration_changed(&self, _duration: i64) {}
    fn parsed_changed(&self, _parsed: bool) {}
    fn freed(&self, _media: &Media) {}
    fn state_changed(&self, _state: MediaState) {}
    fn sub_item_tree_added(&self, _media: &Media) {}
}

pub trait MediaPlayerListener: Send + Sync {
    fn media_changed(&self, _media: &Media) {}
    fn nothing_special(&self) {}
    fn opening(&self) {}
    /// Buffering progress, in percent
    fn buffering(&self, _cache: f32) {}
    fn playing(&self) {}
    fn paused(&self) {}
    fn stopped(&self) {}
    fn forward(&self) {}
    fn backward(&self) {}
    fn end_reached(&self) {}
    fn encountered_error(&self) {}
    /// Playback time, in milliseconds
    fn time_changed(&self, _time: i64) {}
    /// Playback position as a fraction of the length
    fn position_changed(&self, _position: f32) {}
    fn seekable_changed(&self, _seekable: bool) {}
    fn pausable_changed(&self, _pausable: bool) {}
    fn title_changed(&self, _title: i32) {}
    /// Path of the written snapshot; empty if the engine gave none
    fn snapshot_taken(&self, _path: &str) {}
    /// Media length, in milliseconds
    fn length_changed(&self, _length: i64) {}
    /// Number of video outputs
    fn vout(&self, _count: i32) {}
    fn scrambled_changed(&self, _scrambled: i32) {}
    fn es_added(&self, _track_type: TrackType, _id: i32) {}
    fn es_deleted(&self, _track_type: TrackType, _id: i32) {}
    fn es_selected(&self, _track_type: TrackType, _id: i32) {}
}

pub trait MediaListListener: Send + Sync {
    fn item_added(&self, _media: &Media, _index: i32) {}
    fn will_add_item(&self, _media: &Media, _index: i32) {}
    fn item_deleted(&self, _media: &Media, _index: i32) {}
    fn will_delete_item(&self, _media: &Media, _index: i32) {}
}

pub trait MediaListPlayerListener: Send + Sync {
    fn played(&self) {}
    fn next_item_set(&self, _media: &Media) {}
    fn stopped(&self) {}
}

pub trait MediaDiscovererListener: Send + Sync {
    fn started(&self) {}
    fn stopped(&self) {}
}

/// VLM (broadcast/VoD manager) events. Names missing at the source arrive
/// as empty strings.
pub trait VlmListener: Send + Sync {
    fn media_added(&self, _media_name: &str) {}
    fn media_removed(&self, _media_name: &str) {}
    fn media_changed(&self, _media_name: &str) {}
    fn media_instance_started(&self, _instance_name: &str, _media_name: &str) {}
    fn media_instance_stopped(&self, _instance_name: &str, _media_name: &str) {}
    fn media_instance_status_init(&self, _instance_name: &str, _media_name: &str) {}
    fn media_instance_status_opening(&self, _instance_name: &str, _media_name: &str) {}
    fn media_instance_status_playing(&self, _instance_name: &str, _media_name: &str) {}
    fn media_instance_status_pause(&self, _instance_name: &str, _media_name: &str) {}
    fn media_instance_status_end(&self, _instance_name: &str, _media_name: &str) {}
    fn media_instance_status_error(&self, _instance_name: &str, _media_name: &str) {}
}
