// events/record.rs
//
// The raw event record as delivered by the engine.
//
// `Payload` mirrors the members of libvlc_event_t's union, one variant per
// member. Which variant is meaningful is decided by `type_code`; the
// trampolines treat any other pairing as a protocol violation.

use crate::events::types::EventCategory;
use crate::integrations::engine::MediaHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Events that carry no fields
    Empty,

    // Media
    MetaChanged { meta_type: i32 },
    SubItemAdded { new_child: MediaHandle },
    DurationChanged { new_duration: i64 },
    ParsedChanged { new_status: i32 },
    Freed { md: MediaHandle },
    StateChanged { new_state: i32 },
    SubItemTreeAdded { item: MediaHandle },

    // Media player
    MediaChanged { new_media: MediaHandle },
    Buffering { new_cache: f32 },
    TimeChanged { new_time: i64 },
    PositionChanged { new_position: f32 },
    SeekableChanged { new_seekable: i32 },
    PausableChanged { new_pausable: i32 },
    TitleChanged { new_title: i32 },
    SnapshotTaken { filename: Option<String> },
    LengthChanged { new_length: i64 },
    Vout { new_count: i32 },
    ScrambledChanged { new_scrambled: i32 },
    EsChanged { track_type: i32, id: i32 },

    // Media list (added / will add / deleted / will delete share a layout)
    ListItem { item: MediaHandle, index: i32 },

    // Media list player
    NextItemSet { item: MediaHandle },

    // VLM
    Vlm {
        media_name: Option<String>,
        instance_name: Option<String>,
    },
}

impl Payload {
    /// Union member name, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Payload::Empty => "empty",
            Payload::MetaChanged { .. } => "media_meta_changed",
            Payload::SubItemAdded { .. } => "media_subitem_added",
            Payload::DurationChanged { .. } => "media_duration_changed",
            Payload::ParsedChanged { .. } => "media_parsed_changed",
            Payload::Freed { .. } => "media_freed",
            Payload::StateChanged { .. } => "media_state_changed",
            Payload::SubItemTreeAdded { .. } => "media_subitemtree_added",
            Payload::MediaChanged { .. } => "media_player_media_changed",
            Payload::Buffering { .. } => "media_player_buffering",
            Payload::TimeChanged { .. } => "media_player_time_changed",
            Payload::PositionChanged { .. } => "media_player_position_changed",
            Payload::SeekableChanged { .. } => "media_player_seekable_changed",
            Payload::PausableChanged { .. } => "media_player_pausable_changed",
            Payload::TitleChanged { .. } => "media_player_title_changed",
            Payload::SnapshotTaken { .. } => "media_player_snapshot_taken",
            Payload::LengthChanged { .. } => "media_player_length_changed",
            Payload::Vout { .. } => "media_player_vout",
            Payload::ScrambledChanged { .. } => "media_player_scrambled_changed",
            Payload::EsChanged { .. } => "media_player_es_changed",
            Payload::ListItem { .. } => "media_list_item",
            Payload::NextItemSet { .. } => "media_list_player_next_item_set",
            Payload::Vlm { .. } => "vlm_media_event",
        }
    }
}

/// One event as fired by the engine. Read-only for the dispatch layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub type_code: i32,
    pub payload: Payload,
}

impl RawEvent {
    pub fn new(type_code: i32, payload: Payload) -> Self {
        Self { type_code, payload }
    }

    /// Build a record for a known event type
    pub fn of<E: EventCategory>(event_type: E, payload: Payload) -> Self {
        Self::new(event_type.code(), payload)
    }

    /// Build a record for an event type without fields
    pub fn bare<E: EventCategory>(event_type: E) -> Self {
        Self::of(event_type, Payload::Empty)
    }
}
