// events/types.rs
//
// Event categories and their event-type catalogues.
//
// Every category owns a closed set of event types carrying libvlc's numeric
// codes. A code belongs to exactly one category; subscription requests are
// validated by mapping the code back onto the category's enum.
//
// MediaListView events (0x300..) are never emitted by libvlc and have no
// catalogue here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::events::context::Trampoline;
use crate::events::handlers;
use crate::events::listeners::{
    MediaDiscovererListener, MediaListListener, MediaListPlayerListener, MediaListener,
    MediaPlayerListener, VlmListener,
};

/// A family of related event types sharing one listener trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Media,
    MediaPlayer,
    MediaList,
    MediaListPlayer,
    MediaDiscoverer,
    Vlm,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Media,
        Category::MediaPlayer,
        Category::MediaList,
        Category::MediaListPlayer,
        Category::MediaDiscoverer,
        Category::Vlm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Media => "Media",
            Category::MediaPlayer => "MediaPlayer",
            Category::MediaList => "MediaList",
            Category::MediaListPlayer => "MediaListPlayer",
            Category::MediaDiscoverer => "MediaDiscoverer",
            Category::Vlm => "Vlm",
        }
    }

    /// Whether `code` is one of this category's event types
    pub fn contains(self, code: i32) -> bool {
        match self {
            Category::Media => MediaEventType::from_code(code).is_some(),
            Category::MediaPlayer => MediaPlayerEventType::from_code(code).is_some(),
            Category::MediaList => MediaListEventType::from_code(code).is_some(),
            Category::MediaListPlayer => MediaListPlayerEventType::from_code(code).is_some(),
            Category::MediaDiscoverer => MediaDiscovererEventType::from_code(code).is_some(),
            Category::Vlm => VlmEventType::from_code(code).is_some(),
        }
    }

    /// The category owning `code`, if any
    pub fn of_code(code: i32) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.contains(code))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by each category's event-type enum.
///
/// Ties the enum to its listener trait and trampoline so that
/// `EventManager::attach` can only pair an event type with a listener of the
/// same category.
pub trait EventCategory: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The listener trait object for this category
    type Listener: ?Sized + Send + Sync + 'static;

    const CATEGORY: Category;

    /// Every event type of the category, in code order
    const ALL: &'static [Self];

    /// libvlc's numeric code
    fn code(self) -> i32;

    /// libvlc's name for the event, e.g. `MediaPlayerPlaying`
    fn name(self) -> &'static str;

    /// The function the engine invokes for this category
    fn trampoline() -> Trampoline;

    fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|event| event.code() == code)
    }
}

// ============================================================================
// MEDIA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MediaEventType {
    MetaChanged = 0x000,
    SubItemAdded = 0x001,
    DurationChanged = 0x002,
    ParsedChanged = 0x003,
    Freed = 0x004,
    StateChanged = 0x005,
    SubItemTreeAdded = 0x006,
}

impl EventCategory for MediaEventType {
    type Listener = dyn MediaListener;

    const CATEGORY: Category = Category::Media;

    const ALL: &'static [Self] = &[
        MediaEventType::MetaChanged,
        MediaEventType::SubItemAdded,
        MediaEventType::DurationChanged,
        MediaEventType::ParsedChanged,
        MediaEventType::Freed,
        MediaEventType::StateChanged,
        MediaEventType::SubItemTreeAdded,
    ];

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            MediaEventType::MetaChanged => "MediaMetaChanged",
            MediaEventType::SubItemAdded => "MediaSubItemAdded",
            MediaEventType::DurationChanged => "MediaDurationChanged",
            MediaEventType::ParsedChanged => "MediaParsedChanged",
            MediaEventType::Freed => "MediaFreed",
            MediaEventType::StateChanged => "MediaStateChanged",
            MediaEventType::SubItemTreeAdded => "MediaSubItemTreeAdded",
        }
    }

    fn trampoline() -> Trampoline {
        handlers::handle_media_event
    }
}

// ============================================================================
// MEDIA PLAYER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MediaPlayerEventType {
    MediaChanged = 0x100,
    NothingSpecial = 0x101,
    Opening = 0x102,
    Buffering = 0x103,
    Playing = 0x104,
    Paused = 0x105,
    Stopped = 0x106,
    Forward = 0x107,
    Backward = 0x108,
    EndReached = 0x109,
    EncounteredError = 0x10a,
    TimeChanged = 0x10b,
    PositionChanged = 0x10c,
    SeekableChanged = 0x10d,
    PausableChanged = 0x10e,
    TitleChanged = 0x10f,
    SnapshotTaken = 0x110,
    LengthChanged = 0x111,
    Vout = 0x112,
    ScrambledChanged = 0x113,
    EsAdded = 0x114,
    EsDeleted = 0x115,
    EsSelected = 0x116,
}

impl EventCategory for MediaPlayerEventType {
    type Listener = dyn MediaPlayerListener;

    const CATEGORY: Category = Category::MediaPlayer;

    const ALL: &'static [Self] = &[
        MediaPlayerEventType::MediaChanged,
        MediaPlayerEventType::NothingSpecial,
        MediaPlayerEventType::Opening,
        MediaPlayerEventType::Buffering,
        MediaPlayerEventType::Playing,
        MediaPlayerEventType::Paused,
        MediaPlayerEventType::Stopped,
        MediaPlayerEventType::Forward,
        MediaPlayerEventType::Backward,
        MediaPlayerEventType::EndReached,
        MediaPlayerEventType::EncounteredError,
        MediaPlayerEventType::TimeChanged,
        MediaPlayerEventType::PositionChanged,
        MediaPlayerEventType::SeekableChanged,
        MediaPlayerEventType::PausableChanged,
        MediaPlayerEventType::TitleChanged,
        MediaPlayerEventType::SnapshotTaken,
        MediaPlayerEventType::LengthChanged,
        MediaPlayerEventType::Vout,
        MediaPlayerEventType::ScrambledChanged,
        MediaPlayerEventType::EsAdded,
        MediaPlayerEventType::EsDeleted,
        MediaPlayerEventType::EsSelected,
    ];

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            MediaPlayerEventType::MediaChanged => "MediaPlayerMediaChanged",
            MediaPlayerEventType::NothingSpecial => "MediaPlayerNothingSpecial",
            MediaPlayerEventType::Opening => "MediaPlayerOpening",
            MediaPlayerEventType::Buffering => "MediaPlayerBuffering",
            MediaPlayerEventType::Playing => "MediaPlayerPlaying",
            MediaPlayerEventType::Paused => "MediaPlayerPaused",
            MediaPlayerEventType::Stopped => "MediaPlayerStopped",
            MediaPlayerEventType::Forward => "MediaPlayerForward",
            MediaPlayerEventType::Backward => "MediaPlayerBackward",
            MediaPlayerEventType::EndReached => "MediaPlayerEndReached",
            MediaPlayerEventType::EncounteredError => "MediaPlayerEncounteredError",
            MediaPlayerEventType::TimeChanged => "MediaPlayerTimeChanged",
            MediaPlayerEventType::PositionChanged => "MediaPlayerPositionChanged",
            MediaPlayerEventType::SeekableChanged => "MediaPlayerSeekableChanged",
            MediaPlayerEventType::PausableChanged => "MediaPlayerPausableChanged",
            MediaPlayerEventType::TitleChanged => "MediaPlayerTitleChanged",
            MediaPlayerEventType::SnapshotTaken => "MediaPlayerSnapshotTaken",
            MediaPlayerEventType::LengthChanged => "MediaPlayerLengthChanged",
            MediaPlayerEventType::Vout => "MediaPlayerVout",
            MediaPlayerEventType::ScrambledChanged => "MediaPlayerScrambledChanged",
            MediaPlayerEventType::EsAdded => "MediaPlayerESAdded",
            MediaPlayerEventType::EsDeleted => "MediaPlayerESDeleted",
            MediaPlayerEventType::EsSelected => "MediaPlayerESSelected",
        }
    }

    fn trampoline() -> Trampoline {
        handlers::handle_media_player_event
    }
}

// ============================================================================
// MEDIA LIST
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MediaListEventType {
    ItemAdded = 0x200,
    WillAddItem = 0x201,
    ItemDeleted = 0x202,
    WillDeleteItem = 0x203,
}

impl EventCategory for MediaListEventType {
    type Listener = dyn MediaListListener;

    const CATEGORY: Category = Category::MediaList;

    const ALL: &'static [Self] = &[
        MediaListEventType::ItemAdded,
        MediaListEventType::WillAddItem,
        MediaListEventType::ItemDeleted,
        MediaListEventType::WillDeleteItem,
    ];

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            MediaListEventType::ItemAdded => "MediaListItemAdded",
            MediaListEventType::WillAddItem => "MediaListWillAddItem",
            MediaListEventType::ItemDeleted => "MediaListItemDeleted",
            MediaListEventType::WillDeleteItem => "MediaListWillDeleteItem",
        }
    }

    fn trampoline() -> Trampoline {
        handlers::handle_media_list_event
    }
}

// ============================================================================
// MEDIA LIST PLAYER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MediaListPlayerEventType {
    Played = 0x400,
    NextItemSet = 0x401,
    Stopped = 0x402,
}

impl EventCategory for MediaListPlayerEventType {
    type Listener = dyn MediaListPlayerListener;

    const CATEGORY: Category = Category::MediaListPlayer;

    const ALL: &'static [Self] = &[
        MediaListPlayerEventType::Played,
        MediaListPlayerEventType::NextItemSet,
        MediaListPlayerEventType::Stopped,
    ];

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            MediaListPlayerEventType::Played => "MediaListPlayerPlayed",
            MediaListPlayerEventType::NextItemSet => "MediaListPlayerNextItemSet",
            MediaListPlayerEventType::Stopped => "MediaListPlayerStopped",
        }
    }

    fn trampoline() -> Trampoline {
        handlers::handle_media_list_player_event
    }
}

// ============================================================================
// MEDIA DISCOVERER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MediaDiscovererEventType {
    Started = 0x500,
    Ended = 0x501,
}

impl EventCategory for MediaDiscovererEventType {
    type Listener = dyn MediaDiscovererListener;

    const CATEGORY: Category = Category::MediaDiscoverer;

    const ALL: &'static [Self] = &[
        MediaDiscovererEventType::Started,
        MediaDiscovererEventType::Ended,
    ];

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            MediaDiscovererEventType::Started => "MediaDiscovererStarted",
            MediaDiscovererEventType::Ended => "MediaDiscovererEnded",
        }
    }

    fn trampoline() -> Trampoline {
        handlers::handle_media_discoverer_event
    }
}

// ============================================================================
// VLM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum VlmEventType {
    MediaAdded = 0x600,
    MediaRemoved = 0x601,
    MediaChanged = 0x602,
    MediaInstanceStarted = 0x603,
    MediaInstanceStopped = 0x604,
    MediaInstanceStatusInit = 0x605,
    MediaInstanceStatusOpening = 0x606,
    MediaInstanceStatusPlaying = 0x607,
    MediaInstanceStatusPause = 0x608,
    MediaInstanceStatusEnd = 0x609,
    MediaInstanceStatusError = 0x60a,
}

impl EventCategory for VlmEventType {
    type Listener = dyn VlmListener;

    const CATEGORY: Category = Category::Vlm;

    const ALL: &'static [Self] = &[
        VlmEventType::MediaAdded,
        VlmEventType::MediaRemoved,
        VlmEventType::MediaChanged,
        VlmEventType::MediaInstanceStarted,
        VlmEventType::MediaInstanceStopped,
        VlmEventType::MediaInstanceStatusInit,
        VlmEventType::MediaInstanceStatusOpening,
        VlmEventType::MediaInstanceStatusPlaying,
        VlmEventType::MediaInstanceStatusPause,
        VlmEventType::MediaInstanceStatusEnd,
        VlmEventType::MediaInstanceStatusError,
    ];

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            VlmEventType::MediaAdded => "VlmMediaAdded",
            VlmEventType::MediaRemoved => "VlmMediaRemoved",
            VlmEventType::MediaChanged => "VlmMediaChanged",
            VlmEventType::MediaInstanceStarted => "VlmMediaInstanceStarted",
            VlmEventType::MediaInstanceStopped => "VlmMediaInstanceStopped",
            VlmEventType::MediaInstanceStatusInit => "VlmMediaInstanceStatusInit",
            VlmEventType::MediaInstanceStatusOpening => "VlmMediaInstanceStatusOpening",
            VlmEventType::MediaInstanceStatusPlaying => "VlmMediaInstanceStatusPlaying",
            VlmEventType::MediaInstanceStatusPause => "VlmMediaInstanceStatusPause",
            VlmEventType::MediaInstanceStatusEnd => "VlmMediaInstanceStatusEnd",
            VlmEventType::MediaInstanceStatusError => "VlmMediaInstanceStatusError",
        }
    }

    fn trampoline() -> Trampoline {
        handlers::handle_vlm_event
    }
}
