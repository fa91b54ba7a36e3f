// domain/values.rs
//
// Enumerated payload values carried by libvlc events.
//
// Conversions from the engine's raw integers are fallible: a value outside
// the enum is reported back as the raw integer so the caller can decide how
// loudly to complain.

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

/// libvlc_meta_t
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MetaType {
    Title = 0,
    Artist = 1,
    Genre = 2,
    Copyright = 3,
    Album = 4,
    TrackNumber = 5,
    Description = 6,
    Rating = 7,
    Date = 8,
    Setting = 9,
    Url = 10,
    Language = 11,
    NowPlaying = 12,
    Publisher = 13,
    EncodedBy = 14,
    ArtworkUrl = 15,
    TrackId = 16,
    TrackTotal = 17,
    Director = 18,
    Season = 19,
    Episode = 20,
    ShowName = 21,
    Actors = 22,
    AlbumArtist = 23,
    DiscNumber = 24,
    DiscTotal = 25,
}

impl MetaType {
    pub const ALL: [MetaType; 26] = [
        MetaType::Title,
        MetaType::Artist,
        MetaType::Genre,
        MetaType::Copyright,
        MetaType::Album,
        MetaType::TrackNumber,
        MetaType::Description,
        MetaType::Rating,
        MetaType::Date,
        MetaType::Setting,
        MetaType::Url,
        MetaType::Language,
        MetaType::NowPlaying,
        MetaType::Publisher,
        MetaType::EncodedBy,
        MetaType::ArtworkUrl,
        MetaType::TrackId,
        MetaType::TrackTotal,
        MetaType::Director,
        MetaType::Season,
        MetaType::Episode,
        MetaType::ShowName,
        MetaType::Actors,
        MetaType::AlbumArtist,
        MetaType::DiscNumber,
        MetaType::DiscTotal,
    ];
}

impl TryFrom<i32> for MetaType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        MetaType::ALL
            .into_iter()
            .find(|meta| *meta as i32 == value)
            .ok_or(value)
    }
}

/// libvlc_state_t
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MediaState {
    NothingSpecial = 0,
    Opening = 1,
    Buffering = 2,
    Playing = 3,
    Paused = 4,
    Stopped = 5,
    Ended = 6,
    Error = 7,
}

impl TryFrom<i32> for MediaState {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        match value {
            0 => Ok(MediaState::NothingSpecial),
            1 => Ok(MediaState::Opening),
            2 => Ok(MediaState::Buffering),
            3 => Ok(MediaState::Playing),
            4 => Ok(MediaState::Paused),
            5 => Ok(MediaState::Stopped),
            6 => Ok(MediaState::Ended),
            7 => Ok(MediaState::Error),
            other => Err(other),
        }
    }
}

/// libvlc_track_type_t
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum TrackType {
    Unknown = -1,
    Audio = 0,
    Video = 1,
    Text = 2,
}

impl TryFrom<i32> for TrackType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        match value {
            -1 => Ok(TrackType::Unknown),
            0 => Ok(TrackType::Audio),
            1 => Ok(TrackType::Video),
            2 => Ok(TrackType::Text),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_type_matches_libvlc_numbering() {
        for (index, meta) in MetaType::ALL.into_iter().enumerate() {
            assert_eq!(meta as i32, index as i32);
            assert_eq!(MetaType::try_from(index as i32), Ok(meta));
        }
        assert_eq!(MetaType::try_from(26), Err(26));
        assert_eq!(MetaType::try_from(-1), Err(-1));
    }

    #[test]
    fn test_media_state_conversion() {
        assert_eq!(MediaState::try_from(3), Ok(MediaState::Playing));
        assert_eq!(MediaState::try_from(7), Ok(MediaState::Error));
        assert_eq!(MediaState::try_from(8), Err(8));
    }

    #[test]
    fn test_track_type_accepts_unknown() {
        assert_eq!(TrackType::try_from(-1), Ok(TrackType::Unknown));
        assert_eq!(TrackType::try_from(2), Ok(TrackType::Text));
        assert_eq!(TrackType::try_from(3), Err(3));
    }
}
