// events/testing.rs
//
// Test helpers: a listener that implements every category trait and writes
// each call down as a string, e.g. "player.time_changed(1500)".

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{Media, MediaState, MetaType, TrackType};
use crate::events::listeners::{
    MediaDiscovererListener, MediaListListener, MediaListPlayerListener, MediaListener,
    MediaPlayerListener, VlmListener,
};

#[derive(Default)]
pub(crate) struct Recorder {
    calls: Mutex<Vec<String>>,
    /// Clones of media received, when `keep_media` is set
    kept: Mutex<Vec<Media>>,
    keep_media: bool,
}

impl Recorder {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A recorder that clones every media it is handed
    pub(crate) fn keeping_media() -> Arc<Self> {
        Arc::new(Self {
            keep_media: true,
            ..Self::default()
        })
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn drop_kept_media(&self) {
        self.kept.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn media(&self, media: &Media) -> String {
        if self.keep_media {
            self.kept
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(media.clone());
        }
        format!("{:#x}", media.handle().as_raw())
    }
}

impl MediaListener for Recorder {
    fn meta_changed(&self, meta_type: MetaType) {
        self.record(format!("media.meta_changed({:?})", meta_type));
    }
    fn sub_item_added(&self, media: &Media) {
        let handle = self.media(media);
        self.record(format!("media.sub_item_added({})", handle));
    }
    fn duration_changed(&self, duration: i64) {
        self.record(format!("media.duration_changed({})", duration));
    }
    fn parsed_changed(&self, parsed: bool) {
        self.record(format!("media.parsed_changed({})", parsed));
    }
    fn freed(&self, media: &Media) {
        let handle = self.media(media);
        self.record(format!("media.freed({})", handle));
    }
    fn state_changed(&self, state: MediaState) {
        self.record(format!("media.state_changed({:?})", state));
    }
    fn sub_item_tree_added(&self, media: &Media) {
        let handle = self.media(media);
        self.record(format!("media.sub_item_tree_added({})", handle));
    }
}

impl MediaPlayerListener for Recorder {
    fn media_changed(&self, media: &Media) {
        let handle = self.media(media);
        self.record(format!("player.media_changed({})", handle));
    }
    fn nothing_special(&self) {
        self.record("player.nothing_special".into());
    }
    fn opening(&self) {
        self.record("player.opening".into());
    }
    fn buffering(&self, cache: f32) {
        self.record(format!("player.buffering({})", cache));
    }
    fn playing(&self) {
        self.record("player.playing".into());
    }
    fn paused(&self) {
        self.record("player.paused".into());
    }
    fn stopped(&self) {
        self.record("player.stopped".into());
    }
    fn forward(&self) {
        self.record("player.forward".into());
    }
    fn backward(&self) {
        self.record("player.backward".into());
    }
    fn end_reached(&self) {
        self.record("player.end_reached".into());
    }
    fn encountered_error(&self) {
        self.record("player.encountered_error".into());
    }
    fn time_changed(&self, time: i64) {
        self.record(format!("player.time_changed({})", time));
    }
    fn position_changed(&self, position: f32) {
        self.record(format!("player.position_changed({})", position));
    }
    fn seekable_changed(&self, seekable: bool) {
        self.record(format!("player.seekable_changed({})", seekable));
    }
    fn pausable_changed(&self, pausable: bool) {
        self.record(format!("player.pausable_changed({})", pausable));
    }
    fn title_changed(&self, title: i32) {
        self.record(format!("player.title_changed({})", title));
    }
    fn snapshot_taken(&self, path: &str) {
        self.record(format!("player.snapshot_taken({:?})", path));
    }
    fn length_changed(&self, length: i64) {
        self.record(format!("player.length_changed({})", length));
    }
    fn vout(&self, count: i32) {
        self.record(format!("player.vout({})", count));
    }
    fn scrambled_changed(&self, scrambled: i32) {
        self.record(format!("player.scrambled_changed({})", scrambled));
    }
    fn es_added(&self, track_type: TrackType, id: i32) {
        self.record(format!("player.es_added({:?}, {})", track_type, id));
    }
    fn es_deleted(&self, track_type: TrackType, id: i32) {
        self.record(format!("player.es_deleted({:?}, {})", track_type, id));
    }
    fn es_selected(&self, track_type: TrackType, id: i32) {
        self.record(format!("player.es_selected({:?}, {})", track_type, id));
    }
}

impl MediaListListener for Recorder {
    fn item_added(&self, media: &Media, index: i32) {
        let handle = self.media(media);
        self.record(format!("list.item_added({}, {})", handle, index));
    }
    fn will_add_item(&self, media: &Media, index: i32) {
        let handle = self.media(media);
        self.record(format!("list.will_add_item({}, {})", handle, index));
    }
    fn item_deleted(&self, media: &Media, index: i32) {
        let handle = self.media(media);
        self.record(format!("list.item_deleted({}, {})", handle, index));
    }
    fn will_delete_item(&self, media: &Media, index: i32) {
        let handle = self.media(media);
        self.record(format!("list.will_delete_item({}, {})", handle, index));
    }
}

impl MediaListPlayerListener for Recorder {
    fn played(&self) {
        self.record("list_player.played".into());
    }
    fn next_item_set(&self, media: &Media) {
        let handle = self.media(media);
        self.record(format!("list_player.next_item_set({})", handle));
    }
    fn stopped(&self) {
        self.record("list_player.stopped".into());
    }
}

impl MediaDiscovererListener for Recorder {
    fn started(&self) {
        self.record("discoverer.started".into());
    }
    fn stopped(&self) {
        self.record("discoverer.stopped".into());
    }
}

impl VlmListener for Recorder {
    fn media_added(&self, media_name: &str) {
        self.record(format!("vlm.media_added({:?})", media_name));
    }
    fn media_removed(&self, media_name: &str) {
        self.record(format!("vlm.media_removed({:?})", media_name));
    }
    fn media_changed(&self, media_name: &str) {
        self.record(format!("vlm.media_changed({:?})", media_name));
    }
    fn media_instance_started(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.instance_started({:?}, {:?})", instance_name, media_name));
    }
    fn media_instance_stopped(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.instance_stopped({:?}, {:?})", instance_name, media_name));
    }
    fn media_instance_status_init(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.status_init({:?}, {:?})", instance_name, media_name));
    }
    fn media_instance_status_opening(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.status_opening({:?}, {:?})", instance_name, media_name));
    }
    fn media_instance_status_playing(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.status_playing({:?}, {:?})", instance_name, media_name));
    }
    fn media_instance_status_pause(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.status_pause({:?}, {:?})", instance_name, media_name));
    }
    fn media_instance_status_end(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.status_end({:?}, {:?})", instance_name, media_name));
    }
    fn media_instance_status_error(&self, instance_name: &str, media_name: &str) {
        self.record(format!("vlm.status_error({:?}, {:?})", instance_name, media_name));
    }
}
