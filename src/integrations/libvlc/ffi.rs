// integrations/libvlc/ffi.rs
//
// Raw libvlc declarations used by the event bridge (libvlc/libvlc_events.h,
// libvlc/libvlc_media.h). Only the union members this crate reads are
// declared; every member starts at the union's base, so the partial union
// reads the same bytes as the full one.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_float, c_int, c_void};

pub enum libvlc_event_manager_t {}
pub enum libvlc_media_t {}

pub type libvlc_time_t = i64;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_meta_changed {
    pub meta_type: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_subitem_added {
    pub new_child: *mut libvlc_media_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_duration_changed {
    pub new_duration: i64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_parsed_changed {
    pub new_status: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_freed {
    pub md: *mut libvlc_media_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_state_changed {
    pub new_state: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_subitemtree_added {
    pub item: *mut libvlc_media_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_buffering {
    pub new_cache: c_float,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_position_changed {
    pub new_position: c_float,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_time_changed {
    pub new_time: libvlc_time_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_title_changed {
    pub new_title: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_seekable_changed {
    pub new_seekable: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_pausable_changed {
    pub new_pausable: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_scrambled_changed {
    pub new_scrambled: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_vout {
    pub new_count: c_int,
}

/// Shared by item_added, will_add_item, item_deleted and will_delete_item
#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_list_item {
    pub item: *mut libvlc_media_t,
    pub index: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_list_player_next_item_set {
    pub item: *mut libvlc_media_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_snapshot_taken {
    pub psz_filename: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_length_changed {
    pub new_length: libvlc_time_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct vlm_media_event {
    pub psz_media_name: *const c_char,
    pub psz_instance_name: *const c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_media_changed {
    pub new_media: *mut libvlc_media_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct media_player_es_changed {
    pub i_type: c_int,
    pub i_id: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union libvlc_event_u {
    pub media_meta_changed: media_meta_changed,
    pub media_subitem_added: media_subitem_added,
    pub media_duration_changed: media_duration_changed,
    pub media_parsed_changed: media_parsed_changed,
    pub media_freed: media_freed,
    pub media_state_changed: media_state_changed,
    pub media_subitemtree_added: media_subitemtree_added,
    pub media_player_buffering: media_player_buffering,
    pub media_player_position_changed: media_player_position_changed,
    pub media_player_time_changed: media_player_time_changed,
    pub media_player_title_changed: media_player_title_changed,
    pub media_player_seekable_changed: media_player_seekable_changed,
    pub media_player_pausable_changed: media_player_pausable_changed,
    pub media_player_scrambled_changed: media_player_scrambled_changed,
    pub media_player_vout: media_player_vout,
    pub media_list_item: media_list_item,
    pub media_list_player_next_item_set: media_list_player_next_item_set,
    pub media_player_snapshot_taken: media_player_snapshot_taken,
    pub media_player_length_changed: media_player_length_changed,
    pub vlm_media_event: vlm_media_event,
    pub media_player_media_changed: media_player_media_changed,
    pub media_player_es_changed: media_player_es_changed,
}

#[repr(C)]
pub struct libvlc_event_t {
    pub type_: c_int,
    pub p_obj: *mut c_void,
    pub u: libvlc_event_u,
}

pub type libvlc_callback_t =
    Option<unsafe extern "C" fn(p_event: *const libvlc_event_t, p_data: *mut c_void)>;

#[link(name = "vlc")]
extern "C" {
    /// Returns 0 on success, ENOMEM on error
    pub fn libvlc_event_attach(
        p_event_manager: *mut libvlc_event_manager_t,
        i_event_type: c_int,
        f_callback: libvlc_callback_t,
        user_data: *mut c_void,
    ) -> c_int;

    pub fn libvlc_event_detach(
        p_event_manager: *mut libvlc_event_manager_t,
        i_event_type: c_int,
        f_callback: libvlc_callback_t,
        p_user_data: *mut c_void,
    );

    pub fn libvlc_media_retain(p_md: *mut libvlc_media_t);

    pub fn libvlc_media_release(p_md: *mut libvlc_media_t);
}
