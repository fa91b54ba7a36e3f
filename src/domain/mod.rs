// domain/mod.rs
//
// Values that flow through listener methods.

pub mod media;
pub mod values;

pub use media::{Media, Ownership};
pub use values::{MediaState, MetaType, TrackType};
