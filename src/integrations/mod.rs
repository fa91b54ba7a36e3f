// integrations/mod.rs
//
// Engine integrations
//
// - engine: the boundary trait and opaque handles
// - simulated: in-process engine (no native library needed)
// - libvlc: native backend, behind the `libvlc` feature

pub mod engine;
pub mod simulated;

#[cfg(feature = "libvlc")]
pub mod libvlc;

pub use engine::{Engine, EventSource, MediaHandle};
pub use simulated::SimulatedEngine;

#[cfg(feature = "libvlc")]
pub use libvlc::LibVlcEngine;
