// integrations/libvlc/mod.rs
//
// Native backend. Built with the `libvlc` feature; links against libvlc.

mod engine;
pub mod ffi;

pub use engine::LibVlcEngine;
