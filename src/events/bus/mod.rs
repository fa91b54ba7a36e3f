// events/bus/mod.rs
//
// Subscription front-end and its configuration.

pub mod config;
pub mod dispatch_log;
pub mod event_manager;


pub use config::{EventManagerConfig, ViolationPolicy};
pub use dispatch_log::{DispatchLog, DispatchLogEntry, DEFAULT_DISPATCH_LOG_CAPACITY};
pub use event_manager::EventManager;
