// src/error/types.rs
use thiserror::Error;

use crate::events::types::Category;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EventError {
    #[error("Event type code {code:#x} does not belong to the {category} category")]
    UnknownEventType { category: Category, code: i32 },

    #[error("{event} delivered with a {payload} payload")]
    PayloadMismatch {
        event: &'static str,
        payload: &'static str,
    },

    #[error("{event} carried an invalid {field} value: {value}")]
    InvalidValue {
        event: &'static str,
        field: &'static str,
        value: i32,
    },

    #[error("Listener context does not hold a {category} listener")]
    ListenerTypeMismatch { category: Category },

    #[error("Engine rejected subscription to {event} (code {code:#x})")]
    AttachRejected { event: &'static str, code: i32 },

    #[error("Engine is no longer available")]
    EngineUnavailable,
}

impl EventError {
    /// The engine and this layer disagree about the event space
    pub fn is_protocol_violation(&self) -> bool {
        !matches!(
            self,
            EventError::AttachRejected { .. } | EventError::EngineUnavailable
        )
    }
}

pub type EventResult<T> = Result<T, EventError>;
