//! Core domain layer: entities, the registry trait, and the event sink.

pub mod entities;
pub mod log_event;
pub mod log_worker;
pub mod repositories;
