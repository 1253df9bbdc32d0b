//! Shared plumbing for Huddle services: tracing init and serde helpers.

pub mod serde;
pub mod tracing;
