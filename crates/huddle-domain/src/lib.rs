//! Domain types shared across the Huddle workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/`.

pub mod id;
pub mod pagination;
pub mod session;
