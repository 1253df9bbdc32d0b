//! sea-orm entities for the sessions service.

pub mod retro_action_items;
pub mod session_members;
pub mod sessions;
pub mod stories;
pub mod users;
