pub mod action_item;
pub mod member;
pub mod session;
pub mod story;
pub mod user;
