//! HTTP route handlers.

pub mod frontend;
pub mod health;
pub mod import;
pub mod menu;
