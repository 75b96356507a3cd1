pub mod commands;
pub mod flags;
pub mod platform;
pub mod target;
