//! Turns the project model into the compiler configurations that the user can select
pub mod flags;
pub mod registry;
