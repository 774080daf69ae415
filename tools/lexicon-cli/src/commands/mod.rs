//! Command implementations.

pub mod add;
pub mod get;
pub mod list;
pub mod open;
pub mod remove;
