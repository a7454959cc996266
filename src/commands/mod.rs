//! Command implementations

pub mod get;
pub mod serve;
