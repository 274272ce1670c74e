//! Command implementations for blogctl CLI

pub mod serve;

pub use serve::run_serve;
