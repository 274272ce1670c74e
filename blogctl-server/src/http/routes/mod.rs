//! HTTP route handlers

pub mod posts;
