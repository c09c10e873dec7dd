//! Shared utilities

pub mod helpers;
