//! Core data models for packaging runs

pub mod config;
pub mod error;
pub mod manifest;
pub mod outcome;

pub use config::*;
pub use error::*;
pub use manifest::*;
pub use outcome::*;
