//! Parsing of extension metadata

pub mod manifest;

pub use manifest::{parse_extension_manifest, read_extension_manifest};
