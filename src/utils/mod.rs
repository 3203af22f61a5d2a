//! Shared helpers: text decoding and path formatting.

pub mod encoding;
pub mod paths;
