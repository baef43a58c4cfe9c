//! Rendering module for converting parsed output to serialized formats.

mod json;

pub use json::{from_json, to_json, JsonFormat};
