//! Outline serialization.

mod json;

pub use json::{from_json, to_json, to_json_value, JsonFormat};
