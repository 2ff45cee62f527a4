//! JSON text codec built around a hand-written recursive scanner.
//!
//! The decoder turns one JSON document into a [`Value`] tree and supports
//! the non-standard `NaN`, `Infinity` and `-Infinity` literals, pluggable
//! numeric parsers, object-construction hooks, and a strict-mode switch for
//! raw control characters inside strings. The encode side provides the
//! matching float formatter plus a compact writer for whole trees.

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

pub use crate::decode::JsonDecoder;
pub use crate::encode::format_float;
pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::{DecodeOptions, EncodeOptions};
pub use crate::value::{Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_str(input: &str) -> Result<Value> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    decode::from_str(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<Value> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &DecodeOptions) -> Result<Value> {
    decode::from_slice(input, options)
}

pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, &EncodeOptions::default())
}

pub fn to_string_with_options(value: &Value, options: &EncodeOptions) -> Result<String> {
    encode::to_string(value, options)
}
