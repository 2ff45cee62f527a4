/// Default bound on container nesting during decoding.
///
/// The scanner is recursive, so unbounded nesting would translate directly
/// into unbounded stack growth on attacker-supplied input.
pub const MAX_DEPTH: usize = 256;

pub(crate) const NAN_TEXT: &str = "NaN";
pub(crate) const INFINITY_TEXT: &str = "Infinity";
pub(crate) const NEG_INFINITY_TEXT: &str = "-Infinity";

#[inline]
pub(crate) fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
pub(crate) fn skip_whitespace(input: &str, mut offset: usize) -> usize {
    let bytes = input.as_bytes();
    while offset < bytes.len() && is_json_whitespace(bytes[offset]) {
        offset += 1;
    }
    offset
}
