use smol_str::SmolStr;

use crate::constants::{skip_whitespace, INFINITY_TEXT, NAN_TEXT, NEG_INFINITY_TEXT};
use crate::decode::context::ScanContext;
use crate::decode::number::scan_number;
use crate::decode::string::scan_string;
use crate::error::{ErrorKind, ScanError};
use crate::value::{Map, Value};

/// Recursive-descent entry point: scan one value at `offset` and return it
/// with the offset just past the consumed token.
///
/// Dispatch is driven by the lookahead byte; literal prefixes are matched by
/// exact substring, and anything unrecognized falls through to the number
/// scanner. When that also finds nothing the position holds no token at all
/// and the failure is `ExpectingValue`.
pub(crate) fn scan_value(
    ctx: &mut ScanContext<'_>,
    input: &str,
    offset: usize,
) -> Result<(Value, usize), ScanError> {
    let Some(&lookahead) = input.as_bytes().get(offset) else {
        return Err(ScanError::at(ErrorKind::ExpectingValue, offset));
    };

    match lookahead {
        b'"' => {
            let (string, end) = scan_string(input, offset + 1, ctx.strict)?;
            Ok((Value::String(string), end))
        }
        b'{' => scan_object(ctx, input, offset),
        b'[' => scan_array(ctx, input, offset),
        b'n' if input[offset..].starts_with("null") => Ok((Value::Null, offset + 4)),
        b't' if input[offset..].starts_with("true") => Ok((Value::Bool(true), offset + 4)),
        b'f' if input[offset..].starts_with("false") => Ok((Value::Bool(false), offset + 5)),
        b'N' if input[offset..].starts_with(NAN_TEXT) => {
            scan_constant(ctx, NAN_TEXT, offset)
        }
        b'I' if input[offset..].starts_with(INFINITY_TEXT) => {
            scan_constant(ctx, INFINITY_TEXT, offset)
        }
        b'-' if input[offset..].starts_with(NEG_INFINITY_TEXT) => {
            scan_constant(ctx, NEG_INFINITY_TEXT, offset)
        }
        _ => match scan_number(ctx, input, offset)? {
            Some(matched) => Ok(matched),
            None => Err(ScanError::at(ErrorKind::ExpectingValue, offset)),
        },
    }
}

fn scan_constant(
    ctx: &ScanContext<'_>,
    literal: &'static str,
    offset: usize,
) -> Result<(Value, usize), ScanError> {
    match (ctx.parse_constant)(literal) {
        Ok(value) => Ok((value, offset + literal.len())),
        Err(error) => Err(ScanError::hook(error, offset)),
    }
}

/// Parse `{ "key": value, ... }` starting at the opening brace.
fn scan_object(
    ctx: &mut ScanContext<'_>,
    input: &str,
    offset: usize,
) -> Result<(Value, usize), ScanError> {
    enter(ctx, offset)?;
    let bytes = input.as_bytes();
    let mut pairs: Vec<(SmolStr, Value)> = Vec::new();
    let mut pos = skip_whitespace(input, offset + 1);

    if bytes.get(pos) == Some(&b'}') {
        pos += 1;
    } else {
        loop {
            if bytes.get(pos) != Some(&b'"') {
                return Err(ScanError::at(ErrorKind::ExpectingPropertyName, pos));
            }
            let (key_text, after_key) = scan_string(input, pos + 1, ctx.strict)?;
            let key = ctx.intern_key(key_text);

            pos = skip_whitespace(input, after_key);
            if bytes.get(pos) != Some(&b':') {
                return Err(ScanError::at(ErrorKind::ExpectingDelimiter(':'), pos));
            }
            pos = skip_whitespace(input, pos + 1);

            let (value, after_value) = scan_value(ctx, input, pos)?;
            pairs.push((key, value));

            pos = skip_whitespace(input, after_value);
            match bytes.get(pos) {
                Some(&b'}') => {
                    pos += 1;
                    break;
                }
                Some(&b',') => pos = skip_whitespace(input, pos + 1),
                _ => return Err(ScanError::at(ErrorKind::ExpectingDelimiter(','), pos)),
            }
        }
    }

    ctx.depth -= 1;
    Ok((build_object(ctx, pairs), pos))
}

/// Construct the object value through the configured hook. The pairs hook
/// takes precedence over the object hook; with neither set the pairs land in
/// an insertion-ordered map where a repeated key keeps its first position
/// and its last value.
fn build_object(ctx: &ScanContext<'_>, pairs: Vec<(SmolStr, Value)>) -> Value {
    if let Some(pairs_hook) = ctx.object_pairs_hook {
        return pairs_hook(pairs);
    }
    let mut map = Map::with_capacity(pairs.len());
    for (key, value) in pairs {
        map.insert(key, value);
    }
    if let Some(object_hook) = ctx.object_hook {
        return object_hook(map);
    }
    Value::Object(map)
}

/// Parse `[ value, ... ]` starting at the opening bracket.
fn scan_array(
    ctx: &mut ScanContext<'_>,
    input: &str,
    offset: usize,
) -> Result<(Value, usize), ScanError> {
    enter(ctx, offset)?;
    let bytes = input.as_bytes();
    let mut items = Vec::new();
    let mut pos = skip_whitespace(input, offset + 1);

    if bytes.get(pos) == Some(&b']') {
        pos += 1;
    } else {
        loop {
            let (value, after_value) = scan_value(ctx, input, pos)?;
            items.push(value);

            pos = skip_whitespace(input, after_value);
            match bytes.get(pos) {
                Some(&b']') => {
                    pos += 1;
                    break;
                }
                Some(&b',') => pos = skip_whitespace(input, pos + 1),
                _ => return Err(ScanError::at(ErrorKind::ExpectingDelimiter(','), pos)),
            }
        }
    }

    ctx.depth -= 1;
    Ok((Value::Array(items), pos))
}

fn enter(ctx: &mut ScanContext<'_>, offset: usize) -> Result<(), ScanError> {
    if ctx.depth >= ctx.max_depth {
        return Err(ScanError::at(ErrorKind::DepthLimitExceeded, offset));
    }
    ctx.depth += 1;
    Ok(())
}
