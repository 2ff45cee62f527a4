use crate::decode::context::ScanContext;
use crate::error::ScanError;
use crate::value::Value;

/// Match a numeric literal at `offset` against the grammar
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
///
/// Returns `Ok(None)` when no integer part is present, which the dispatcher
/// treats as "no token recognized here". The matched substring is handed to
/// the context's float or integer parser depending on whether a fraction or
/// exponent was consumed; the scanner itself never fails on magnitude.
///
/// A dangling exponent marker (`1e`, `1e+`) is not an error: the attempt is
/// rolled back to the `e` and the digits before it form the complete match,
/// leaving the marker unconsumed for the caller.
pub(crate) fn scan_number(
    ctx: &ScanContext<'_>,
    input: &str,
    offset: usize,
) -> Result<Option<(Value, usize)>, ScanError> {
    let bytes = input.as_bytes();
    let mut idx = offset;
    let mut is_float = false;

    if bytes.get(idx) == Some(&b'-') {
        idx += 1;
    }

    match bytes.get(idx) {
        Some(b'1'..=b'9') => {
            idx += 1;
            while matches!(bytes.get(idx), Some(b'0'..=b'9')) {
                idx += 1;
            }
        }
        Some(b'0') => {
            // A leading zero takes no further integer digits; `01` stops
            // after the `0` and leaves the rest for the caller.
            idx += 1;
        }
        _ => return Ok(None),
    }

    if bytes.get(idx) == Some(&b'.') && matches!(bytes.get(idx + 1), Some(b'0'..=b'9')) {
        is_float = true;
        idx += 2;
        while matches!(bytes.get(idx), Some(b'0'..=b'9')) {
            idx += 1;
        }
    }

    if matches!(bytes.get(idx), Some(b'e') | Some(b'E')) {
        let exponent_start = idx;
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+') | Some(b'-')) {
            idx += 1;
        }
        let digits_start = idx;
        while matches!(bytes.get(idx), Some(b'0'..=b'9')) {
            idx += 1;
        }
        if idx > digits_start {
            is_float = true;
        } else {
            idx = exponent_start;
        }
    }

    let literal = &input[offset..idx];
    let parsed = if is_float {
        (ctx.parse_float)(literal)
    } else {
        (ctx.parse_int)(literal)
    };
    match parsed {
        Ok(value) => Ok(Some((value, idx))),
        Err(error) => Err(ScanError::hook(error, offset)),
    }
}
