pub(crate) mod float;

pub use float::format_float;

use crate::options::EncodeOptions;
use crate::value::Value;
use crate::Result;

/// Serialize a value tree as compact single-line JSON.
///
/// Special floats follow the `allow_nan` policy of [`EncodeOptions`];
/// everything else is standard JSON with `,` and `: ` separators and no
/// indentation.
pub fn to_string(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, value, options)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, options: &EncodeOptions) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(*n));
        }
        Value::Float(f) => out.push_str(&format_float(*f, options.allow_nan)?),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value(out, item, options)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (idx, (key, item)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_value(out, item, options)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Append `value` as a quoted JSON string literal. Escapes are kept to the
/// minimum the grammar requires: quote, backslash, and control characters;
/// everything else passes through as UTF-8.
pub(crate) fn write_quoted(out: &mut String, value: &str) {
    out.push('"');
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        let escape = match byte {
            b'"' => Some("\\\""),
            b'\\' => Some("\\\\"),
            0x08 => Some("\\b"),
            0x0c => Some("\\f"),
            b'\n' => Some("\\n"),
            b'\r' => Some("\\r"),
            b'\t' => Some("\\t"),
            _ => None,
        };
        let replacement = match escape {
            Some(text) => text.to_string(),
            None if byte < 0x20 => format!("\\u{byte:04x}"),
            None => continue,
        };
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        out.push_str(&replacement);
        start = idx + 1;
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
    out.push('"');
}
