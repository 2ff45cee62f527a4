use crate::constants::{INFINITY_TEXT, NAN_TEXT, NEG_INFINITY_TEXT};
use crate::error::Error;
use crate::Result;

/// Format an IEEE-754 double as JSON text.
///
/// Finite values take the shortest representation that round-trips through
/// the decoder. The specials map to the `NaN`, `Infinity` and `-Infinity`
/// literals, unless `allow_nan` is false, in which case they are rejected:
/// strict output is configured independently of whether the decoder accepts
/// the same three tokens.
pub fn format_float(value: f64, allow_nan: bool) -> Result<String> {
    if value.is_nan() || value.is_infinite() {
        if !allow_nan {
            return Err(Error::non_compliant_float(value));
        }
        let text = if value.is_nan() {
            NAN_TEXT
        } else if value == f64::INFINITY {
            INFINITY_TEXT
        } else {
            NEG_INFINITY_TEXT
        };
        return Ok(text.to_string());
    }

    let mut buffer = ryu::Buffer::new();
    Ok(buffer.format_finite(value).to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::ErrorKind;

    #[rstest]
    #[case(f64::NAN, "NaN")]
    #[case(f64::INFINITY, "Infinity")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    fn test_specials_allowed(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_float(value, true).unwrap(), expected);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_specials_rejected_when_strict(#[case] value: f64) {
        let err = format_float(value, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NonCompliantFloat);
    }

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(1.5, "1.5")]
    #[case(-2.25, "-2.25")]
    #[case(3.141592653589793, "3.141592653589793")]
    fn test_finite_values(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_float(value, true).unwrap(), expected);
        assert_eq!(format_float(value, false).unwrap(), expected);
    }

    #[rstest]
    fn test_finite_round_trips() {
        for value in [1.0e300, 5.0e-324, 0.1, 123456.789, -1.5e10] {
            let text = format_float(value, false).unwrap();
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }
}
