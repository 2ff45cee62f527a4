use memchr::memchr2;

use crate::error::{ErrorKind, ScanError};

const HIGH_SURROGATE_START: u32 = 0xD800;
const HIGH_SURROGATE_END: u32 = 0xDBFF;
const LOW_SURROGATE_START: u32 = 0xDC00;
const LOW_SURROGATE_END: u32 = 0xDFFF;

#[inline]
pub(crate) fn is_high_surrogate(code: u32) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&code)
}

#[inline]
pub(crate) fn is_low_surrogate(code: u32) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&code)
}

/// Combine a UTF-16 surrogate pair into the supplementary code point.
/// Callers must have classified both halves first.
#[inline]
pub(crate) fn combine_surrogates(high: u32, low: u32) -> u32 {
    0x10000 + (((high - HIGH_SURROGATE_START) << 10) | (low - LOW_SURROGATE_START))
}

/// Scan a quoted JSON string literal.
///
/// `offset` is the index of the character after the opening quote. Returns
/// the decoded string and the index after the closing quote. In strict mode
/// raw control characters (0x00-0x1F) inside the literal are rejected; in
/// relaxed mode they are preserved verbatim.
pub(crate) fn scan_string(
    input: &str,
    offset: usize,
    strict: bool,
) -> Result<(String, usize), ScanError> {
    let bytes = input.as_bytes();
    let opening = offset.saturating_sub(1);
    let mut output = String::new();
    let mut pos = offset;

    loop {
        // The next terminator is the closing quote or a backslash; everything
        // before it is an unescaped run. Control bytes never occur in
        // multi-byte UTF-8 sequences, so byte-wise search is safe here.
        let terminator = match memchr2(b'"', b'\\', &bytes[pos..]) {
            Some(relative) => pos + relative,
            None => return Err(ScanError::at(ErrorKind::UnterminatedString, opening)),
        };

        let run = &bytes[pos..terminator];
        if strict {
            if let Some(bad) = run.iter().position(|&b| b < 0x20) {
                return Err(ScanError::at(ErrorKind::InvalidControlCharacter, pos + bad));
            }
        }
        output.push_str(&input[pos..terminator]);

        if bytes[terminator] == b'"' {
            return Ok((output, terminator + 1));
        }

        // Backslash: the next character selects the escape.
        let selector = terminator + 1;
        let Some(&esc) = bytes.get(selector) else {
            return Err(ScanError::at(ErrorKind::UnterminatedString, opening));
        };
        if esc != b'u' {
            let unescaped = match esc {
                b'"' => '"',
                b'\\' => '\\',
                b'/' => '/',
                b'b' => '\u{8}',
                b'f' => '\u{c}',
                b'n' => '\n',
                b'r' => '\r',
                b't' => '\t',
                _ => return Err(ScanError::at(ErrorKind::InvalidEscape, selector)),
            };
            output.push(unescaped);
            pos = selector + 1;
            continue;
        }

        let Some(code) = parse_hex4(bytes, selector + 1) else {
            return Err(ScanError::at(ErrorKind::InvalidUnicodeEscape, selector));
        };
        let mut next = selector + 5;
        let code = if is_high_surrogate(code) {
            let follows_escape = bytes.get(next) == Some(&b'\\') && bytes.get(next + 1) == Some(&b'u');
            let low = if follows_escape {
                parse_hex4(bytes, next + 2).filter(|&lo| is_low_surrogate(lo))
            } else {
                None
            };
            match low {
                Some(low) => {
                    next += 6;
                    combine_surrogates(code, low)
                }
                None => return Err(ScanError::at(ErrorKind::InvalidSurrogatePair, selector)),
            }
        } else if is_low_surrogate(code) {
            return Err(ScanError::at(ErrorKind::InvalidSurrogatePair, selector));
        } else {
            code
        };

        match char::from_u32(code) {
            Some(ch) => output.push(ch),
            None => return Err(ScanError::at(ErrorKind::InvalidUnicodeEscape, selector)),
        }
        pos = next;
    }
}

fn parse_hex4(bytes: &[u8], start: usize) -> Option<u32> {
    if start + 4 > bytes.len() {
        return None;
    }
    let mut code = 0u32;
    for &byte in &bytes[start..start + 4] {
        let digit = (byte as char).to_digit(16)?;
        code = (code << 4) | digit;
    }
    Some(code)
}
