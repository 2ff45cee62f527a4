use crate::constants::MAX_DEPTH;

/// Decode-time policy knobs.
///
/// The pluggable scan hooks (numeric parsers, constant resolver, object
/// construction) live on [`crate::JsonDecoder`]; this struct carries only the
/// plain-data switches.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Reject raw (unescaped) control characters inside string literals.
    pub strict: bool,
    /// Maximum container nesting before decoding fails.
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: true,
            max_depth: MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Permit the non-standard `NaN`, `Infinity` and `-Infinity` literals on
    /// output. When false, formatting a special float fails instead.
    pub allow_nan: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_nan(mut self, allow_nan: bool) -> Self {
        self.allow_nan = allow_nan;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { allow_nan: true }
    }
}
