pub(crate) mod context;
pub(crate) mod number;
pub(crate) mod scanner;
pub(crate) mod string;

use smol_str::SmolStr;

use crate::constants::skip_whitespace;
use crate::decode::context::{
    default_parse_constant, default_parse_float, default_parse_int, ConstantParse, NumberParse,
    ObjectHook, PairsHook, ScanContext,
};
use crate::error::{Error, ErrorKind, ScanError};
use crate::options::DecodeOptions;
use crate::value::{Map, Value};
use crate::Result;

/// Reusable decoder carrying the full bundle of scan policies.
///
/// The defaults decode standard JSON plus the `NaN`/`Infinity`/`-Infinity`
/// literals into [`Value`]; every policy can be swapped out, e.g. to route
/// numeric literals into a decimal type or to build objects through a hook.
///
/// ```
/// use jsontext::JsonDecoder;
///
/// let decoder = JsonDecoder::new();
/// let value = decoder.decode(r#"{"pi": 3.14}"#).unwrap();
/// assert_eq!(value["pi"].as_f64(), Some(3.14));
/// ```
pub struct JsonDecoder {
    options: DecodeOptions,
    parse_int: Box<NumberParse>,
    parse_float: Box<NumberParse>,
    parse_constant: Box<ConstantParse>,
    object_pairs_hook: Option<Box<PairsHook>>,
    object_hook: Option<Box<ObjectHook>>,
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            options,
            parse_int: Box::new(default_parse_int),
            parse_float: Box::new(default_parse_float),
            parse_constant: Box::new(default_parse_constant),
            object_pairs_hook: None,
            object_hook: None,
        }
    }

    /// Replace the parser applied to integer-spelled literals.
    pub fn with_parse_int(
        mut self,
        parse: impl Fn(&str) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_int = Box::new(parse);
        self
    }

    /// Replace the parser applied to float-spelled literals.
    pub fn with_parse_float(
        mut self,
        parse: impl Fn(&str) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_float = Box::new(parse);
        self
    }

    /// Replace the resolver for `NaN`, `Infinity` and `-Infinity`.
    pub fn with_parse_constant(
        mut self,
        parse: impl Fn(&str) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_constant = Box::new(parse);
        self
    }

    /// Build objects from their key/value pairs in scan order. Takes
    /// precedence over [`JsonDecoder::with_object_hook`] when both are set.
    pub fn with_object_pairs_hook(
        mut self,
        hook: impl Fn(Vec<(SmolStr, Value)>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.object_pairs_hook = Some(Box::new(hook));
        self
    }

    /// Post-process each decoded object map.
    pub fn with_object_hook(
        mut self,
        hook: impl Fn(Map) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.object_hook = Some(Box::new(hook));
        self
    }

    /// Decode exactly one document. Surrounding whitespace is permitted;
    /// any other trailing input is an error.
    pub fn decode(&self, input: &str) -> Result<Value> {
        let mut ctx = self.scan_context();
        let start = skip_whitespace(input, 0);
        let result = scanner::scan_value(&mut ctx, input, start);
        ctx.clear_memo();
        let (value, end) = result.map_err(|err| err.into_error(input))?;
        let end = skip_whitespace(input, end);
        if end != input.len() {
            return Err(ScanError::at(ErrorKind::TrailingCharacters, end).into_error(input));
        }
        Ok(value)
    }

    /// Scan one value starting at `offset`, returning it together with the
    /// offset just past the consumed token. Supports JSON embedded in a
    /// larger text; leading whitespace is not skipped and trailing input is
    /// left untouched.
    pub fn scan(&self, input: &str, offset: usize) -> Result<(Value, usize)> {
        let mut ctx = self.scan_context();
        let result = scanner::scan_value(&mut ctx, input, offset);
        ctx.clear_memo();
        result.map_err(|err| err.into_error(input))
    }

    pub(crate) fn scan_context(&self) -> ScanContext<'_> {
        ScanContext::new(
            &self.options,
            self.parse_int.as_ref(),
            self.parse_float.as_ref(),
            self.parse_constant.as_ref(),
            self.object_pairs_hook.as_deref(),
            self.object_hook.as_deref(),
        )
    }
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn from_str(input: &str, options: &DecodeOptions) -> Result<Value> {
    JsonDecoder::with_options(options.clone()).decode(input)
}

pub fn from_slice(input: &[u8], options: &DecodeOptions) -> Result<Value> {
    let text = std::str::from_utf8(input)
        .map_err(|err| Error::custom(format!("invalid utf-8: {err}")))?;
    from_str(text, options)
}
