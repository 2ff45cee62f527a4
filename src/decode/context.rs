use std::collections::HashMap;

use smol_str::SmolStr;

use crate::error::Error;
use crate::options::DecodeOptions;
use crate::value::{Map, Value};

/// Parser applied to a matched numeric literal (integer or float spelling).
pub type NumberParse = dyn Fn(&str) -> Result<Value, Error> + Send + Sync;

/// Resolver for the `NaN`, `Infinity` and `-Infinity` literals. Receives the
/// exact literal text and may reject it with an error.
pub type ConstantParse = dyn Fn(&str) -> Result<Value, Error> + Send + Sync;

/// Object construction from the decoded key/value pairs in scan order.
pub type PairsHook = dyn Fn(Vec<(SmolStr, Value)>) -> Value + Send + Sync;

/// Object construction from the already-assembled ordered map.
pub type ObjectHook = dyn Fn(Map) -> Value + Send + Sync;

/// Per-call state threaded by `&mut` through every recursive scanning
/// function: the decoder's policies plus the key-interning memo and the
/// current nesting depth.
///
/// A context is built fresh for each top-level scan and dropped when it
/// returns, so the memo can never alias keys across independent decode
/// calls.
pub(crate) struct ScanContext<'d> {
    pub strict: bool,
    pub max_depth: usize,
    pub parse_int: &'d NumberParse,
    pub parse_float: &'d NumberParse,
    pub parse_constant: &'d ConstantParse,
    pub object_pairs_hook: Option<&'d PairsHook>,
    pub object_hook: Option<&'d ObjectHook>,
    pub depth: usize,
    memo: HashMap<String, SmolStr>,
}

impl<'d> ScanContext<'d> {
    pub fn new(
        options: &DecodeOptions,
        parse_int: &'d NumberParse,
        parse_float: &'d NumberParse,
        parse_constant: &'d ConstantParse,
        object_pairs_hook: Option<&'d PairsHook>,
        object_hook: Option<&'d ObjectHook>,
    ) -> Self {
        Self {
            strict: options.strict,
            max_depth: options.max_depth,
            parse_int,
            parse_float,
            parse_constant,
            object_pairs_hook,
            object_hook,
            depth: 0,
            memo: HashMap::new(),
        }
    }

    /// Return the interned key for `text`, caching the first occurrence.
    /// Repeated keys within one document share a single allocation.
    pub fn intern_key(&mut self, text: String) -> SmolStr {
        if let Some(cached) = self.memo.get(text.as_str()) {
            return cached.clone();
        }
        let interned = SmolStr::from(text.as_str());
        self.memo.insert(text, interned.clone());
        interned
    }

    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }
}

pub(crate) fn default_parse_int(literal: &str) -> Result<Value, Error> {
    if let Ok(n) = literal.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    // Out-of-range integer literals degrade to floating point; magnitude is
    // a parser policy concern, never a scan failure.
    literal
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|err| Error::custom(format!("invalid integer literal {literal:?}: {err}")))
}

pub(crate) fn default_parse_float(literal: &str) -> Result<Value, Error> {
    literal
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|err| Error::custom(format!("invalid float literal {literal:?}: {err}")))
}

pub(crate) fn default_parse_constant(literal: &str) -> Result<Value, Error> {
    let value = match literal {
        crate::constants::NAN_TEXT => f64::NAN,
        crate::constants::INFINITY_TEXT => f64::INFINITY,
        crate::constants::NEG_INFINITY_TEXT => f64::NEG_INFINITY,
        other => return Err(Error::custom(format!("unknown constant {other:?}"))),
    };
    Ok(Value::Float(value))
}
