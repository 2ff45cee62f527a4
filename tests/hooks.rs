use jsontext::{Error, ErrorKind, JsonDecoder, Value};
use rstest::rstest;

#[rstest]
fn test_parse_float_substitution() {
    // Route float-spelled literals into strings, preserving the exact text
    // the way a decimal numeric type would
    let decoder =
        JsonDecoder::new().with_parse_float(|literal| Ok(Value::String(literal.to_string())));
    let value = decoder.decode("[1.5e3, 2, 0.25]").unwrap();
    assert_eq!(value[0].as_str(), Some("1.5e3"));
    assert_eq!(value[1], Value::Int(2));
    assert_eq!(value[2].as_str(), Some("0.25"));
}

#[rstest]
fn test_parse_int_substitution() {
    let decoder =
        JsonDecoder::new().with_parse_int(|literal| Ok(Value::String(format!("int:{literal}"))));
    let value = decoder.decode("[7, -0, 1.5]").unwrap();
    assert_eq!(value[0].as_str(), Some("int:7"));
    assert_eq!(value[1].as_str(), Some("int:-0"));
    assert_eq!(value[2], Value::Float(1.5));
}

#[rstest]
fn test_parse_constant_rejection() {
    let decoder = JsonDecoder::new()
        .with_parse_constant(|literal| Err(Error::custom(format!("{literal} is not valid JSON"))));
    let err = decoder.decode("NaN").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Custom);
    assert!(err.message.starts_with("NaN is not valid JSON"));

    // Standard tokens are unaffected by the constant resolver
    assert_eq!(decoder.decode("-1").unwrap(), Value::Int(-1));
}

#[rstest]
fn test_object_pairs_hook_sees_scan_order() {
    let decoder = JsonDecoder::new().with_object_pairs_hook(|pairs| {
        Value::Array(
            pairs
                .into_iter()
                .map(|(key, value)| {
                    Value::Array(vec![Value::String(key.to_string()), value])
                })
                .collect(),
        )
    });
    // Duplicates are preserved for the hook to resolve
    let value = decoder.decode(r#"{"b": 1, "a": 2, "b": 3}"#).unwrap();
    let pairs = value.as_array().unwrap();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0][0].as_str(), Some("b"));
    assert_eq!(pairs[1][0].as_str(), Some("a"));
    assert_eq!(pairs[2][0].as_str(), Some("b"));
    assert_eq!(pairs[2][1], Value::Int(3));
}

#[rstest]
fn test_object_hook_post_processes_maps() {
    let decoder = JsonDecoder::new().with_object_hook(|map| Value::Int(map.len() as i64));
    let value = decoder.decode(r#"[{"a": 1, "b": 2}, {}]"#).unwrap();
    assert_eq!(value[0], Value::Int(2));
    assert_eq!(value[1], Value::Int(0));
}

#[rstest]
fn test_pairs_hook_takes_precedence() {
    let decoder = JsonDecoder::new()
        .with_object_hook(|_| Value::String("object_hook".into()))
        .with_object_pairs_hook(|_| Value::String("pairs_hook".into()));
    let value = decoder.decode("{}").unwrap();
    assert_eq!(value.as_str(), Some("pairs_hook"));
}

#[rstest]
fn test_key_interning_within_one_decode() {
    let key = "interned_key_longer_than_inline_storage";
    let decoder = JsonDecoder::new();
    let input = format!(r#"[{{"{key}": 1}}, {{"{key}": 2}}]"#);
    let value = decoder.decode(&input).unwrap();

    let first = value[0].as_object().unwrap().get_index(0).unwrap().0;
    let second = value[1].as_object().unwrap().get_index(0).unwrap().0;
    assert_eq!(first, second);
    // One parse, one allocation: both objects share the memoized key
    assert_eq!(first.as_str().as_ptr(), second.as_str().as_ptr());
}

#[rstest]
fn test_key_cache_does_not_leak_across_decodes() {
    let key = "interned_key_longer_than_inline_storage";
    let decoder = JsonDecoder::new();
    let input = format!(r#"{{"{key}": 1}}"#);

    let a = decoder.decode(&input).unwrap();
    let b = decoder.decode(&input).unwrap();
    let key_a = a.as_object().unwrap().get_index(0).unwrap().0;
    let key_b = b.as_object().unwrap().get_index(0).unwrap().0;

    // Equal text, but each top-level decode owns a fresh memo
    assert_eq!(key_a, key_b);
    assert_ne!(key_a.as_str().as_ptr(), key_b.as_str().as_ptr());
}
