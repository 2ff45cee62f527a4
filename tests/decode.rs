use jsontext::{from_str, from_str_with_options, DecodeOptions, ErrorKind, JsonDecoder, Value};
use rstest::rstest;

#[rstest]
fn test_decode_document() {
    let value = from_str(
        r#"{
            "name": "probe",
            "enabled": true,
            "retries": 3,
            "backoff": 1.5,
            "tags": ["a", "b"],
            "extra": null
        }"#,
    )
    .unwrap();

    assert_eq!(value["name"].as_str(), Some("probe"));
    assert_eq!(value["enabled"].as_bool(), Some(true));
    assert_eq!(value["retries"], Value::Int(3));
    assert_eq!(value["backoff"], Value::Float(1.5));
    assert_eq!(value["tags"][1].as_str(), Some("b"));
    assert!(value["extra"].is_null());
}

#[rstest]
fn test_decode_nonstandard_constants() {
    let value = from_str("[NaN, Infinity, -Infinity]").unwrap();
    assert!(matches!(value[0], Value::Float(f) if f.is_nan()));
    assert_eq!(value[1], Value::Float(f64::INFINITY));
    assert_eq!(value[2], Value::Float(f64::NEG_INFINITY));
}

#[rstest]
fn test_error_position_on_line_three() {
    let input = "[\n  1,\n  x\n]";
    let err = from_str(input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectingValue);
    let location = err.location.unwrap();
    assert_eq!(location.line, 3);
    assert_eq!(location.column, 3);
    assert_eq!(location.offset, 9);
    assert_eq!(err.message, "Expecting value: line 3 column 3 (char 9)");
}

#[rstest]
fn test_leading_zero_is_trailing_data() {
    // `01` is scanned as the integer 0; the leftover digit is a structural
    // error at the document level
    let err = from_str("01").unwrap_err();
    assert_eq!(err.kind, ErrorKind::TrailingCharacters);
    assert_eq!(err.location.unwrap().offset, 1);
}

#[rstest]
fn test_strict_mode_controls() {
    let input = "\"a\u{1}b\"";
    let err = from_str(input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidControlCharacter);

    let relaxed = DecodeOptions::default().with_strict(false);
    let value = from_str_with_options(input, &relaxed).unwrap();
    assert_eq!(value.as_str(), Some("a\u{1}b"));
}

#[rstest]
fn test_surrogate_pair_decoding() {
    let value = from_str(r#""\ud83d\ude00""#).unwrap();
    assert_eq!(value.as_str(), Some("\u{1F600}"));

    let err = from_str(r#""\ud83d""#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSurrogatePair);
}

#[rstest]
fn test_nested_structures() {
    let value = from_str(r#"[[[{"deep": [0]}]]]"#).unwrap();
    assert_eq!(value[0][0][0]["deep"][0], Value::Int(0));
}

#[rstest]
fn test_configurable_depth_limit() {
    let input = "[[[[1]]]]";
    let shallow = DecodeOptions::default().with_max_depth(3);
    let err = from_str_with_options(input, &shallow).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthLimitExceeded);

    assert!(from_str(input).is_ok());
}

#[rstest]
fn test_scan_returns_next_offset() {
    let decoder = JsonDecoder::new();
    let input = r#"{"a": 1} {"b": 2}"#;
    let (first, end) = decoder.scan(input, 0).unwrap();
    assert_eq!(first["a"], Value::Int(1));

    let next = end + 1;
    let (second, end) = decoder.scan(input, next).unwrap();
    assert_eq!(second["b"], Value::Int(2));
    assert_eq!(end, input.len());
}

#[rstest]
#[case("{\"a\":1,}", ErrorKind::ExpectingPropertyName)]
#[case("[1,]", ErrorKind::ExpectingValue)]
#[case("{\"a\" 1}", ErrorKind::ExpectingDelimiter(':'))]
#[case("[1 2]", ErrorKind::ExpectingDelimiter(','))]
#[case("\"open", ErrorKind::UnterminatedString)]
#[case("{", ErrorKind::ExpectingPropertyName)]
#[case("", ErrorKind::ExpectingValue)]
fn test_malformed_documents(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(from_str(input).unwrap_err().kind, kind);
}

#[rstest]
fn test_interop_with_serde_json() {
    let value = from_str(r#"{"z": [1, 2.5], "a": "text"}"#).unwrap();
    let json: serde_json::Value = value.into();
    assert_eq!(
        json,
        serde_json::json!({"z": [1, 2.5], "a": "text"})
    );
    // preserve_order keeps the scan order through the conversion
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a"]);
}
