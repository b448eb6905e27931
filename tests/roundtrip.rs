use chrono::{TimeZone, Utc};

use plist_xml::{from_str, Array, Dict, Integer, Plist, ToXmlOptions, Value};

/// Encodes a value into a full document and decodes it back out.
fn round_trip(value: Value) -> Value {
    let document = Plist::new(Some(value));
    let encoded = document.to_xml(&ToXmlOptions::default());
    from_str(&encoded).unwrap().value.unwrap()
}

#[test]
fn test_round_trip_leaves() {
    for value in vec![
        Value::Boolean(true),
        Value::Boolean(false),
        Value::from(0),
        Value::from(-42),
        Value::from(9_007_199_254_740_991i64),
        Value::from(Integer::from(9_007_199_254_740_992i64)),
        Value::from(3.14),
        Value::from(-0.5),
        Value::from(42.0),
        Value::from(""),
        Value::from("hello world"),
        Value::from("a & b < c > d"),
        Value::from(Vec::<u8>::new()),
        Value::from(vec![1u8, 2, 3]),
        Value::Date(Utc.with_ymd_and_hms(2019, 1, 20, 10, 12, 42).unwrap()),
        Value::Date(Utc.timestamp_opt(0, 0).unwrap()),
    ] {
        assert_eq!(round_trip(value.clone()), value);
    }
}

#[test]
fn test_round_trip_empty_composites() {
    assert_eq!(round_trip(Value::Array(Array::new())), Value::Array(Array::new()));
    assert_eq!(round_trip(Value::Dict(Dict::new())), Value::Dict(Dict::new()));
}

#[test]
fn test_round_trip_nested() {
    let mut inner = Dict::new();
    inner.insert("flag", Value::Boolean(true));
    inner.insert("count", Value::from(3));

    let mut list = Array::new();
    list.push(Value::from("first"));
    list.push(Value::Dict(inner));
    list.push(Value::Array(Array::new()));

    let mut root = Dict::new();
    root.insert("list", Value::Array(list));
    root.insert("data", Value::from(vec![0u8, 255, 128]));

    let value = Value::Dict(root);
    assert_eq!(round_trip(value.clone()), value);
}

#[test]
fn test_round_trip_preserves_dict_order() {
    let mut dict = Dict::new();
    dict.insert("zeta", Value::from(1));
    dict.insert("alpha", Value::from(2));
    dict.insert("mid", Value::from(3));

    let decoded = round_trip(Value::Dict(dict));
    let keys = decoded.as_dict().unwrap().keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_round_trip_dict_key_escaping() {
    let mut dict = Dict::new();
    dict.insert("a<&>b", Value::Boolean(true));

    let value = Value::Dict(dict);
    let decoded = round_trip(value.clone());
    assert_eq!(decoded, value);
    assert!(decoded.as_dict().unwrap().contains_key("a<&>b"));
}

#[test]
fn test_integer_boundary_values() {
    // At the boundary: exact; one past: arbitrary precision, digits intact.
    let limit = 9_007_199_254_740_991i64;
    for (value, exact) in vec![
        (Value::from(limit - 1), true),
        (Value::from(limit), true),
        (Value::from(Integer::from(limit + 1)), false),
        (Value::from(-limit), true),
        (Value::from(Integer::from(-limit - 1)), false),
    ] {
        let decoded = round_trip(value.clone());
        assert_eq!(decoded, value);
        assert_eq!(decoded.as_integer().unwrap().is_exact(), exact);
    }
}

#[test]
fn test_value_encoding_at_arbitrary_depth() {
    let mut array = Array::new();
    array.push(Value::Boolean(true));
    let encoded = Value::Array(array).to_xml(&ToXmlOptions::default(), 3);
    assert_eq!(encoded, "\t\t\t<array>\n\t\t\t\t<true/>\n\t\t\t</array>");

    let reparsed = Value::from_xml(&encoded).unwrap();
    assert_eq!(reparsed.as_array().unwrap().len(), 1);
}

#[test]
fn test_data_wrapping_line_counts() {
    for &len in &[0usize, 1, 2, 3, 10, 100] {
        let bytes = (0..len).map(|i| i as u8).collect::<Vec<u8>>();
        let encoded_len = (len + 2) / 3 * 4;
        for &columns in &[68i32, 8, 1] {
            let options = ToXmlOptions {
                data_columns: columns,
                ..ToXmlOptions::default()
            };
            let text = Value::from(bytes.clone()).to_xml(&options, 0);
            let expected_lines = (encoded_len + columns as usize - 1) / columns as usize;
            // <data> line + wrapped lines + </data> line.
            assert_eq!(
                text.lines().count(),
                expected_lines + 2,
                "len {} columns {}",
                len,
                columns
            );

            let decoded = Value::from_xml(&text).unwrap();
            assert_eq!(decoded.as_data(), Some(bytes.as_slice()));
        }
    }
}

#[test]
fn test_data_unwrapped_single_line() {
    let bytes = vec![7u8; 100];
    for columns in vec![0i32, -1] {
        let options = ToXmlOptions {
            data_columns: columns,
            ..ToXmlOptions::default()
        };
        let text = Value::from(bytes.clone()).to_xml(&options, 0);
        assert_eq!(text.lines().count(), 3);

        let decoded = Value::from_xml(&text).unwrap();
        assert_eq!(decoded.as_data(), Some(bytes.as_slice()));
    }
}

#[test]
fn test_date_subsecond_truncation_round_trip() {
    let document = from_str(
        "<plist version=\"1.0\"><date>2019-01-20T10:12:42.987Z</date></plist>",
    )
    .unwrap();
    let encoded = document.to_xml(&ToXmlOptions::default());
    assert!(encoded.contains("<date>2019-01-20T10:12:42Z</date>"));
}
