use plist_xml::{
    from_str, Dict, Plist, ToXmlOptions, Value, XML_DECLARATION, XML_DOCTYPE,
};

#[test]
fn test_default_document_layout() {
    let document = Plist::new(Some(Value::Boolean(true)));
    assert_eq!(
        document.to_xml(&ToXmlOptions::default()),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
         \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
         <plist version=\"1.0\">\n\
         <true/>\n\
         </plist>\n"
    );
}

#[test]
fn test_empty_document_layout() {
    let document = Plist::new(None);
    assert_eq!(
        document.to_xml(&ToXmlOptions::default()),
        format!(
            "{}\n{}\n<plist version=\"1.0\">\n</plist>\n",
            XML_DECLARATION, XML_DOCTYPE
        )
    );
}

#[test]
fn test_indent_root_only_affects_value_line() {
    let document = Plist::new(Some(Value::from(7)));
    let options = ToXmlOptions {
        indent_root: true,
        ..ToXmlOptions::default()
    };
    let text = document.to_xml(&options);
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines[2], "<plist version=\"1.0\">");
    assert_eq!(lines[3], "\t<integer>7</integer>");
    assert_eq!(lines[4], "</plist>");
}

#[test]
fn test_indent_root_shifts_nested_values() {
    let mut dict = Dict::new();
    dict.insert("flag", Value::Boolean(false));

    let mut document = Plist::new(Some(Value::Dict(dict)));
    document.declaration.clear();
    document.doctype.clear();

    let options = ToXmlOptions {
        indent_root: true,
        ..ToXmlOptions::default()
    };
    assert_eq!(
        document.to_xml(&options),
        "<plist version=\"1.0\">\n\
         \t<dict>\n\
         \t\t<key>flag</key>\n\
         \t\t<false/>\n\
         \t</dict>\n\
         </plist>\n"
    );
}

#[test]
fn test_empty_preamble_strings_omit_lines() {
    let mut document = Plist::new(Some(Value::Boolean(true)));
    document.declaration.clear();
    document.doctype.clear();
    assert_eq!(
        document.to_xml(&ToXmlOptions::default()),
        "<plist version=\"1.0\">\n<true/>\n</plist>\n"
    );
}

#[test]
fn test_decode_captures_preamble() {
    let document = from_str(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
         \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
         <plist version=\"1.0\">\n\
         <false/>\n\
         </plist>\n",
    )
    .unwrap();
    assert_eq!(document.declaration, XML_DECLARATION);
    assert_eq!(document.doctype, XML_DOCTYPE);
    assert_eq!(document.value, Some(Value::Boolean(false)));
}

#[test]
fn test_decode_without_preamble_clears_it() {
    let mut document = Plist::new(Some(Value::Boolean(true)));
    document.from_xml("<plist version=\"1.0\"><string>hi</string></plist>").unwrap();
    assert_eq!(document.declaration, "");
    assert_eq!(document.doctype, "");
    assert_eq!(document.value, Some(Value::from("hi")));
}

#[test]
fn test_decode_replaces_root_value() {
    let mut document = Plist::new(Some(Value::from("stale")));
    document.from_xml("<plist version=\"1.0\"><integer>9</integer></plist>").unwrap();
    assert_eq!(document.value, Some(Value::from(9)));
}

#[test]
fn test_decode_empty_plist_clears_value() {
    let mut document = Plist::new(Some(Value::Boolean(true)));
    document.from_xml("<plist version=\"1.0\"></plist>").unwrap();
    assert_eq!(document.value, None);
}

#[test]
fn test_failed_decode_leaves_document_untouched() {
    let mut document = Plist::new(Some(Value::from("kept")));
    let before = document.clone();
    assert!(document.from_xml("<plist><bogus/></plist>").is_err());
    assert_eq!(document, before);
}

#[test]
fn test_value_accessors() {
    let document = Plist::new(None);
    assert!(document.value_or_err().is_err());
    assert!(document.value_as_array().is_none());
    assert!(document.value_as_dict().is_none());

    let mut dict = Dict::new();
    dict.insert("k", Value::from(1));
    let document = Plist::new(Some(Value::Dict(dict)));
    assert!(document.value_or_err().is_ok());
    assert!(document.value_as_array().is_none());
    assert_eq!(document.value_as_dict().map(Dict::len), Some(1));
}

#[test]
fn test_custom_newline() {
    let document = Plist::new(Some(Value::Boolean(true)));
    let options = ToXmlOptions {
        newline_string: "\r\n".to_string(),
        ..ToXmlOptions::default()
    };
    let text = document.to_xml(&options);
    assert!(text.ends_with("</plist>\r\n"));
    assert!(text.contains("<plist version=\"1.0\">\r\n<true/>\r\n"));
}
