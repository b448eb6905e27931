//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # Encoding plist values as XML text.
//!
//! Encoding is purely structural and cannot fail: every representable
//! value has exactly one XML form for a given set of formatting options.
//! Composite values recurse one indent level deeper per nesting level;
//! `<data>` payloads wrap at the configured column width.

use quick_xml::escape::partial_escape;

use crate::base64;
use crate::options::ToXmlOptions;
use crate::value::Value;

impl Value {
    /// Encodes this value as XML text, indented `depth` levels.
    pub fn to_xml(&self, options: &ToXmlOptions, depth: usize) -> String {
        let mut out = String::new();
        write_value(&mut out, self, options, depth);
        out
    }
}

fn write_value(out: &mut String, value: &Value, options: &ToXmlOptions, depth: usize) {
    let pad = options.indent_string.repeat(depth);
    match value {
        Value::Boolean(true) => {
            out.push_str(&pad);
            out.push_str("<true/>");
        }
        Value::Boolean(false) => {
            out.push_str(&pad);
            out.push_str("<false/>");
        }
        Value::Integer(integer) => {
            out.push_str(&pad);
            out.push_str("<integer>");
            out.push_str(&integer.to_string());
            out.push_str("</integer>");
        }
        Value::Real(real) => {
            out.push_str(&pad);
            out.push_str("<real>");
            out.push_str(&real.to_string());
            out.push_str("</real>");
        }
        Value::String(string) => {
            out.push_str(&pad);
            out.push_str("<string>");
            out.push_str(&partial_escape(string));
            out.push_str("</string>");
        }
        Value::Date(date) => {
            // Sub-second precision is truncated, not rounded.
            out.push_str(&pad);
            out.push_str("<date>");
            out.push_str(&date.format("%Y-%m-%dT%H:%M:%SZ").to_string());
            out.push_str("</date>");
        }
        Value::Data(data) => write_data(out, data, options, &pad),
        Value::Array(array) => {
            if array.is_empty() {
                out.push_str(&pad);
                out.push_str("<array/>");
            } else {
                out.push_str(&pad);
                out.push_str("<array>");
                for item in array {
                    out.push_str(&options.newline_string);
                    write_value(out, item, options, depth + 1);
                }
                out.push_str(&options.newline_string);
                out.push_str(&pad);
                out.push_str("</array>");
            }
        }
        Value::Dict(dict) => {
            if dict.is_empty() {
                out.push_str(&pad);
                out.push_str("<dict/>");
            } else {
                let entry_pad = options.indent_string.repeat(depth + 1);
                out.push_str(&pad);
                out.push_str("<dict>");
                for (key, item) in dict {
                    out.push_str(&options.newline_string);
                    out.push_str(&entry_pad);
                    out.push_str("<key>");
                    out.push_str(&partial_escape(key));
                    out.push_str("</key>");
                    out.push_str(&options.newline_string);
                    write_value(out, item, options, depth + 1);
                }
                out.push_str(&options.newline_string);
                out.push_str(&pad);
                out.push_str("</dict>");
            }
        }
    }
}

/// Writes a `<data>` element with its Base64 text wrapped at the
/// configured column width.
///
/// Wrapped lines sit at the same indent depth as the `<data>` tags
/// themselves. A non-positive width disables wrapping and emits the
/// whole payload on one line.
fn write_data(out: &mut String, data: &[u8], options: &ToXmlOptions, pad: &str) {
    let encoded = base64::encode(data);
    out.push_str(pad);
    out.push_str("<data>");
    if options.data_columns > 0 {
        for line in base64::chunk(&encoded, options.data_columns as usize) {
            out.push_str(&options.newline_string);
            out.push_str(pad);
            out.push_str(line);
        }
    } else {
        out.push_str(&options.newline_string);
        out.push_str(pad);
        out.push_str(&encoded);
    }
    out.push_str(&options.newline_string);
    out.push_str(pad);
    out.push_str("</data>");
}
