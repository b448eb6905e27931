//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # Decoding XML nodes into plist values.
//!
//! Every decoder takes an already-parsed [`Element`](crate::xml::Element)
//! and either produces a fully-formed value or fails at the point of
//! detection; no partially-decoded tree is ever handed back. Dispatch
//! from tag name to decoder is a single static `match` covering the
//! eight wire tags.

mod text;

use chrono::{DateTime, Utc};
use num_bigint::BigInt;

use crate::base64;
use crate::document::Plist;
use crate::error::{Error, Result};
use crate::value::{Array, Dict, Integer, Value};
use crate::xml::{self, Element};

/// Decodes a complete plist document from XML text.
///
/// ```
/// let doc = plist_xml::from_str(
///     "<plist version=\"1.0\"><integer>42</integer></plist>"
/// ).unwrap();
/// assert_eq!(doc.value, Some(plist_xml::Value::from(42)));
/// ```
pub fn from_str(xml: &str) -> Result<Plist> {
    let mut document = Plist::default();
    document.from_xml(xml)?;
    Ok(document)
}

impl Value {
    /// Decodes a value from a parsed XML element, dispatching on its tag.
    ///
    /// An unrecognized tag fails with `Error::UnknownElementType` naming
    /// the offending tag.
    pub fn from_element(element: &Element) -> Result<Value> {
        match element.name.as_str() {
            "array" => decode_array(element).map(Value::Array),
            "dict" => decode_dict(element).map(Value::Dict),
            "true" | "false" => decode_boolean(element).map(Value::Boolean),
            "data" => decode_data(element).map(Value::Data),
            "date" => decode_date(element).map(Value::Date),
            "integer" => decode_integer(element).map(Value::Integer),
            "real" => decode_real(element).map(Value::from),
            "string" => decode_string(element).map(Value::String),
            other => Err(Error::UnknownElementType(other.to_string())),
        }
    }

    /// Decodes a value from a standalone XML fragment.
    pub fn from_xml(text: &str) -> Result<Value> {
        let document = xml::decode(text)?;
        Value::from_element(&document.root)
    }
}

/// Decodes `<true/>` or `<false/>`; the tag itself carries the value.
fn decode_boolean(element: &Element) -> Result<bool> {
    if !element.children.is_empty() {
        return Err(Error::UnexpectedChildNodes(element.name.clone()));
    }
    match element.name.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::UnknownElementType(other.to_string())),
    }
}

/// Decodes `<integer>` text into an exact or arbitrary-precision integer.
///
/// Literals whose magnitude exceeds the exact-integer safe range are
/// parsed in arbitrary precision so no digits are lost; an explicit `+`
/// sign is normalized away by the numeric parse.
fn decode_integer(element: &Element) -> Result<Integer> {
    let text = element.text()?;
    if text::integer_literal(text).is_err() {
        return Err(Error::InvalidInteger(text.to_string()));
    }
    if let Ok(exact) = text.parse::<i64>() {
        return Ok(Integer::from(exact));
    }
    text.parse::<BigInt>()
        .map(Integer::from)
        .map_err(|_| Error::InvalidInteger(text.to_string()))
}

/// Decodes `<real>` text into a floating-point number.
fn decode_real(element: &Element) -> Result<f64> {
    let text = element.text()?;
    if text::real_literal(text).is_err() {
        return Err(Error::InvalidReal(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| Error::InvalidReal(text.to_string()))
}

/// Decodes `<string>` text, already entity-unescaped by the XML adapter.
fn decode_string(element: &Element) -> Result<String> {
    Ok(element.text()?.to_string())
}

/// Decodes `<date>` text as an RFC 3339 timestamp, normalized to UTC.
fn decode_date(element: &Element) -> Result<DateTime<Utc>> {
    let text = element.text()?;
    DateTime::parse_from_rfc3339(text)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Decodes `<data>` text with the lenient Base64 scan; never fails on
/// content, only on malformed element structure.
fn decode_data(element: &Element) -> Result<Vec<u8>> {
    Ok(base64::decode(element.text()?))
}

/// Decodes `<array>`: every immediate child must be an element, each of
/// which dispatches through [`Value::from_element`] in document order.
fn decode_array(element: &Element) -> Result<Array> {
    let children = element.child_elements()?;
    let mut items = Vec::with_capacity(children.len());
    for child in children {
        items.push(Value::from_element(child)?);
    }
    Ok(Array::from(items))
}

/// Decodes `<dict>`: alternating `<key>` and value elements.
///
/// An odd child count fails with `Error::UnevenChildren`; a repeated key
/// is not an error, the last value wins.
fn decode_dict(element: &Element) -> Result<Dict> {
    let children = element.child_elements()?;
    if children.len() % 2 != 0 {
        return Err(Error::UnevenChildren(children.len()));
    }
    let mut dict = Dict::new();
    for entry in children.chunks(2) {
        let key_element = entry[0];
        if key_element.name != "key" {
            return Err(Error::UnexpectedTagName {
                expected: "key",
                actual: key_element.name.clone(),
            });
        }
        let key = key_element.text()?.to_string();
        dict.insert(key, Value::from_element(entry[1])?);
    }
    Ok(dict)
}
