//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The plist document format.
//!
//! An XML property list document is organized into four parts:
//!
//! 1. An optional `<?xml?>` declaration line.
//! 2. An optional `<!DOCTYPE>` line.
//! 3. Exactly one `<plist version="1.0">` wrapper element.
//! 4. Zero or one value element directly inside the wrapper.
//!
//! The declaration and doctype strings are preserved verbatim across a
//! decode and may be overridden before encoding; an empty string omits
//! that line entirely.
//!
//! # References
//!
//! 1. http://www.apple.com/DTDs/PropertyList-1.0.dtd

use crate::error::{Error, Result};
use crate::options::ToXmlOptions;
use crate::value::{Array, Dict, Value};
use crate::xml::{self, Element};

/// The default XML declaration.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// The default Apple plist 1.0 doctype.
pub const XML_DOCTYPE: &str = r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#;

/// The root element tag name.
const ROOT_TAG: &str = "plist";

/// An XML property list document.
///
/// Owns an optional root [`Value`] plus the preamble strings wrapped
/// around the `<plist>` element. Decoding replaces the root wholesale;
/// a failed decode leaves the document untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Plist {
    /// The root value, if the document has one.
    pub value: Option<Value>,
    /// The `<?xml?>` declaration line; empty to omit.
    pub declaration: String,
    /// The `<!DOCTYPE>` line; empty to omit.
    pub doctype: String,
}

impl Plist {
    /// Creates a document with the given root value and the standard
    /// Apple preamble.
    pub fn new(value: Option<Value>) -> Plist {
        Plist {
            value,
            declaration: XML_DECLARATION.to_string(),
            doctype: XML_DOCTYPE.to_string(),
        }
    }

    /// The root value, or `Error::NoRootValue`.
    pub fn value_or_err(&self) -> Result<&Value> {
        self.value.as_ref().ok_or(Error::NoRootValue)
    }

    /// The root value viewed as an array, or `None`.
    pub fn value_as_array(&self) -> Option<&Array> {
        self.value.as_ref().and_then(Value::as_array)
    }

    /// The root value viewed as a dictionary, or `None`.
    pub fn value_as_dict(&self) -> Option<&Dict> {
        self.value.as_ref().and_then(Value::as_dict)
    }

    /// Decodes a document from XML text, replacing the root value and
    /// preamble strings.
    ///
    /// On failure the document is left untouched.
    pub fn from_xml(&mut self, text: &str) -> Result<()> {
        let document = xml::decode(text)?;
        self.from_xml_element(
            &document.root,
            document.declaration.as_deref(),
            document.doctype.as_deref(),
        )
    }

    /// Decodes a document from an already-parsed root element.
    ///
    /// The element must be the `<plist>` wrapper with at most one child
    /// element. A missing declaration or doctype becomes the empty
    /// string, omitting that line on re-encode.
    pub fn from_xml_element(
        &mut self,
        element: &Element,
        declaration: Option<&str>,
        doctype: Option<&str>,
    ) -> Result<()> {
        if element.name != ROOT_TAG {
            return Err(Error::UnexpectedRootTag(element.name.clone()));
        }

        let children = element.child_elements()?;
        if children.len() > 1 {
            return Err(Error::MultipleRootChildren(children.len()));
        }

        // Decode the subtree completely before replacing anything.
        let value = match children.first() {
            Some(child) => Some(Value::from_element(child)?),
            None => None,
        };

        self.value = value;
        self.declaration = declaration.unwrap_or("").to_string();
        self.doctype = doctype.unwrap_or("").to_string();
        Ok(())
    }

    /// Encodes the document as XML text with a trailing newline.
    pub fn to_xml(&self, options: &ToXmlOptions) -> String {
        let depth = if options.indent_root { 1 } else { 0 };
        let mut lines = Vec::with_capacity(6);
        if !self.declaration.is_empty() {
            lines.push(self.declaration.clone());
        }
        if !self.doctype.is_empty() {
            lines.push(self.doctype.clone());
        }
        lines.push(format!("<{} version=\"1.0\">", ROOT_TAG));
        if let Some(value) = &self.value {
            lines.push(value.to_xml(options, depth));
        }
        lines.push(format!("</{}>", ROOT_TAG));
        lines.push(String::new());
        lines.join(&options.newline_string)
    }
}

impl Default for Plist {
    fn default() -> Self {
        Plist::new(None)
    }
}
