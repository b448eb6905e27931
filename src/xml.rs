//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The XML text adapter.
//!
//! Parses raw XML text into a generic node tree the plist decoders walk:
//! each element exposes a tag name and its ordered child nodes (elements
//! or text), and the document carries the leading `<?xml?>` declaration
//! and `<!DOCTYPE>` string verbatim so they can round-trip. Attributes
//! are not part of the contract and are dropped. Text content arrives
//! entity-unescaped.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

/// One node in the parsed tree: an element or a run of text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A parsed XML element: a tag name and its child nodes in document order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    /// The element tag name.
    pub name: String,
    /// Child elements and text runs, in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with the given tag name and no children.
    pub fn new(name: impl Into<String>) -> Element {
        Element {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// The immediate child elements, requiring everything else to be
    /// whitespace.
    ///
    /// Fails with `Error::TextChildren` if any non-whitespace text node
    /// sits between the child elements.
    pub fn child_elements(&self) -> Result<Vec<&Element>> {
        let mut elements = Vec::new();
        for child in &self.children {
            match child {
                Node::Element(element) => elements.push(element),
                Node::Text(text) => {
                    if !text.chars().all(char::is_whitespace) {
                        return Err(Error::TextChildren(self.name.clone()));
                    }
                }
            }
        }
        Ok(elements)
    }

    /// The element's text content.
    ///
    /// An empty element yields `""`. A single text child yields its text.
    /// Anything else fails: an element child with
    /// `Error::UnexpectedChildElement`, several nodes with
    /// `Error::MultipleChildNodes`.
    pub fn text(&self) -> Result<&str> {
        match self.children.as_slice() {
            [] => Ok(""),
            [Node::Text(text)] => Ok(text),
            [Node::Element(_)] => Err(Error::UnexpectedChildElement(self.name.clone())),
            _ => Err(Error::MultipleChildNodes(self.name.clone())),
        }
    }
}

/// A parsed XML document: preamble strings plus the root element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XmlDocument {
    /// The literal `<?xml ...?>` declaration, if present.
    pub declaration: Option<String>,
    /// The literal `<!DOCTYPE ...>` string, if present.
    pub doctype: Option<String>,
    /// The document element.
    pub root: Element,
}

/// Parses XML text into an [`XmlDocument`].
///
/// Parse failures surface as `Error::Xml`; input without any root element
/// fails with `Error::NoRootElement`. When the input holds more than one
/// top-level element, the first is the document element (matching DOM
/// `documentElement` behavior).
pub fn decode(xml: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(xml);
    let mut declaration = None;
    let mut doctype = None;
    let mut root: Option<Element> = None;
    let mut open: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Decl(event) => {
                if root.is_none() && open.is_empty() {
                    let content = String::from_utf8_lossy(&event);
                    declaration = Some(format!("<?{}?>", content));
                }
            }
            Event::DocType(event) => {
                if root.is_none() && open.is_empty() {
                    let content = String::from_utf8_lossy(&event);
                    doctype = Some(format!("<!DOCTYPE {}>", content.trim()));
                }
            }
            Event::Start(event) => {
                let name = String::from_utf8_lossy(event.name().as_ref()).into_owned();
                open.push(Element::new(name));
            }
            Event::Empty(event) => {
                let name = String::from_utf8_lossy(event.name().as_ref()).into_owned();
                attach(Element::new(name), &mut open, &mut root);
            }
            Event::End(_) => {
                // Balanced by the reader's own end-name checking.
                if let Some(element) = open.pop() {
                    attach(element, &mut open, &mut root);
                }
            }
            Event::Text(event) => {
                if let Some(parent) = open.last_mut() {
                    let text = event.unescape()?;
                    parent.children.push(Node::Text(text.into_owned()));
                }
            }
            Event::CData(event) => {
                if let Some(parent) = open.last_mut() {
                    let text = String::from_utf8_lossy(&event.into_inner()).into_owned();
                    parent.children.push(Node::Text(text));
                }
            }
            Event::Comment(_) | Event::PI(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::Xml(format!("unclosed element <{}>", unclosed.name)));
    }

    match root {
        Some(root) => Ok(XmlDocument {
            declaration,
            doctype,
            root,
        }),
        None => Err(Error::NoRootElement),
    }
}

fn attach(element: Element, open: &mut Vec<Element>, root: &mut Option<Element>) {
    if let Some(parent) = open.last_mut() {
        parent.children.push(Node::Element(element));
    } else if root.is_none() {
        *root = Some(element);
    }
}
