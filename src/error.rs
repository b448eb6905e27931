//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use std::fmt::{self, Display};

use crate::value::Kind;

pub type Result<T> = std::result::Result<T, Error>;

/// XML property list serialization and deserialization error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The XML text could not be parsed into a node tree.
    Xml(String),
    /// The document contains no root element at all.
    NoRootElement,
    /// The root element of the document is not `plist`.
    UnexpectedRootTag(String),
    /// The `plist` element contains more than one child element.
    MultipleRootChildren(usize),
    /// An element's tag name matches none of the plist value kinds.
    UnknownElementType(String),
    /// An element has a different tag name than the one required here.
    UnexpectedTagName {
        /// The tag name required at this position.
        expected: &'static str,
        /// The tag name actually encountered.
        actual: String,
    },
    /// A `dict` element holds an odd number of child elements.
    UnevenChildren(usize),
    /// Non-whitespace text was found between the children of a composite element.
    TextChildren(String),
    /// A leaf element which must be empty has child nodes.
    UnexpectedChildNodes(String),
    /// An element child was found where only text content is permitted.
    UnexpectedChildElement(String),
    /// Multiple child nodes were found where a single text node is permitted.
    MultipleChildNodes(String),
    /// The text of an `integer` element is not an optionally-signed run of digits.
    InvalidInteger(String),
    /// The text of a `real` element is not a decimal number.
    InvalidReal(String),
    /// The text of a `date` element is not a valid timestamp.
    InvalidDate(String),
    /// A value of one kind was viewed as another kind.
    CastMismatch {
        /// The kind the caller asked for.
        requested: Kind,
        /// The kind the value actually is.
        actual: Kind,
    },
    /// An array was indexed past its end.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The array length at the time of the access.
        len: usize,
    },
    /// A value was popped or shifted off an empty array.
    EmptyCollection,
    /// A required dictionary key is absent.
    MissingKey(String),
    /// The document has no root value.
    NoRootValue,
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Xml(msg) =>
                write!(formatter, "XML decode error: {}", msg),
            Error::NoRootElement =>
                formatter.write_str("XML decode error: no document element"),
            Error::UnexpectedRootTag(tag) =>
                write!(formatter, "unexpected root plist tag name: {}", tag),
            Error::MultipleRootChildren(count) =>
                write!(formatter, "multiple root plist child elements: {}", count),
            Error::UnknownElementType(tag) =>
                write!(formatter, "unknown element type: {}", tag),
            Error::UnexpectedTagName { expected, actual } =>
                write!(formatter, "unexpected tag name: {} (expected {})", actual, expected),
            Error::UnevenChildren(count) =>
                write!(formatter, "uneven number of child elements: {}", count),
            Error::TextChildren(tag) =>
                write!(formatter, "found text children of: {}", tag),
            Error::UnexpectedChildNodes(tag) =>
                write!(formatter, "unexpected child nodes: {}", tag),
            Error::UnexpectedChildElement(tag) =>
                write!(formatter, "unexpected child element in: {}", tag),
            Error::MultipleChildNodes(tag) =>
                write!(formatter, "multiple child nodes in: {}", tag),
            Error::InvalidInteger(text) =>
                write!(formatter, "invalid integer data: {}", text),
            Error::InvalidReal(text) =>
                write!(formatter, "invalid real data: {}", text),
            Error::InvalidDate(text) =>
                write!(formatter, "invalid date data: {}", text),
            Error::CastMismatch { requested, actual } =>
                write!(formatter, "cannot cast value of type '{}' to type '{}'", actual, requested),
            Error::IndexOutOfBounds { index, len } =>
                write!(formatter, "index out of bounds: {} (length {})", index, len),
            Error::EmptyCollection =>
                formatter.write_str("cannot take a value from an empty array"),
            Error::MissingKey(key) =>
                write!(formatter, "key is absent: {}", key),
            Error::NoRootValue =>
                formatter.write_str("document root value is absent"),
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Error::Xml(error.to_string())
    }
}
