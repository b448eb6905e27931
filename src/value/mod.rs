//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The plist value model.
//!
//! An XML property list document holds a tree built from the following
//! value kinds:
//!
//! 1. Boolean, written as the `<true/>` or `<false/>` element.
//! 2. Integer, exact up to ±(2^53−1) and arbitrary-precision beyond.
//! 3. Real, double-precision.
//! 4. String.
//! 5. Data, Base64-encoded on the wire.
//! 6. Date, an absolute UTC instant.
//! 7. Array.
//! 8. Dict, an insertion-ordered dictionary with string keys.
//!
//! # References
//!
//! 1. http://www.apple.com/DTDs/PropertyList-1.0.dtd
//! 2. https://developer.apple.com/library/archive/documentation/Cocoa/Conceptual/PropertyLists/

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use ordered_float::OrderedFloat;

use crate::error::{Error, Result};

mod array;
mod dict;
mod integer;

pub use self::array::Array;
pub use self::dict::Dict;
pub use self::integer::{Integer, MAX_EXACT};

/// The variant tag of a [`Value`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Kind {
    Boolean,
    Integer,
    Real,
    String,
    Data,
    Date,
    Array,
    Dict,
}

impl Kind {
    /// The tag as its conventional lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Real => "real",
            Kind::String => "string",
            Kind::Data => "data",
            Kind::Date => "date",
            Kind::Array => "array",
            Kind::Dict => "dict",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Represents any valid plist value.
///
/// See the `plist_xml::value` module documentation for the supported kinds.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Value {
    /// A plist boolean, carried by the `<true/>` and `<false/>` elements.
    Boolean(bool),

    /// A plist integral value.
    ///
    /// Magnitudes beyond ±(2^53−1) are held in arbitrary precision; see
    /// [`Integer`].
    Integer(Integer),

    /// A plist floating-point value.
    ///
    /// Unlike a plain `f64` these values have a defined order, implementing
    /// `Ord`, `Eq` and `Hash` in addition to `PartialOrd` and `PartialEq`,
    /// which keeps the whole `Value` tree usable as a map key.
    Real(OrderedFloat<f64>),

    /// A plist string, stored unescaped.
    String(String),

    /// A plist data instance: raw bytes, Base64-encoded only on the wire.
    Data(Vec<u8>),

    /// A plist date: an absolute instant, serialized in UTC without
    /// sub-second precision.
    Date(DateTime<Utc>),

    /// A plist array of values.
    Array(Array),

    /// A plist dictionary with string keys and preserved insertion order.
    Dict(Dict),
}

impl Value {
    /// This value's variant tag.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Real(_) => Kind::Real,
            Value::String(_) => Kind::String,
            Value::Data(_) => Kind::Data,
            Value::Date(_) => Kind::Date,
            Value::Array(_) => Kind::Array,
            Value::Dict(_) => Kind::Dict,
        }
    }

    /// The boolean payload, or `None` if this is another kind.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer payload, or `None` if this is another kind.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// The real payload, or `None` if this is another kind.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(value) => Some(value.into_inner()),
            _ => None,
        }
    }

    /// The string payload, or `None` if this is another kind.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// The data payload, or `None` if this is another kind.
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Value::Data(value) => Some(value),
            _ => None,
        }
    }

    /// The date payload, or `None` if this is another kind.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// The array payload, or `None` if this is another kind.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(value) => Some(value),
            _ => None,
        }
    }

    /// The array payload mutably, or `None` if this is another kind.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(value) => Some(value),
            _ => None,
        }
    }

    /// The dictionary payload, or `None` if this is another kind.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(value) => Some(value),
            _ => None,
        }
    }

    /// The dictionary payload mutably, or `None` if this is another kind.
    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Value::Dict(value) => Some(value),
            _ => None,
        }
    }

    /// The boolean payload, or `Error::CastMismatch`.
    pub fn expect_boolean(&self) -> Result<bool> {
        self.as_boolean().ok_or_else(|| self.cast_mismatch(Kind::Boolean))
    }

    /// The integer payload, or `Error::CastMismatch`.
    pub fn expect_integer(&self) -> Result<&Integer> {
        match self {
            Value::Integer(value) => Ok(value),
            _ => Err(self.cast_mismatch(Kind::Integer)),
        }
    }

    /// The real payload, or `Error::CastMismatch`.
    pub fn expect_real(&self) -> Result<f64> {
        self.as_real().ok_or_else(|| self.cast_mismatch(Kind::Real))
    }

    /// The string payload, or `Error::CastMismatch`.
    pub fn expect_string(&self) -> Result<&str> {
        match self {
            Value::String(value) => Ok(value),
            _ => Err(self.cast_mismatch(Kind::String)),
        }
    }

    /// The data payload, or `Error::CastMismatch`.
    pub fn expect_data(&self) -> Result<&[u8]> {
        match self {
            Value::Data(value) => Ok(value),
            _ => Err(self.cast_mismatch(Kind::Data)),
        }
    }

    /// The date payload, or `Error::CastMismatch`.
    pub fn expect_date(&self) -> Result<DateTime<Utc>> {
        self.as_date().ok_or_else(|| self.cast_mismatch(Kind::Date))
    }

    /// The array payload, or `Error::CastMismatch`.
    pub fn expect_array(&self) -> Result<&Array> {
        match self {
            Value::Array(value) => Ok(value),
            _ => Err(self.cast_mismatch(Kind::Array)),
        }
    }

    /// The array payload mutably, or `Error::CastMismatch`.
    pub fn expect_array_mut(&mut self) -> Result<&mut Array> {
        let kind = self.kind();
        match self {
            Value::Array(value) => Ok(value),
            _ => Err(Error::CastMismatch { requested: Kind::Array, actual: kind }),
        }
    }

    /// The dictionary payload, or `Error::CastMismatch`.
    pub fn expect_dict(&self) -> Result<&Dict> {
        match self {
            Value::Dict(value) => Ok(value),
            _ => Err(self.cast_mismatch(Kind::Dict)),
        }
    }

    /// The dictionary payload mutably, or `Error::CastMismatch`.
    pub fn expect_dict_mut(&mut self) -> Result<&mut Dict> {
        let kind = self.kind();
        match self {
            Value::Dict(value) => Ok(value),
            _ => Err(Error::CastMismatch { requested: Kind::Dict, actual: kind }),
        }
    }

    fn cast_mismatch(&self, requested: Kind) -> Error {
        Error::CastMismatch { requested, actual: self.kind() }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Value::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(Integer::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(Integer::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(Integer::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(OrderedFloat(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Data(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}
