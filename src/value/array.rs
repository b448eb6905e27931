//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use std::slice;

use crate::error::{Error, Result};
use crate::value::Value;

/// A plist `<array>` payload: an ordered sequence of values.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Creates an empty array.
    pub fn new() -> Array {
        Array { items: Vec::new() }
    }

    /// Number of values in the array.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The value at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// The value at `index` mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// The value at `index`, or `Error::IndexOutOfBounds`.
    pub fn try_get(&self, index: usize) -> Result<&Value> {
        let len = self.items.len();
        self.items.get(index).ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Replaces the value at `index`, or fails with `Error::IndexOutOfBounds`.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Appends a value to the end of the array.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Removes and returns the last value, or `None` if empty.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Removes and returns the last value, or `Error::EmptyCollection`.
    pub fn try_pop(&mut self) -> Result<Value> {
        self.items.pop().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the first value, or `None` if empty.
    pub fn shift(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Removes and returns the first value, or `Error::EmptyCollection`.
    pub fn try_shift(&mut self) -> Result<Value> {
        self.shift().ok_or(Error::EmptyCollection)
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates the values in order.
    pub fn iter(&self) -> slice::Iter<Value> {
        self.items.iter()
    }

    /// Iterates the values in order, mutably.
    pub fn iter_mut(&mut self) -> slice::IterMut<Value> {
        self.items.iter_mut()
    }

    /// The values as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Consumes the array, returning the backing vector.
    pub fn into_inner(self) -> Vec<Value> {
        self.items
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array { items }
    }
}

impl std::iter::FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
