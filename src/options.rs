//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

/// The default indent unit: one tab per depth level.
pub const INDENT_STRING: &str = "\t";

/// The default line separator.
pub const NEWLINE_STRING: &str = "\n";

/// The default `<data>` wrap width, in Base64 characters per line.
pub const DATA_COLUMNS: i32 = 68;

/// Whether content directly under `<plist>` is indented by default.
pub const INDENT_ROOT: bool = false;

/// Formatting options applied while encoding a value tree to XML text.
///
/// Override individual fields with struct update syntax:
///
/// ```
/// use plist_xml::ToXmlOptions;
///
/// let options = ToXmlOptions {
///     indent_string: "  ".to_string(),
///     ..ToXmlOptions::default()
/// };
/// assert_eq!(options.data_columns, 68);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ToXmlOptions {
    /// The indent unit, repeated once per depth level.
    pub indent_string: String,
    /// The line separator between emitted lines.
    pub newline_string: String,
    /// Wrap width for `<data>` content; zero or negative emits one line.
    pub data_columns: i32,
    /// Whether the value directly under `<plist>` starts at depth 1.
    pub indent_root: bool,
}

impl Default for ToXmlOptions {
    fn default() -> Self {
        ToXmlOptions {
            indent_string: INDENT_STRING.to_string(),
            newline_string: NEWLINE_STRING.to_string(),
            data_columns: DATA_COLUMNS,
            indent_root: INDENT_ROOT,
        }
    }
}
