//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

mod de;
mod document;
mod error;
mod options;
mod ser;

pub mod base64;
pub mod xml;

pub mod value;
pub use value::{Array, Dict, Integer, Kind, Value};

pub use de::from_str;
pub use document::{Plist, XML_DECLARATION, XML_DOCTYPE};
pub use error::{Error, Result};
pub use options::ToXmlOptions;
