//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
};

/// Recognizes the complete text of an `<integer>` element:
/// an optional sign followed by one or more decimal digits.
pub fn integer_literal(input: &str) -> IResult<&str, &str> {
    all_consuming(
        recognize(pair(opt(one_of("+-")), digit1))
    )(input)
}

/// Recognizes the complete text of a `<real>` element:
/// an optional sign, then either a run of digits or an optional run of
/// digits followed by a decimal point and at least one digit.
///
/// # Notes
///
/// 1. A bare trailing dot (`"1."`) is rejected.
/// 2. A leading dot with digits (`".5"`) is accepted.
pub fn real_literal(input: &str) -> IResult<&str, &str> {
    all_consuming(
        recognize(pair(
            opt(one_of("+-")),
            alt((
                recognize(tuple((digit0, char('.'), digit1))),
                digit1,
            )),
        ))
    )(input)
}
