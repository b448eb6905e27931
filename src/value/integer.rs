//
// Copyright 2026 plist-xml Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{self, Display};

use num_bigint::BigInt;

/// The largest magnitude held in the exact machine-integer representation.
///
/// Values beyond this are stored as arbitrary-precision integers so that
/// no digits are lost crossing the 2^53 boundary of IEEE 754 doubles, the
/// precision ceiling of other plist tooling this crate interoperates with.
pub const MAX_EXACT: i64 = 0x1F_FFFF_FFFF_FFFF;

/// A plist `<integer>` payload.
///
/// The representation is canonical: a magnitude of at most [`MAX_EXACT`]
/// always occupies the exact machine-integer arm, anything larger the
/// arbitrary-precision arm. Constructors enforce this, so two equal
/// numbers always compare equal and only true integers are representable.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Integer(Repr);

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
enum Repr {
    Exact(i64),
    Big(BigInt),
}

impl Integer {
    /// Whether the value is held in the exact machine-integer arm.
    pub fn is_exact(&self) -> bool {
        match self.0 {
            Repr::Exact(_) => true,
            Repr::Big(_) => false,
        }
    }

    /// The value as an exact machine integer, if within the safe range.
    pub fn as_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::Exact(value) => Some(value),
            Repr::Big(_) => None,
        }
    }

    /// The value as an arbitrary-precision integer, whichever arm is active.
    pub fn to_bigint(&self) -> BigInt {
        match &self.0 {
            Repr::Exact(value) => BigInt::from(*value),
            Repr::Big(value) => value.clone(),
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        if value >= -MAX_EXACT && value <= MAX_EXACT {
            Integer(Repr::Exact(value))
        } else {
            Integer(Repr::Big(BigInt::from(value)))
        }
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(exact) if exact >= -MAX_EXACT && exact <= MAX_EXACT =>
                Integer(Repr::Exact(exact)),
            _ => Integer(Repr::Big(value)),
        }
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Integer::from(i64::from(value))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Exact(a), Repr::Exact(b)) => a.cmp(b),
            (Repr::Big(a), Repr::Big(b)) => a.cmp(b),
            _ => self.to_bigint().cmp(&other.to_bigint()),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Integer {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Repr::Exact(value) => Display::fmt(value, formatter),
            Repr::Big(value) => Display::fmt(value, formatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use num_bigint::BigInt;

    use super::{Integer, MAX_EXACT};

    #[test]
    fn test_exact_range_boundary() {
        assert!(Integer::from(MAX_EXACT).is_exact());
        assert!(Integer::from(-MAX_EXACT).is_exact());
        assert!(!Integer::from(MAX_EXACT + 1).is_exact());
        assert!(!Integer::from(-MAX_EXACT - 1).is_exact());
    }

    #[test]
    fn test_big_demotion() {
        // A BigInt within the safe range canonicalizes to the exact arm.
        let small = Integer::from(BigInt::from(42));
        assert_eq!(small, Integer::from(42i64));
        assert_eq!(small.as_i64(), Some(42));
    }

    #[test]
    fn test_round_trips_through_bigint() {
        let big = Integer::from(BigInt::from_str("9007199254740992").unwrap());
        assert_eq!(big.as_i64(), None);
        assert_eq!(big.to_bigint().to_string(), "9007199254740992");
    }

    #[test]
    fn test_numeric_ordering_across_arms() {
        let small_neg = Integer::from(BigInt::from_str("-9007199254740992").unwrap());
        let exact = Integer::from(-5i64);
        let big_pos = Integer::from(MAX_EXACT + 1);
        assert!(small_neg < exact);
        assert!(exact < big_pos);
        assert!(small_neg < big_pos);
    }

    #[test]
    fn test_display() {
        assert_eq!(Integer::from(-42i64).to_string(), "-42");
        assert_eq!(Integer::from(MAX_EXACT + 1).to_string(), "9007199254740992");
    }
}
