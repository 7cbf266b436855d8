//! Caller contract violations

use core::fmt;

/// A violated precondition, as reported by the `checked_*` family of
/// functions. The unchecked functions only `debug_assert!` the same
/// conditions, and produce an unspecified (but memory safe) value in release
/// builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArgError {
    /// A bit position was not in the range `0..W`, where `W` is the bitwidth
    /// of the integer type being operated on
    InvalidBitPosition,
    /// A modulus of zero was passed to `mod_power_of_two`
    ZeroModulus,
    /// A modulus that is not a power of two was passed to `mod_power_of_two`
    NonPowerOfTwoModulus,
    /// The input to `power_of_two` is larger than the largest power of two
    /// representable by the type, so rounding up would wrap around to zero
    PowerOfTwoOverflow,
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArgError {}

#[test]
fn display_is_variant_name() {
    extern crate std;
    use std::string::ToString;

    assert_eq!(ArgError::ZeroModulus.to_string(), "ZeroModulus");
    assert_eq!(
        ArgError::InvalidBitPosition.to_string(),
        "InvalidBitPosition"
    );
}
