use hilo_internals::*;

/// # Bit primitives
///
/// Every operation works on the raw bit pattern of `self`, so a signed type
/// behaves exactly like the unsigned type of the same width with the same
/// bits. The width `W` is `Self::BITS`.
///
/// Method names avoid the inherent methods of the primitives (e.g.
/// `u32::is_power_of_two`), which would otherwise shadow them in method call
/// syntax on concrete types.
pub trait BitOps: Int {
    /// Returns `self & self.wrapping_neg() == self`. This is `true` for
    /// powers of two, but also for zero and for the minimum value of signed
    /// types.
    fn is_pow2(self) -> bool;

    /// Returns `self` modulo `pow2`, computed as `self & (pow2 - 1)`.
    ///
    /// `pow2` must be a nonzero power of two, which is only checked by
    /// `debug_assert!`. As with every other bit primitive, `pow2` is read as
    /// its raw bit pattern, so the signed `MIN` is accepted as the modulus
    /// `2^(W-1)` and the result equals `self.rem_euclid(2^(W-1))`.
    fn mod_pow2(self, pow2: Self) -> Self;

    /// Returns the bit of `self` at `position` left in place, so the result is
    /// either zero or `1 << position`.
    ///
    /// `position < W` is only checked by `debug_assert!`.
    fn bit_extract(self, position: u32) -> Self;

    /// Returns `self` with the bit at `position` replaced by the least
    /// significant bit of `bit`. All other bits are unchanged.
    ///
    /// `position < W` is only checked by `debug_assert!`.
    fn bit_insert(self, bit: Self, position: u32) -> Self;

    /// Reverses the order of all `W` bits
    fn brev(self) -> Self;

    /// Returns the index of the most significant set bit, or `None` if
    /// `self` is zero
    fn leading_bit(self) -> Option<u32>;

    /// Returns the number of leading zero bits, which is `W` for zero
    fn count_leading_zeros(self) -> u32;

    /// Returns the number of set bits
    fn popc(self) -> u32;

    /// Returns the index of the most significant set bit. If `shift_amount`
    /// is set, returns `W - 1 - index` instead, the left shift needed to move
    /// that bit into the most significant position. If `self` is zero,
    /// returns [BFIND_NOT_FOUND] either way.
    #[inline]
    fn bfind(self, shift_amount: bool) -> u32 {
        match self.leading_bit() {
            None => BFIND_NOT_FOUND,
            Some(i) if shift_amount => Self::BITS - 1 - i,
            Some(i) => i,
        }
    }

    /// The same as [BitOps::mod_pow2] except that a zero or non power of two
    /// `pow2` returns an error. The signed `MIN` is the power of two
    /// `2^(W-1)` by its bit pattern and is accepted.
    fn checked_mod_pow2(self, pow2: Self) -> Result<Self, ArgError> {
        if pow2 == Self::default() {
            Err(ArgError::ZeroModulus)
        } else if !pow2.is_pow2() {
            Err(ArgError::NonPowerOfTwoModulus)
        } else {
            Ok(self.mod_pow2(pow2))
        }
    }

    /// The same as [BitOps::bit_extract] except that `position >= W` returns
    /// an error
    fn checked_bit_extract(self, position: u32) -> Result<Self, ArgError> {
        if position < Self::BITS {
            Ok(self.bit_extract(position))
        } else {
            Err(ArgError::InvalidBitPosition)
        }
    }

    /// The same as [BitOps::bit_insert] except that `position >= W` returns
    /// an error
    fn checked_bit_insert(self, bit: Self, position: u32) -> Result<Self, ArgError> {
        if position < Self::BITS {
            Ok(self.bit_insert(bit, position))
        } else {
            Err(ArgError::InvalidBitPosition)
        }
    }
}

/// # Unsigned only bit primitives
pub trait UBitOps: BitOps {
    /// Rounds up to the smallest power of two that is `>= self`. Zero wraps
    /// around to zero.
    ///
    /// `self <= 1 << (W - 1)` is only checked by `debug_assert!`, larger
    /// inputs also wrap to zero.
    fn power_of_two(self) -> Self;

    /// The same as [UBitOps::power_of_two] except that inputs larger than the
    /// largest representable power of two return an error
    fn checked_power_of_two(self) -> Result<Self, ArgError>;
}

macro_rules! bit_ops_ {
    ($($t:ident),*) => {
        $(
            impl BitOps for $t {
                #[inline]
                fn is_pow2(self) -> bool {
                    // `x & -x` isolates the least significant set bit
                    (self & self.wrapping_neg()) == self
                }

                #[inline]
                fn mod_pow2(self, pow2: Self) -> Self {
                    debug_assert!(pow2 != 0, "`mod_pow2` with a zero modulus");
                    debug_assert!(pow2.is_pow2(), "`mod_pow2` with a non power of two modulus");
                    self & pow2.wrapping_sub(1)
                }

                #[inline]
                fn bit_extract(self, position: u32) -> Self {
                    debug_assert!(position < $t::BITS, "`bit_extract` position out of range");
                    (self.wrapping_shr(position) & 1).wrapping_shl(position)
                }

                #[inline]
                fn bit_insert(self, bit: Self, position: u32) -> Self {
                    debug_assert!(position < $t::BITS, "`bit_insert` position out of range");
                    let mask = (1 as $t).wrapping_shl(position);
                    (self & !mask) | (bit & 1).wrapping_shl(position)
                }

                fn brev(self) -> Self {
                    let msb = $t::BITS - 1;
                    let mut res: $t = 0;
                    for i in 0..$t::BITS {
                        // move the mirrored bit down to the lsb before inserting it
                        let bit = self.bit_extract(msb - i).wrapping_shr(msb - i);
                        res = res.bit_insert(bit, i);
                    }
                    res
                }

                #[inline]
                fn leading_bit(self) -> Option<u32> {
                    if self == 0 {
                        None
                    } else {
                        Some($t::BITS - 1 - self.leading_zeros())
                    }
                }

                #[inline]
                fn count_leading_zeros(self) -> u32 {
                    self.leading_zeros()
                }

                #[inline]
                fn popc(self) -> u32 {
                    self.count_ones()
                }
            }
        )*
    };
}

bit_ops_!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! ubit_ops_ {
    ($($t:ident),*) => {
        $(
            impl UBitOps for $t {
                fn power_of_two(self) -> Self {
                    debug_assert!(
                        self <= (1 << ($t::BITS - 1)),
                        "`power_of_two` input has no representable power of two above it"
                    );
                    // smear the most significant set bit of `self - 1` into every lower
                    // position, then the increment carries into the next power
                    let mut x = self.wrapping_sub(1);
                    let mut shift = 1;
                    while shift < $t::BITS {
                        x |= x >> shift;
                        shift <<= 1;
                    }
                    x.wrapping_add(1)
                }

                fn checked_power_of_two(self) -> Result<Self, ArgError> {
                    if self > (1 << ($t::BITS - 1)) {
                        Err(ArgError::PowerOfTwoOverflow)
                    } else {
                        Ok(self.power_of_two())
                    }
                }
            }
        )*
    };
}

ubit_ops_!(u8, u16, u32, u64);

/// Returns if `value` is a power of two, zero, or the minimum value of a signed
/// type. See [BitOps::is_pow2].
///
/// ```
/// use hilo_core::is_power_of_two;
///
/// assert!(is_power_of_two(64u8));
/// assert!(!is_power_of_two(-64i8));
/// assert!(!is_power_of_two(96u32));
/// // kept for compatibility with existing call sites
/// assert!(is_power_of_two(0u64));
/// ```
#[inline]
pub fn is_power_of_two<T: BitOps>(value: T) -> bool {
    value.is_pow2()
}

/// Rounds `value` up to the next power of two. See [UBitOps::power_of_two].
///
/// ```
/// use hilo_core::power_of_two;
///
/// assert_eq!(power_of_two(1u32), 1);
/// assert_eq!(power_of_two(17u32), 32);
/// assert_eq!(power_of_two(0x8000_0000u32), 0x8000_0000);
/// assert_eq!(power_of_two(100u8), 128);
/// ```
#[inline]
pub fn power_of_two<T: UBitOps>(value: T) -> T {
    value.power_of_two()
}

/// Returns `value` modulo the power of two `pow2`. See [BitOps::mod_pow2].
#[inline]
pub fn mod_power_of_two<T: BitOps>(value: T, pow2: T) -> T {
    value.mod_pow2(pow2)
}

/// Returns the bit of `value` at `position`, left in place. See
/// [BitOps::bit_extract].
#[inline]
pub fn bit_extract<T: BitOps>(value: T, position: u32) -> T {
    value.bit_extract(position)
}

/// Replaces the bit of `value` at `position` with the lsb of `bit`. See
/// [BitOps::bit_insert].
#[inline]
pub fn bit_insert<T: BitOps>(value: T, bit: T, position: u32) -> T {
    value.bit_insert(bit, position)
}

/// Reverses the bits of `value`
///
/// ```
/// use hilo_core::brev;
///
/// assert_eq!(brev(0b0000_0110u8), 0b0110_0000);
/// assert_eq!(brev(1i16), i16::MIN);
/// ```
#[inline]
pub fn brev<T: BitOps>(value: T) -> T {
    value.brev()
}

/// Finds the most significant set bit of `value`. See [BitOps::bfind].
///
/// ```
/// use hilo_core::{bfind, BFIND_NOT_FOUND};
///
/// assert_eq!(bfind(0x10u32, false), 4);
/// assert_eq!(bfind(0x10u32, true), 27);
/// assert_eq!(bfind(-1i8, false), 7);
/// assert_eq!(bfind(0u16, true), BFIND_NOT_FOUND);
/// ```
#[inline]
pub fn bfind<T: BitOps>(value: T, shift_amount: bool) -> u32 {
    value.bfind(shift_amount)
}

/// Returns the number of leading zeros of `value`
#[inline]
pub fn count_leading_zeros<T: BitOps>(value: T) -> u32 {
    value.count_leading_zeros()
}

/// Returns the number of set bits in `value`
#[inline]
pub fn popc<T: BitOps>(value: T) -> u32 {
    value.popc()
}
