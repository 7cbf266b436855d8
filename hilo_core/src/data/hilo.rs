use core::fmt;

use hilo_internals::*;

/// A double word integer made of two words of the same primitive type `T`.
///
/// `lo` holds the least significant `T::BITS` bits of the represented value
/// as a raw bit pattern, and `hi` holds the most significant `T::BITS` bits.
/// If `T` is signed, the pair is a `2 * T::BITS` wide two's complement
/// integer whose sign is the sign of `hi`. Note that this means `lo` is
/// negative whenever its top bit is set, regardless of the sign of the whole
/// value.
///
/// Pairs are plain values. They are produced by `multiply_hi_lo` and
/// `add_hi_lo` and are never stored internally.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HiLo<T> {
    /// The least significant word
    pub lo: T,
    /// The most significant word
    pub hi: T,
}

impl<T: Int> HiLo<T> {
    /// Creates a pair from its high and low words. Note the argument order
    /// matches `(hi, lo)` tuples, not the field order.
    #[inline]
    pub const fn new(hi: T, lo: T) -> Self {
        Self { lo, hi }
    }

    /// Returns the `(hi, lo)` tuple
    #[inline]
    pub fn hi_lo(self) -> (T, T) {
        (self.hi, self.lo)
    }

    /// Writes `hi:lo` with `g` formatting each word. Formatter flags such as
    /// the width apply to each word separately.
    pub(crate) fn fmt_radix<F>(&self, f: &mut fmt::Formatter, g: F) -> fmt::Result
    where
        F: Fn(&T, &mut fmt::Formatter) -> fmt::Result,
    {
        g(&self.hi, f)?;
        f.write_str(":")?;
        g(&self.lo, f)
    }
}

impl<T: Int> fmt::Debug for HiLo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HiLo")
            .field("hi", &self.hi)
            .field("lo", &self.lo)
            .finish()
    }
}

forward_debug_fmt!(HiLo<T: Int>);

impl<T: Int> From<(T, T)> for HiLo<T> {
    /// Converts from a `(hi, lo)` tuple
    #[inline]
    fn from(x: (T, T)) -> Self {
        Self::new(x.0, x.1)
    }
}

macro_rules! wide_ {
    ($($t:ident, $uX:ident, $wide:ident);*;) => {
        $(
            impl HiLo<$t> {
                /// Splits a native double width integer into its words
                #[inline]
                pub const fn from_wide(x: $wide) -> Self {
                    Self {
                        lo: x as $t,
                        hi: (x >> $t::BITS) as $t,
                    }
                }

                /// Reassembles the native double width integer. The low word
                /// is always zero extended and the high word determines the
                /// sign.
                #[inline]
                pub const fn to_wide(self) -> $wide {
                    ((self.hi as $wide) << $t::BITS) | (self.lo as $uX as $wide)
                }
            }
        )*
    };
}

wide_!(
    u8, u8, u16;
    u16, u16, u32;
    u32, u32, u64;
    u64, u64, u128;
    i8, u8, i16;
    i16, u16, i32;
    i32, u32, i64;
    i64, u64, i128;
);
