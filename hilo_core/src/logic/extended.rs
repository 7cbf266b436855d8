use hilo_internals::*;

use crate::HiLo;

/// # Double word arithmetic
///
/// Generic access to the per-width [HiLo::widening_mul] and
/// [HiLo::carrying_add] functions. The method names differ from those to stay
/// clear of the unstable inherent `widening_mul` and `carrying_add` methods
/// of the primitives.
pub trait ExtendedArith: Int {
    /// Returns the exact double width product of `self` and `rhs`
    fn mul_hi_lo(self, rhs: Self) -> HiLo<Self>;

    /// Adds the bit pattern of `r0` into the low word of `pair`, carrying
    /// into the high word
    fn add_hi_lo(pair: HiLo<Self>, r0: Self) -> HiLo<Self>;
}

macro_rules! extended_arith_ {
    ($($t:ident),*) => {
        $(
            impl ExtendedArith for $t {
                #[inline]
                fn mul_hi_lo(self, rhs: Self) -> HiLo<Self> {
                    HiLo::<$t>::widening_mul(self, rhs)
                }

                #[inline]
                fn add_hi_lo(pair: HiLo<Self>, r0: Self) -> HiLo<Self> {
                    pair.carrying_add(r0)
                }
            }
        )*
    };
}

extended_arith_!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Multiplies `r0` by `r1` and returns the exact double width product as a
/// `(hi, lo)` tuple. This never overflows, and works for every width and
/// signedness including the `MIN * -1` case.
///
/// ```
/// use hilo_core::multiply_hi_lo;
///
/// assert_eq!(multiply_hi_lo(i32::MIN, -1), (0, i32::MIN));
/// assert_eq!(multiply_hi_lo(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
/// assert_eq!(multiply_hi_lo(-3i8, 5), (-1, -15));
/// ```
#[inline]
pub fn multiply_hi_lo<T: ExtendedArith>(r0: T, r1: T) -> (T, T) {
    r0.mul_hi_lo(r1).hi_lo()
}

/// Adds `r0` into the low word of the double word `(hi, lo)` and returns the
/// new `(hi, lo)`. The carry out of the low word is propagated into `hi`. `r0`
/// is added as an unsigned word, it is not sign extended.
///
/// ```
/// use hilo_core::add_hi_lo;
///
/// assert_eq!(add_hi_lo(0u32, 0xffff_ffff, 1), (1, 0));
/// assert_eq!(add_hi_lo(5u8, 3, 4), (5, 7));
/// ```
#[inline]
pub fn add_hi_lo<T: ExtendedArith>(hi: T, lo: T, r0: T) -> (T, T) {
    T::add_hi_lo(HiLo::new(hi, lo), r0).hi_lo()
}
