use const_fn::const_fn;
use hilo_internals::*;

use crate::HiLo;

macro_rules! carrying_add_ {
    ($($t:ident),*) => {
        $(
            impl HiLo<$t> {
                /// Add-assigns the bit pattern of `r0` to the low word,
                /// propagating the carry into the high word.
                ///
                /// `r0` is not sign extended, it is added as an unsigned word
                /// regardless of the signedness of the type. The carry is
                /// detected by the sum wrapping around to below either operand.
                /// The high word wraps silently if it has no headroom for the
                /// carry.
                #[const_fn(cfg(feature = "const_support"))]
                pub const fn carrying_add_(&mut self, r0: $t) {
                    *self = self.carrying_add(r0);
                }

                /// Returns `self` with `r0` added as in [HiLo::carrying_add_]
                ///
                /// ```
                /// use hilo_core::HiLo;
                ///
                /// let x = HiLo::<u32>::new(0, 0xffff_ffff).carrying_add(1);
                /// assert_eq!(x, HiLo::new(1, 0));
                /// ```
                #[must_use]
                pub const fn carrying_add(self, r0: $t) -> Self {
                    type U = <$t as SignedToUnsigned>::Unsigned;
                    let lo = Width::<$t>::to_unsigned(self.lo);
                    let r0 = Width::<$t>::to_unsigned(r0);
                    let sum = lo.wrapping_add(r0);
                    let carry = (sum < r0) || (sum < lo);
                    let hi = Width::<$t>::to_unsigned(self.hi).wrapping_add(carry as U);
                    Self {
                        lo: Width::<$t>::from_unsigned(sum),
                        hi: Width::<$t>::from_unsigned(hi),
                    }
                }
            }
        )*
    };
}

carrying_add_!(u8, u16, u32, u64, i8, i16, i32, i64);
