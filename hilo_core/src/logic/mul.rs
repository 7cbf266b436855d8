use hilo_internals::*;

use crate::HiLo;

macro_rules! widening_mul_ {
    ($($t:ident),*) => {
        $(
            impl HiLo<$t> {
                /// Returns the exact `2 * W` bit product of `r0` and `r1`.
                ///
                /// No wider native type is used. Each operand is split into
                /// two half width digits, the four partial products are formed
                /// (none of which can overflow a word), and they are summed one
                /// column at a time with every carry moved across the half
                /// width boundary explicitly. Signed operands are multiplied by
                /// magnitude in the unsigned counterpart type, where even
                /// `|MIN|` is representable, and the double word product is
                /// negated afterwards if exactly one operand was negative.
                ///
                /// ```
                /// use hilo_core::HiLo;
                ///
                /// let x = HiLo::<i32>::widening_mul(i32::MIN, -1);
                /// assert_eq!(x, HiLo::new(0, i32::MIN));
                /// assert_eq!(x.to_wide(), 1i64 << 31);
                /// ```
                pub const fn widening_mul(r0: $t, r1: $t) -> Self {
                    type U = <$t as SignedToUnsigned>::Unsigned;
                    const BITS: u32 = <$t as Int>::BITS;
                    const HALF: u32 = BITS / 2;
                    const MASK: U = ((1 as U) << HALF) - 1;

                    let neg0 = Width::<$t>::is_negative(r0);
                    let neg1 = Width::<$t>::is_negative(r1);
                    let r0 = Width::<$t>::to_unsigned(r0);
                    let r1 = Width::<$t>::to_unsigned(r1);
                    let m0 = if neg0 { r0.wrapping_neg() } else { r0 };
                    let m1 = if neg1 { r1.wrapping_neg() } else { r1 };

                    //         [a] [b]
                    //         [c] [d]
                    //   X_____________
                    //         [--db--]
                    //     [--da--]
                    //     [--cb--]
                    // [--ca--]
                    let a = m0 >> HALF;
                    let b = m0 & MASK;
                    let c = m1 >> HALF;
                    let d = m1 & MASK;
                    let db = d * b;
                    let da = d * a;
                    let cb = c * b;
                    let ca = c * a;

                    // the middle column is less than `3 << HALF`, so it fits
                    let mid = (db >> HALF) + (da & MASK) + (cb & MASK);
                    let lo = (db & MASK) | ((mid & MASK) << HALF);
                    // the true product fits in two words, so this cannot overflow
                    let hi = ca + (da >> HALF) + (cb >> HALF) + (mid >> HALF);

                    if neg0 != neg1 {
                        // `!x + 1` across both words, the low word only carries
                        // out if it is zero
                        Self {
                            lo: Width::<$t>::from_unsigned(lo.wrapping_neg()),
                            hi: Width::<$t>::from_unsigned((!hi).wrapping_add((lo == 0) as U)),
                        }
                    } else {
                        Self {
                            lo: Width::<$t>::from_unsigned(lo),
                            hi: Width::<$t>::from_unsigned(hi),
                        }
                    }
                }
            }
        )*
    };
}

widening_mul_!(u8, u16, u32, u64, i8, i16, i32, i64);
