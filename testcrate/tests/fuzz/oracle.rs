//! The double word functions checked against native double width arithmetic

use hilo::prelude::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use super::{eq, Rand};

/// Reassembly of a pair into the native double width type and the reference
/// arithmetic done in that type
pub trait Wide: ExtendedArith + Rand {
    type W: Copy + PartialEq + core::fmt::Debug;

    fn pair_to_wide(pair: HiLo<Self>) -> Self::W;

    fn wide_mul(r0: Self, r1: Self) -> Self::W;

    /// `hi:lo + zero_extend(r0)`, wrapping at twice the width
    fn wide_add(hi: Self, lo: Self, r0: Self) -> Self::W;
}

macro_rules! wide_impl {
    ($($t:ident, $uX:ident, $wide:ident);*;) => {
        $(
            impl Wide for $t {
                type W = $wide;

                fn pair_to_wide(pair: HiLo<Self>) -> $wide {
                    pair.to_wide()
                }

                fn wide_mul(r0: Self, r1: Self) -> $wide {
                    // cannot overflow, even for `MIN * MIN`
                    (r0 as $wide) * (r1 as $wide)
                }

                fn wide_add(hi: Self, lo: Self, r0: Self) -> $wide {
                    HiLo::<$t>::new(hi, lo)
                        .to_wide()
                        .wrapping_add(r0 as $uX as $wide)
                }
            }
        )*
    };
}

wide_impl!(
    u8, u8, u16;
    u16, u16, u32;
    u32, u32, u64;
    u64, u64, u128;
    i8, u8, i16;
    i16, u16, i32;
    i32, u32, i64;
    i64, u64, i128;
);

pub fn mul_oracle<T: Wide>(n: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let r0 = T::rand(&mut rng);
        let r1 = T::rand(&mut rng);
        let (hi, lo) = multiply_hi_lo(r0, r1);
        eq(
            "multiply_hi_lo",
            T::pair_to_wide(HiLo::new(hi, lo)),
            T::wide_mul(r0, r1),
        );
        // commutativity
        eq("multiply_hi_lo", multiply_hi_lo(r1, r0), (hi, lo));
    }
}

pub fn add_oracle<T: Wide>(n: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let hi = T::rand(&mut rng);
        let lo = T::rand(&mut rng);
        let r0 = T::rand(&mut rng);
        let (hi1, lo1) = add_hi_lo(hi, lo, r0);
        eq(
            "add_hi_lo",
            T::pair_to_wide(HiLo::new(hi1, lo1)),
            T::wide_add(hi, lo, r0),
        );
        // the inherent and trait forms agree
        let mut pair = HiLo::new(hi, lo);
        pair = T::add_hi_lo(pair, r0);
        eq("add_hi_lo", pair.hi_lo(), (hi1, lo1));
    }
}
