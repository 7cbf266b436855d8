use crate::HiLo;

macro_rules! rand_ {
    ($($t:ident, $wide:ident);*;) => {
        $(
            /// `rand_support` functions
            impl HiLo<$t> {
                /// Randomly-assigns both words using a `rand_core::RngCore`
                /// random number generator. This works by calling
                /// `RngCore::try_fill_bytes` on a buffer the size of the
                /// double width integer. `self` is left unchanged on error.
                ///
                /// ```
                /// // Example using the `rand_xoshiro` crate.
                /// use hilo_core::HiLo;
                /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
                ///
                /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
                /// let mut x = HiLo::<u16>::default();
                /// x.rand_assign_using(&mut rng).unwrap();
                /// let y = x;
                /// x.rand_assign_using(&mut rng).unwrap();
                /// assert_ne!(x, y);
                /// ```
                pub fn rand_assign_using<R>(&mut self, rng: &mut R) -> Result<(), rand_core::Error>
                where
                    R: rand_core::RngCore,
                {
                    let mut buf = [0u8; ($wide::BITS / u8::BITS) as usize];
                    rng.try_fill_bytes(&mut buf)?;
                    *self = Self::from_wide($wide::from_le_bytes(buf));
                    Ok(())
                }
            }
        )*
    };
}

rand_!(
    u8, u16;
    u16, u32;
    u32, u64;
    u64, u128;
    i8, i16;
    i16, i32;
    i32, i64;
    i64, i128;
);
