mod fuzz;

const N: u32 = if cfg!(miri) {
    32
} else if cfg!(debug_assertions) {
    100_000
} else {
    10_000_000
};

macro_rules! test_width {
    ($($name:ident, $t:ident, $seed:expr);*;) => {
        $(
            #[test]
            fn $name() {
                fuzz::mul_oracle::<$t>(N, $seed);
                fuzz::add_oracle::<$t>(N, $seed);
                fuzz::bit_identities::<$t>(N / 4, $seed);
            }
        )*
    };
}

test_width!(
    fuzz_u8, u8, 0;
    fuzz_u16, u16, 1;
    fuzz_u32, u32, 2;
    fuzz_u64, u64, 3;
    fuzz_i8, i8, 4;
    fuzz_i16, i16, 5;
    fuzz_i32, i32, 6;
    fuzz_i64, i64, 7;
);

/// Every pair of 8 bit operands
#[test]
fn exhaustive_8_bit() {
    for r0 in 0..=u8::MAX {
        for r1 in 0..=u8::MAX {
            let (hi, lo) = hilo::multiply_hi_lo(r0, r1);
            assert_eq!(
                ((hi as u16) << 8) | (lo as u16),
                (r0 as u16) * (r1 as u16)
            );
            let (r0, r1) = (r0 as i8, r1 as i8);
            let (hi, lo) = hilo::multiply_hi_lo(r0, r1);
            assert_eq!(
                ((hi as i16) << 8) | (lo as u8 as i16),
                (r0 as i16) * (r1 as i16)
            );
        }
    }
}
