#![no_std]
#![no_main]
#![feature(const_mut_refs)]

extern crate panic_halt;

use hilo::prelude::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use riscv_minimal_rt::entry;

const fn const_carry() -> HiLo<u32> {
    let mut x = HiLo::<u32>::new(0, u32::MAX);
    x.carrying_add_(1);
    x
}

#[entry]
fn main() -> ! {
    // 64 bit words on a 32 bit target
    assert_eq!(multiply_hi_lo(i64::MIN, -1), (0, i64::MIN));
    assert_eq!(multiply_hi_lo(u64::MAX, 2), (1, u64::MAX - 1));
    assert_eq!(add_hi_lo(0u64, u64::MAX, 1), (1, 0));
    assert_eq!(const_carry(), HiLo::new(1, 0));

    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let mut x = HiLo::<u64>::default();
    x.rand_assign_using(&mut rng).unwrap();
    let (hi, lo) = multiply_hi_lo(x.hi, x.lo);
    assert_eq!(
        HiLo::new(hi, lo).to_wide(),
        (x.hi as u128) * (x.lo as u128)
    );

    assert_eq!(brev(1u64), 1 << 63);
    assert_eq!(bfind(0u32, false), hilo::BFIND_NOT_FOUND);
    assert_eq!(popc(-1i16), 16);
    assert_eq!(power_of_two(5u8), 8);
    assert_eq!(
        7u32.checked_mod_pow2(3),
        Err(ArgError::NonPowerOfTwoModulus)
    );

    panic!("main is not allowed to return")
}
