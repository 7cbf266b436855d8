use core::fmt;

use hilo::prelude::*;
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod bit_identities;
mod oracle;

pub use bit_identities::bit_identities;
pub use oracle::{add_oracle, mul_oracle};

/// Checks for equality with a message naming the operation
#[track_caller]
pub fn eq<T: PartialEq + fmt::Debug>(op: &str, lhs: T, rhs: T) {
    if lhs != rhs {
        panic!("`{op}` mismatch:\nlhs: {lhs:?}\nrhs: {rhs:?}");
    }
}

/// A random value generator biased toward the edge cases of the double word
/// algorithms: zero, all ones, the sign bit alone, single bits, and values
/// straddling the half width boundary
pub trait Rand: Int {
    fn rand(rng: &mut Xoshiro128StarStar) -> Self;
}

macro_rules! rand_impl {
    ($($t:ident, $uX:ident);*;) => {
        $(
            impl Rand for $t {
                fn rand(rng: &mut Xoshiro128StarStar) -> Self {
                    const BITS: u32 = $uX::BITS;
                    let r = rng.next_u64() as $uX;
                    let x: $uX = match rng.next_u32() % 8 {
                        0 => 0,
                        1 => $uX::MAX,
                        2 => 1 << (BITS - 1),
                        3 => 1 << (rng.next_u32() % BITS),
                        4 => r >> (rng.next_u32() % BITS),
                        5 => !(r >> (rng.next_u32() % BITS)),
                        // low or high half only
                        6 => r & (((1 as $uX) << (BITS / 2)) - 1),
                        _ => r,
                    };
                    x as $t
                }
            }
        )*
    };
}

rand_impl!(
    u8, u8;
    u16, u16;
    u32, u32;
    u64, u64;
    i8, u8;
    i16, u16;
    i32, u32;
    i64, u64;
);
