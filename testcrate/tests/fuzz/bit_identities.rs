use core::ops::{Not, Shr};

use hilo::{prelude::*, BFIND_NOT_FOUND};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use super::{eq, Rand};

/// Checks the identities relating the bit primitives to each other and to the
/// native intrinsics
pub fn bit_identities<T>(n: u32, seed: u64)
where
    T: BitOps + Rand + Not<Output = T> + Shr<u32, Output = T>,
{
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let w = T::BITS;
    for _ in 0..n {
        let x = T::rand(&mut rng);
        let pos = rng.next_u32() % w;

        // extract and insert are inverses
        let bit = x.bit_extract(pos);
        eq("bit_extract", bit.popc() <= 1, true);
        eq(
            "bit_insert",
            x.bit_insert(bit_extract(x, pos) >> pos, pos),
            x,
        );
        // inserting a bit and extracting it again
        let y = T::rand(&mut rng);
        let inserted = x.bit_insert(y, pos);
        eq(
            "bit_insert",
            inserted.bit_extract(pos) == T::default(),
            y.bit_extract(0) == T::default(),
        );
        eq("bit_insert", (inserted.popc() as i64 - x.popc() as i64).abs() <= 1, true);

        // reversal
        let r = x.brev();
        eq("brev", r.brev(), x);
        eq("brev", r.popc(), x.popc());
        if x != T::default() {
            // the msb of `x` becomes the lsb of `r`
            eq("brev", r.bit_extract(w - 1 - bfind(x, false)) != T::default(), true);
        }

        // counting
        eq("popc", x.popc() + (!x).popc(), w);
        let lz = x.count_leading_zeros();
        eq("count_leading_zeros", lz <= w, true);
        match x.leading_bit() {
            None => {
                eq("count_leading_zeros", lz, w);
                eq("bfind", x.bfind(false), BFIND_NOT_FOUND);
                eq("bfind", x.bfind(true), BFIND_NOT_FOUND);
            }
            Some(i) => {
                eq("bfind", x.bfind(false), i);
                eq("bfind", x.bfind(false) + 1 + lz, w);
                eq("bfind", x.bfind(true), lz);
                eq("bfind", x.bit_extract(i) != T::default(), true);
            }
        }

        // power of two moduli
        let p = T::default().bit_insert(!T::default(), pos);
        eq("is_pow2", p.is_pow2(), true);
        let m = x.mod_pow2(p);
        eq("mod_pow2", x.checked_mod_pow2(p), Ok(m));
        eq("mod_pow2", m.count_leading_zeros() >= w - pos, true);
        eq("mod_pow2", m.popc() <= pos, true);
    }
}
