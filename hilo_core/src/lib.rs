//! Width generic bit primitives and double word integer arithmetic
//!
//! This is the core library of the `hilo` system of crates. It is strictly
//! `no-std` and `no-alloc`. Everything here is a pure function over the
//! primitive integers `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, and
//! `i64`. Width and signedness are selected by the type of the arguments, so
//! the same algorithm is monomorphized for every width without branching on
//! it at runtime.
//!
//! Functions with preconditions (bit positions in range, power of two moduli)
//! only `debug_assert!` them. Each has a `checked_*` counterpart returning a
//! `Result<_, ArgError>` for validating untrusted input.

#![cfg_attr(feature = "const_support", feature(const_mut_refs))]
#![no_std]

pub use hilo_internals::{ArgError, Int, SignedToUnsigned, Width, BFIND_NOT_FOUND};

pub(crate) mod data;
pub use data::HiLo;

mod logic;
pub use logic::{
    add_hi_lo, bfind, bit_extract, bit_insert, brev, count_leading_zeros, is_power_of_two,
    mod_power_of_two, multiply_hi_lo, popc, power_of_two, BitOps, ExtendedArith, UBitOps,
};

pub mod prelude {
    pub use crate::{
        add_hi_lo, bfind, bit_extract, bit_insert, brev, count_leading_zeros, is_power_of_two,
        mod_power_of_two, multiply_hi_lo, popc, power_of_two, ArgError, BitOps, ExtendedArith,
        HiLo, Int, UBitOps,
    };
}
