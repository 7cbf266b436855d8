mod bitwise;
mod extended;
mod mul;
#[cfg(feature = "rand_support")]
mod rand;
mod sum;

pub use bitwise::{
    bfind, bit_extract, bit_insert, brev, count_leading_zeros, is_power_of_two,
    mod_power_of_two, popc, power_of_two, BitOps, UBitOps,
};
pub use extended::{add_hi_lo, multiply_hi_lo, ExtendedArith};
