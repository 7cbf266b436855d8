//! Width generic bit primitives and double word integer arithmetic over
//! `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, and `i64`.
//!
//! ```
//! use hilo::prelude::*;
//!
//! // the full product of two words, without a wider native type
//! let (hi, lo) = multiply_hi_lo(0xdead_beefu32, 0x1234_5678);
//! assert_eq!(
//!     ((hi as u64) << 32) | (lo as u64),
//!     0xdead_beefu64 * 0x1234_5678
//! );
//! // carry a word into the pair
//! assert_eq!(add_hi_lo(hi, u32::MAX, 1), (hi + 1, 0));
//!
//! assert_eq!(brev(0b1u8), 0b1000_0000);
//! assert_eq!(bfind(0x0100u16, false), 8);
//! assert_eq!(popc(-1i64), 64);
//! assert_eq!(bit_extract(0b1010u8, 3), 0b1000);
//! assert_eq!(0b1010u8.checked_bit_insert(1, 8), Err(ArgError::InvalidBitPosition));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use hilo_core::*;

pub mod prelude {
    pub use hilo_core::prelude::*;
}
