//! This crate contains common developer utilities for crates within the `hilo`
//! system: the type level width traits that every algorithm in `hilo_core` is
//! written against, the `ArgError` type, and macros that needed a separate
//! crate because `#[macro_export]` unconditionally causes macros to be
//! publicly accessible.
//!
//! There is a reexport of the commonly needed items in `hilo_core` and `hilo`.

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod macros;
mod width;

pub use error::ArgError;
pub use width::{Int, SignedToUnsigned, Width};

/// The sentinel returned by `bfind` when no bit is set. It is `-1`
/// reinterpreted as an unsigned `u32`.
pub const BFIND_NOT_FOUND: u32 = u32::MAX;
