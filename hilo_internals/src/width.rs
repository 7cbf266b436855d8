//! Type level width information
//!
//! Only `u8`, `u16`, `u32`, `u64` and their signed counterparts implement
//! these traits. Using any other type with a `hilo` function is a compile time
//! error rather than a runtime one.

use core::{fmt, hash::Hash, marker::PhantomData};

/// Maps an integer type to the unsigned integer type of the same bitwidth.
/// Unsigned types map to themselves.
///
/// The double word algorithms do all of their intermediate arithmetic in
/// `Self::Unsigned`, where overflow is defined to wrap, and only reinterpret
/// back into `Self` at the very end. The conversions and the sign test
/// themselves are the `const fn`s of [Width].
pub trait SignedToUnsigned: Copy {
    type Unsigned: Copy + Eq + Ord + fmt::Debug;
}

/// Per width `const fn` counterparts of the width traits, usable from the
/// `const` algorithms where trait methods are not callable.
///
/// ```
/// use hilo_internals::Width;
///
/// assert!(Width::<i8>::is_negative(-1));
/// assert!(!Width::<u8>::is_negative(0xff));
/// assert_eq!(Width::<i16>::to_unsigned(-1), u16::MAX);
/// assert_eq!(Width::<i32>::from_unsigned(1 << 31), i32::MIN);
/// ```
pub struct Width<T>(PhantomData<T>);

/// A fixed width primitive integer supported by the `hilo` crates
pub trait Int:
    SignedToUnsigned
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Octal
    + fmt::Binary
{
    /// Bitwidth of the type
    const BITS: u32;
    /// If the type is interpreted as two's complement
    const SIGNED: bool;
}

macro_rules! width_traits {
    ($($iX:ident, $uX:ident);*;) => {
        $(
            impl SignedToUnsigned for $iX {
                type Unsigned = $uX;
            }

            impl SignedToUnsigned for $uX {
                type Unsigned = $uX;
            }

            impl Width<$iX> {
                /// Returns if `x < 0`
                #[inline]
                pub const fn is_negative(x: $iX) -> bool {
                    x < 0
                }

                /// Reinterprets the bits of `x` as the unsigned counterpart
                #[inline]
                pub const fn to_unsigned(x: $iX) -> $uX {
                    x as $uX
                }

                /// Reinterprets the bits of `x` as the signed type
                #[inline]
                pub const fn from_unsigned(x: $uX) -> $iX {
                    x as $iX
                }
            }

            impl Width<$uX> {
                /// Always `false`
                #[inline]
                pub const fn is_negative(_x: $uX) -> bool {
                    false
                }

                #[inline]
                pub const fn to_unsigned(x: $uX) -> $uX {
                    x
                }

                #[inline]
                pub const fn from_unsigned(x: $uX) -> $uX {
                    x
                }
            }

            impl Int for $iX {
                const BITS: u32 = $iX::BITS;
                const SIGNED: bool = true;
            }

            impl Int for $uX {
                const BITS: u32 = $uX::BITS;
                const SIGNED: bool = false;
            }
        )*
    };
}

width_traits!(
    i8, u8;
    i16, u16;
    i32, u32;
    i64, u64;
);

#[test]
fn unsigned_counterpart() {
    assert_eq!(Width::<i8>::to_unsigned(i8::MIN), 0x80u8);
    assert_eq!(Width::<i32>::to_unsigned(-1), u32::MAX);
    assert_eq!(Width::<i64>::from_unsigned(u64::MAX), -1);
    assert_eq!(Width::<u16>::to_unsigned(0xabcd), 0xabcd);
    assert_eq!(Width::<u16>::from_unsigned(0xabcd), 0xabcd);
    // the associated type is resolved at compile time
    let x: <i16 as SignedToUnsigned>::Unsigned = 0xffffu16;
    assert_eq!(Width::<i16>::from_unsigned(x), -1);
    const NEG: u64 = Width::<i64>::to_unsigned(-2);
    assert_eq!(NEG, u64::MAX - 1);
}

#[test]
fn sign_test() {
    assert!(Width::<i8>::is_negative(i8::MIN));
    assert!(Width::<i64>::is_negative(-1));
    assert!(!Width::<i32>::is_negative(0));
    assert!(!Width::<i16>::is_negative(i16::MAX));
    assert!(!Width::<u8>::is_negative(u8::MAX));
    assert!(!Width::<u64>::is_negative(1 << 63));
    const NEG: bool = Width::<i16>::is_negative(-5);
    assert!(NEG);
}

#[test]
fn bits_and_signedness() {
    fn check<T: Int>(bits: u32, signed: bool) {
        assert_eq!(T::BITS, bits);
        assert_eq!(T::SIGNED, signed);
    }
    check::<u8>(8, false);
    check::<i8>(8, true);
    check::<u16>(16, false);
    check::<i16>(16, true);
    check::<u32>(32, false);
    check::<i32>(32, true);
    check::<u64>(64, false);
    check::<i64>(64, true);
}
