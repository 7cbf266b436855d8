//! Macros for export

/// For a single parameter generic type, forwards `Display` to `Debug` and
/// routes the radix formatting traits through the type's
/// `fmt_radix(&self, f, g)` helper, where `g` formats one field in the
/// requested radix.
#[macro_export]
macro_rules! forward_debug_fmt {
    ($name:ident<$t:ident: $bound:path>) => {
        impl<$t: $bound> fmt::Display for $name<$t> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl<$t: $bound> fmt::LowerHex for $name<$t> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                $name::fmt_radix(self, f, |x, f| fmt::LowerHex::fmt(x, f))
            }
        }

        impl<$t: $bound> fmt::UpperHex for $name<$t> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                $name::fmt_radix(self, f, |x, f| fmt::UpperHex::fmt(x, f))
            }
        }

        impl<$t: $bound> fmt::Octal for $name<$t> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                $name::fmt_radix(self, f, |x, f| fmt::Octal::fmt(x, f))
            }
        }

        impl<$t: $bound> fmt::Binary for $name<$t> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                $name::fmt_radix(self, f, |x, f| fmt::Binary::fmt(x, f))
            }
        }
    };
}
