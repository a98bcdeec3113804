//! Scalars whose format is fixed by the type.

use std::{
    fmt::{self, Display},
    ops::Neg,
};

use num_traits::ToPrimitive;

use crate::scalar_fp16::{core::Format, scalar::ScalarFP16};

macro_rules! fixed_format_scalar {
    ($(#[$meta:meta])* $name:ident, $format:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(ScalarFP16);

        impl $name {
            pub const FORMAT: Format = $format;

            pub fn new(val: f32) -> Self {
                $name(ScalarFP16::new(val, Self::FORMAT))
            }

            pub fn from_num<T: ToPrimitive>(n: T) -> Option<Self> {
                ScalarFP16::from_num(n, Self::FORMAT).map($name)
            }

            pub fn negate(&self) -> Self {
                $name(self.0.negate())
            }

            pub fn get(&self) -> u32 {
                self.0.get()
            }

            pub fn get_format(&self) -> Format {
                Self::FORMAT
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name(ScalarFP16::from_u32(0, Self::FORMAT))
            }
        }

        impl From<f32> for $name {
            fn from(val: f32) -> Self {
                $name::new(val)
            }
        }

        impl From<f64> for $name {
            fn from(val: f64) -> Self {
                $name(ScalarFP16::from_f64(val, Self::FORMAT))
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                $name(ScalarFP16::from_i32(raw, Self::FORMAT))
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                $name(ScalarFP16::from_u32(raw, Self::FORMAT))
            }
        }

        impl From<$name> for ScalarFP16 {
            fn from(val: $name) -> Self {
                val.0
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self::Output {
                self.negate()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

fixed_format_scalar!(
    /// A scalar that is always fp16a.
    ScalarFP16a,
    Format::Fp16a
);

fixed_format_scalar!(
    /// A scalar that is always fp16b.
    ScalarFP16b,
    Format::Fp16b
);
