use std::{
    fmt::{self, Display},
    ops::Neg,
};

use num_traits::ToPrimitive;
use tracing::trace;

use crate::{
    error::{Fp16Error, Result},
    scalar_fp16::{
        core::Format,
        encode::{fp32_to_fp16a, fp32_to_fp16b},
    },
};

/// Bit 15 is the sign in both 16-bit layouts.
const SIGN_BIT: u32 = 0x8000;

/// A 16-bit encoded scalar tagged with its layout.
///
/// Built from a float, only the low 16 bits of `value` are set. Built from a
/// raw integer, all 32 bits are kept as given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarFP16 {
    value: u32,
    format: Format,
}

impl ScalarFP16 {
    /// Encode `val` with the encoder matching `format`.
    pub fn new(val: f32, format: Format) -> Self {
        let value = match format {
            Format::Fp16a => fp32_to_fp16a(val),
            Format::Fp16b => fp32_to_fp16b(val),
        };
        if format == Format::Fp16a && value & 0x7FFF == 0x7FFF {
            trace!(input = val, value, "fp16a at maximum magnitude");
        }
        ScalarFP16 { value, format }
    }

    /// Narrow to f32 first, then encode.
    pub fn from_f64(val: f64, format: Format) -> Self {
        Self::new(val as f32, format)
    }

    /// Encode any primitive number that can be expressed as an f32.
    pub fn from_num<T: ToPrimitive>(n: T, format: Format) -> Option<Self> {
        n.to_f32().map(|val| Self::new(val, format))
    }

    /// Store `raw`'s bit pattern as-is under `format`. No encoding happens.
    pub fn from_u32(raw: u32, format: Format) -> Self {
        if raw >> 16 != 0 {
            trace!(raw, %format, "raw value uses the upper half-word");
        }
        ScalarFP16 { value: raw, format }
    }

    /// Store `raw`'s two's-complement bit pattern as-is under `format`.
    pub fn from_i32(raw: i32, format: Format) -> Self {
        Self::from_u32(raw as u32, format)
    }

    pub fn negate(&self) -> Self {
        ScalarFP16 {
            value: self.value ^ SIGN_BIT,
            format: self.format,
        }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn get_format(&self) -> Format {
        self.format
    }
}

impl Neg for ScalarFP16 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<f32> for ScalarFP16 {
    fn from(val: f32) -> Self {
        ScalarFP16::new(val, Format::default())
    }
}

impl From<f64> for ScalarFP16 {
    fn from(val: f64) -> Self {
        ScalarFP16::from_f64(val, Format::default())
    }
}

impl From<i32> for ScalarFP16 {
    fn from(raw: i32) -> Self {
        ScalarFP16::from_i32(raw, Format::default())
    }
}

impl From<u32> for ScalarFP16 {
    fn from(raw: u32) -> Self {
        ScalarFP16::from_u32(raw, Format::default())
    }
}

impl TryFrom<(i64, Format)> for ScalarFP16 {
    type Error = Fp16Error;

    fn try_from((raw, format): (i64, Format)) -> Result<Self> {
        i32::try_from(raw)
            .map(|raw| ScalarFP16::from_i32(raw, format))
            .map_err(|_| Fp16Error::RawOutOfRange { value: raw.into() })
    }
}

impl TryFrom<(u64, Format)> for ScalarFP16 {
    type Error = Fp16Error;

    fn try_from((raw, format): (u64, Format)) -> Result<Self> {
        u32::try_from(raw)
            .map(|raw| ScalarFP16::from_u32(raw, format))
            .map_err(|_| Fp16Error::RawOutOfRange { value: raw.into() })
    }
}

impl Display for ScalarFP16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#06x})", self.format, self.value)
    }
}
