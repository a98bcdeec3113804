use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    error::{Fp16Error, Result},
    hw_codes::{SFPLOADI_MOD0_FLOATA, SFPLOADI_MOD0_FLOATB},
};

/// Which 16-bit layout a scalar is encoded in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    Fp16a,
    #[default]
    Fp16b,
}

impl Format {
    /// Hardware load-mode code for this layout.
    pub const fn code(self) -> u32 {
        match self {
            Format::Fp16a => SFPLOADI_MOD0_FLOATA,
            Format::Fp16b => SFPLOADI_MOD0_FLOATB,
        }
    }

    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            SFPLOADI_MOD0_FLOATA => Ok(Format::Fp16a),
            SFPLOADI_MOD0_FLOATB => Ok(Format::Fp16b),
            other => Err(Fp16Error::UnknownFormatCode(other)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Format::Fp16a => "fp16a",
            Format::Fp16b => "fp16b",
        }
    }
}

impl From<Format> for u32 {
    fn from(format: Format) -> Self {
        format.code()
    }
}

impl TryFrom<u32> for Format {
    type Error = Fp16Error;

    fn try_from(code: u32) -> Result<Self> {
        Format::from_code(code)
    }
}

impl FromStr for Format {
    type Err = Fp16Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("fp16a") {
            Ok(Format::Fp16a)
        } else if s.eq_ignore_ascii_case("fp16b") {
            Ok(Format::Fp16b)
        } else {
            Err(Fp16Error::UnknownFormatName(s.to_string()))
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
